//! Channel style presets.
//!
//! A channel is a named tone preset. Presets are pure data loaded from
//! configuration, so adding a channel never requires touching prompt code.

use serde::{Deserialize, Serialize};

/// Tone and vocabulary blocks for one channel.
///
/// # Examples
///
/// ```
/// use vellum_core::ChannelStyle;
///
/// let style: ChannelStyle = toml::from_str(r#"
///     display_name = "Aperture Black"
///     outline_persona = "You craft eerie image-driven outlines."
///     outline_tone = "Liminal spaces, analog photos."
///     narration_voice = "Sparse, hushed narration."
///     metadata_blurb = "A liminal-image channel."
///     thumbnail_style = "Heavy grain, fog."
/// "#).unwrap();
///
/// let style = style.with_key("aperture");
/// assert_eq!(style.key(), "aperture");
/// assert!(style.broll_guidelines().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ChannelStyle {
    /// Configuration key (`shrouded`, `aperture`, ...), filled in after loading
    #[serde(skip)]
    key: String,
    /// Human-readable channel name used inside prompts
    display_name: String,
    /// System persona for outline and treatment generation
    outline_persona: String,
    /// Tone and structure guidance for outlines
    outline_tone: String,
    /// Narrator voice guidance for beat expansion and polishing
    narration_voice: String,
    /// Cinematic B-roll guidance; channels without it never emit B-roll
    #[serde(default)]
    broll_guidelines: Option<String>,
    /// Channel description used for metadata generation
    metadata_blurb: String,
    /// Visual rules for thumbnail concepts
    thumbnail_style: String,
}

impl ChannelStyle {
    /// Attach the configuration key this style was registered under.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Whether this channel can produce a B-roll shot list.
    pub fn supports_broll(&self) -> bool {
        self.broll_guidelines.is_some()
    }
}
