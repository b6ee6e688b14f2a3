//! Prompt assembly from channel presets and templates.

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;
use vellum_core::{ChannelStyle, GenerateRequest, GenerationTask, Message};
use vellum_error::{BuilderError, BuilderErrorKind, VellumResult};
use vellum_rate_limit::VellumConfig;

use crate::PolishMode;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([a-z_]+)\}").expect("Valid placeholder regex"));

/// Fill `{name}` placeholders in one pass.
///
/// Unknown names are left as written, and substituted values are never
/// rescanned, so seeds containing braces pass through untouched.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use vellum_narrative::render_template;
///
/// let vars = HashMap::from([("seed", "a {humming} tower")]);
/// assert_eq!(
///     render_template("Seed: {seed} / {other}", &vars),
///     "Seed: a {humming} tower / {other}"
/// );
/// ```
pub fn render_template(template: &str, vars: &HashMap<&str, &str>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match vars.get(&caps[1]) {
            Some(value) => (*value).to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Builds generation requests for one channel.
#[derive(Debug, Clone, Copy)]
pub struct PromptBuilder<'a> {
    config: &'a VellumConfig,
    style: &'a ChannelStyle,
}

impl<'a> PromptBuilder<'a> {
    /// Builder for a channel preset.
    pub fn new(config: &'a VellumConfig, style: &'a ChannelStyle) -> Self {
        Self { config, style }
    }

    /// Channel preset in use.
    pub fn style(&self) -> &ChannelStyle {
        self.style
    }

    fn request(&self, task: GenerationTask, system: &str, user: String) -> VellumResult<GenerateRequest> {
        let params = self.config.task_params(task);
        let request = GenerateRequest::builder()
            .messages(vec![Message::system(system.trim()), Message::user(user.trim())])
            .max_tokens(Some(*params.max_tokens()))
            .temperature(Some(*params.temperature()))
            .build()
            .map_err(|e| BuilderError::new(BuilderErrorKind::ValidationFailed(e.to_string())))?;
        Ok(request)
    }

    /// Numbered outline from a seed idea.
    pub fn outline(&self, seed: &str, beats: u32) -> VellumResult<GenerateRequest> {
        let beats = beats.to_string();
        let vars = HashMap::from([
            ("channel_name", self.style.display_name().as_str()),
            ("tone", self.style.outline_tone().trim()),
            ("beats", beats.as_str()),
            ("seed", seed.trim()),
        ]);
        let user = render_template(self.config.prompts.outline(), &vars);
        self.request(GenerationTask::Outline, self.style.outline_persona(), user)
    }

    /// Alternative treatments of a seed idea.
    pub fn treatments(&self, seed: &str, count: u32) -> VellumResult<GenerateRequest> {
        let count = count.to_string();
        let vars = HashMap::from([
            ("channel_name", self.style.display_name().as_str()),
            ("tone", self.style.outline_tone().trim()),
            ("count", count.as_str()),
            ("seed", seed.trim()),
        ]);
        let user = render_template(self.config.prompts.treatments(), &vars);
        self.request(GenerationTask::Treatments, self.style.outline_persona(), user)
    }

    /// Title, description, tags and hashtags for a concept or script.
    pub fn metadata(&self, seed: &str) -> VellumResult<GenerateRequest> {
        let vars = HashMap::from([
            ("blurb", self.style.metadata_blurb().trim()),
            ("seed", seed.trim()),
        ]);
        let user = render_template(self.config.prompts.metadata(), &vars);
        self.request(GenerationTask::Metadata, self.config.prompts.metadata_system(), user)
    }

    /// Narrated expansion of one beat.
    ///
    /// B-roll is only requested when the channel defines guidelines for it.
    pub fn expand(&self, beat: &str, want_broll: bool) -> VellumResult<GenerateRequest> {
        let prompts = &self.config.prompts;
        let channel_vars = HashMap::from([("channel_name", self.style.display_name().as_str())]);

        let (broll, structure) = match self.style.broll_guidelines() {
            Some(guidelines) if want_broll => (
                render_template(
                    prompts.broll_enabled(),
                    &HashMap::from([("guidelines", guidelines.trim())]),
                ),
                render_template(prompts.expand_structure_broll(), &channel_vars),
            ),
            _ => (
                prompts.broll_disabled().trim().to_string(),
                render_template(prompts.expand_structure_plain(), &channel_vars),
            ),
        };

        let vars = HashMap::from([
            ("channel_name", self.style.display_name().as_str()),
            ("voice", self.style.narration_voice().trim()),
            ("broll", broll.trim()),
            ("structure", structure.trim()),
            ("beat", beat.trim()),
        ]);
        let user = render_template(prompts.expand(), &vars);
        self.request(GenerationTask::Expand, prompts.expand_system(), user)
    }

    /// Thumbnail concepts and image prompts.
    pub fn thumbnails(&self, seed: &str) -> VellumResult<GenerateRequest> {
        let vars = HashMap::from([
            ("style", self.style.thumbnail_style().trim()),
            ("seed", seed.trim()),
        ]);
        let user = render_template(self.config.prompts.thumbnails(), &vars);
        self.request(GenerationTask::Thumbnails, self.config.prompts.thumbnails_system(), user)
    }

    /// Editorial pass over one draft beat.
    pub fn polish(&self, mode: PolishMode, number: u32, beat: &str) -> VellumResult<GenerateRequest> {
        let prompts = &self.config.prompts;
        let template = match mode {
            PolishMode::Notes => prompts.polish_notes(),
            PolishMode::Rewrite => prompts.polish_rewrite(),
            PolishMode::Tighten => prompts.polish_tighten(),
        };
        let number = number.to_string();
        let vars = HashMap::from([
            ("channel_name", self.style.display_name().as_str()),
            ("voice", self.style.narration_voice().trim()),
            ("number", number.as_str()),
            ("beat", beat.trim()),
        ]);
        let user = render_template(template, &vars);
        self.request(GenerationTask::Polish, prompts.polish_system(), user)
    }

    /// Read-aloud smoothing of final narration.
    pub fn smooth(&self, narration: &str) -> VellumResult<GenerateRequest> {
        let vars = HashMap::from([
            ("voice", self.style.narration_voice().trim()),
            ("narration", narration.trim()),
        ]);
        let user = render_template(self.config.prompts.finalize(), &vars);
        self.request(GenerationTask::Finalize, self.config.prompts.finalize_system(), user)
    }
}
