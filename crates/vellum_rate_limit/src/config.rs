//! Layered TOML configuration.
//!
//! Sources, later ones overriding earlier ones:
//! 1. Bundled defaults (include_str! from vellum.toml)
//! 2. User config in the home directory (~/.config/vellum/vellum.toml)
//! 3. User config in the current directory (./vellum.toml)
//! 4. An explicit file passed on the command line

use config::{Config, ConfigBuilder, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};
use vellum_core::{ChannelStyle, GenerationTask, TaskParams};
use vellum_error::{
    ConfigError, ModelsError, ModelsErrorKind, NarrativeError, NarrativeErrorKind, VellumError,
    VellumResult,
};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../vellum.toml");

/// Remote text-generation service settings.
///
/// ```toml
/// [provider]
/// name = "openai"
/// model = "gpt-4o-mini"
/// api_url = "https://api.openai.com/v1/chat/completions"
/// api_key_env = "OPENAI_API_KEY"
/// timeout_secs = 120
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// Provider label used in logs
    pub name: String,
    /// Model identifier sent with every request
    pub model: String,
    /// Chat completions endpoint
    pub api_url: String,
    /// Environment variable holding the credential
    pub api_key_env: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    120
}

impl ProviderConfig {
    /// Read the credential named by `api_key_env` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ModelsErrorKind::MissingApiKey`] if the variable is unset or blank.
    pub fn api_key(&self) -> VellumResult<String> {
        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(VellumError::from(ModelsError::new(
                ModelsErrorKind::MissingApiKey(self.api_key_env.clone()),
            ))),
        }
    }
}

/// Retry policy for transient service failures.
///
/// `max_retries = 0` disables retrying entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct RetryConfig {
    /// Additional attempts after the first failure
    pub max_retries: usize,
    /// Delay before the first retry, in milliseconds
    pub initial_backoff_ms: u64,
    /// Ceiling for any single delay, in seconds
    pub max_delay_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff_ms: 500,
            max_delay_secs: 30,
        }
    }
}

/// Where projects live and which channel commands use by default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProjectsConfig {
    /// Projects root; falls back to a `Projects` folder beside the executable
    #[serde(default)]
    pub root: Option<PathBuf>,
    /// Channel used when a command is not given `--channel`
    #[serde(default = "default_channel")]
    pub default_channel: String,
}

fn default_channel() -> String {
    "shrouded".to_string()
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            root: None,
            default_channel: default_channel(),
        }
    }
}

/// Prompt templates.
///
/// Templates use `{name}` placeholders that the prompt builder fills from the
/// selected channel and the task input.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, derive_getters::Getters)]
pub struct PromptTemplates {
    /// Outline request: `{channel_name}`, `{tone}`, `{beats}`, `{seed}`
    outline: String,
    /// Treatments request: `{channel_name}`, `{tone}`, `{count}`, `{seed}`
    treatments: String,
    /// System persona for metadata generation
    metadata_system: String,
    /// Metadata request: `{blurb}`, `{seed}`
    metadata: String,
    /// System persona for beat expansion
    expand_system: String,
    /// Expansion request: `{channel_name}`, `{voice}`, `{broll}`, `{structure}`, `{beat}`
    expand: String,
    /// Response structure when B-roll is requested: `{channel_name}`
    expand_structure_broll: String,
    /// Response structure without B-roll
    expand_structure_plain: String,
    /// B-roll block when enabled: `{guidelines}`
    broll_enabled: String,
    /// B-roll block when disabled
    broll_disabled: String,
    /// System persona for thumbnail concepts
    thumbnails_system: String,
    /// Thumbnail request: `{style}`, `{seed}`
    thumbnails: String,
    /// System persona for polish passes
    polish_system: String,
    /// Editorial notes request: `{channel_name}`, `{voice}`, `{number}`, `{beat}`
    polish_notes: String,
    /// Full rewrite request: `{channel_name}`, `{voice}`, `{number}`, `{beat}`
    polish_rewrite: String,
    /// Tightening request: `{channel_name}`, `{voice}`, `{number}`, `{beat}`
    polish_tighten: String,
    /// System persona for the final smoothing pass
    finalize_system: String,
    /// Smoothing request: `{voice}`, `{narration}`
    finalize: String,
}

/// Top-level Vellum configuration.
///
/// # Example
///
/// ```no_run
/// use vellum_rate_limit::VellumConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = VellumConfig::load()?;
/// let style = config.channel("shrouded")?;
/// println!("{}", style.display_name());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VellumConfig {
    /// Remote service settings
    pub provider: ProviderConfig,
    /// Retry policy
    #[serde(default)]
    pub retry: RetryConfig,
    /// Projects root and default channel
    #[serde(default)]
    pub projects: ProjectsConfig,
    /// Per-task overrides of output length and temperature
    #[serde(default)]
    pub tasks: HashMap<String, TaskParams>,
    /// Channel presets keyed by channel name
    #[serde(default)]
    pub channels: BTreeMap<String, ChannelStyle>,
    /// Prompt templates
    pub prompts: PromptTemplates,
}

impl VellumConfig {
    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped if absent.
    #[instrument]
    pub fn load() -> VellumResult<Self> {
        Self::load_with(None)
    }

    /// Load the standard layers plus an explicit file with the highest precedence.
    ///
    /// # Errors
    ///
    /// Fails if the explicit file is missing, or if any layer cannot be parsed.
    #[instrument]
    pub fn load_with(extra: Option<&Path>) -> VellumResult<Self> {
        debug!("Loading configuration with precedence: explicit > current dir > home dir > bundled");

        let mut builder = Self::bundled();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/vellum/vellum.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::from(Path::new("vellum.toml")).required(false));

        if let Some(path) = extra {
            if !path.is_file() {
                return Err(ConfigError::new(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
                .into());
            }
            builder = builder.add_source(File::from(path));
        }

        Self::finish(builder)
    }

    /// Load the bundled defaults overlaid with a TOML document.
    ///
    /// No user files are consulted, which keeps results reproducible.
    pub fn from_toml_str(overrides: &str) -> VellumResult<Self> {
        Self::finish(Self::bundled().add_source(File::from_str(overrides, FileFormat::Toml)))
    }

    /// Load the bundled defaults overlaid with one file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> VellumResult<Self> {
        debug!("Loading configuration from file");
        Self::finish(Self::bundled().add_source(File::from(path.as_ref())))
    }

    fn bundled() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> VellumResult<Self> {
        let mut config: Self = builder
            .build()
            .map_err(|e| {
                VellumError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                VellumError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.channels = std::mem::take(&mut config.channels)
            .into_iter()
            .map(|(key, style)| {
                let style = style.with_key(key.clone());
                (key, style)
            })
            .collect();

        debug!(
            channels = config.channels.len(),
            model = %config.provider.model,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Look up a channel preset by key.
    ///
    /// # Errors
    ///
    /// Returns [`NarrativeErrorKind::UnknownChannel`] listing the configured keys.
    pub fn channel(&self, key: &str) -> VellumResult<&ChannelStyle> {
        self.channels.get(key).ok_or_else(|| {
            VellumError::from(NarrativeError::new(NarrativeErrorKind::UnknownChannel {
                given: key.to_string(),
                valid: self.channel_keys().join(", "),
            }))
        })
    }

    /// Configured channel keys, sorted.
    pub fn channel_keys(&self) -> Vec<&str> {
        self.channels.keys().map(String::as_str).collect()
    }

    /// Resolve the channel for a command: the explicit choice or the configured default.
    pub fn channel_or_default(&self, key: Option<&str>) -> VellumResult<&ChannelStyle> {
        self.channel(key.unwrap_or(&self.projects.default_channel))
    }

    /// Output length and temperature for a task.
    ///
    /// Falls back to the built-in defaults when the task has no `[tasks.*]` entry.
    pub fn task_params(&self, task: GenerationTask) -> TaskParams {
        self.tasks
            .get(&task.to_string())
            .copied()
            .unwrap_or_else(|| task.default_params())
    }
}
