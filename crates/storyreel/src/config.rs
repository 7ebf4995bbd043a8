//! Layered configuration for the storyreel pipeline.

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use storyreel_cache::SceneCacheConfig;
use storyreel_episode::OrchestratorConfig;
use storyreel_error::{ConfigError, StoryreelResult};
use storyreel_security::KeywordFilterConfig;
use storyreel_story::StoryConfig;
use storyreel_video::VideoConfig;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../storyreel.toml");

/// Prefix for environment overrides, e.g. `STORYREEL_VIDEO__MAX_RETRIES`.
const ENV_PREFIX: &str = "STORYREEL";

/// Model names for each capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_setters::Setters)]
#[setters(prefix = "with_", into)]
pub struct ModelsConfig {
    /// Model writing story segments
    #[serde(default = "default_text_model")]
    text: String,

    /// Model producing video clips
    #[serde(default = "default_video_model")]
    video: String,

    /// Model coordinating episodes
    #[serde(default = "default_coordinator_model")]
    coordinator: String,
}

fn default_text_model() -> String {
    "gemini-2.0-flash-exp".to_string()
}

fn default_video_model() -> String {
    "veo-003".to_string()
}

fn default_coordinator_model() -> String {
    "gemini-1.5-pro".to_string()
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            text: default_text_model(),
            video: default_video_model(),
            coordinator: default_coordinator_model(),
        }
    }
}

/// Content filter switch plus keyword settings.
#[derive(Debug, Clone, Serialize, Deserialize, Getters, derive_setters::Setters)]
#[setters(prefix = "with_")]
pub struct FilterConfig {
    /// Screen setting and character fields before generation
    #[serde(default = "default_filter_enabled")]
    enabled: bool,

    /// Keyword and special character limits
    #[serde(flatten)]
    keywords: KeywordFilterConfig,
}

fn default_filter_enabled() -> bool {
    true
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            enabled: default_filter_enabled(),
            keywords: KeywordFilterConfig::default(),
        }
    }
}

/// Complete storyreel configuration.
///
/// Every section falls back to its defaults when absent.
///
/// # Examples
///
/// ```
/// use storyreel::StoryreelConfig;
///
/// let config = StoryreelConfig::from_toml("[video]\nmax_retries = 1\n").unwrap();
/// assert_eq!(*config.video().max_retries(), 1);
/// assert_eq!(*config.episode().max_segments(), 7);
/// assert_eq!(config.models().video(), "veo-003");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, Getters, derive_setters::Setters)]
#[setters(prefix = "with_")]
pub struct StoryreelConfig {
    /// Model names
    #[serde(default)]
    models: ModelsConfig,

    /// Segment generator settings
    #[serde(default)]
    story: StoryConfig,

    /// Video retrier settings
    #[serde(default)]
    video: VideoConfig,

    /// Scene cache settings
    #[serde(default)]
    cache: SceneCacheConfig,

    /// Episode orchestrator settings
    #[serde(default)]
    episode: OrchestratorConfig,

    /// Content filter settings
    #[serde(default)]
    filter: FilterConfig,
}

impl StoryreelConfig {
    /// Load configuration with precedence: environment > current dir > home dir > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (storyreel.toml shipped with the crate)
    /// 2. User config in home directory (~/.config/storyreel/storyreel.toml)
    /// 3. User config in current directory (./storyreel.toml)
    /// 4. `STORYREEL_<SECTION>__<KEY>` environment variables
    ///
    /// Missing user files are skipped.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] when a source cannot be parsed or the episode bounds
    /// are invalid.
    #[instrument]
    pub fn load() -> StoryreelResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled defaults");

        let mut builder = Self::defaults();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/storyreel/storyreel.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("storyreel").required(false));

        Self::finish(builder.add_source(Self::environment()))
    }

    /// Load configuration from a specific file layered over the bundled
    /// defaults, with environment overrides on top.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] when the file is missing or invalid.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> StoryreelResult<Self> {
        debug!("Loading configuration from file");
        let builder = Self::defaults()
            .add_source(File::from(path.as_ref()))
            .add_source(Self::environment());
        Self::finish(builder)
    }

    /// Parse TOML layered over the bundled defaults. No environment overrides.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] when the text is invalid.
    pub fn from_toml(toml: &str) -> StoryreelResult<Self> {
        Self::finish(Self::defaults().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn defaults() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> StoryreelResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

        config.episode.validate()?;
        Ok(config)
    }
}
