//! Client configuration.
//!
//! Defaults, environment overrides and builder methods for everything the
//! client needs at startup.

use std::path::PathBuf;
use std::time::Duration;

/// Default store location (the serverless function root).
pub const DEFAULT_API_BASE: &str = "http://localhost:3000/server/SkillBridge";

/// Environment variable overriding [`ClientConfig::api_base`].
pub const API_BASE_ENV: &str = "SKILLBRIDGE_API_BASE";

/// Environment variable overriding [`ClientConfig::log_dir`].
pub const LOG_DIR_ENV: &str = "SKILLBRIDGE_LOG_DIR";

const DEFAULT_CATEGORIES: [&str; 5] = ["Programming", "Design", "Communication", "Leadership", "Other"];
const DEFAULT_SKILL_TYPES: [&str; 5] = ["Project", "Work Task", "Practice", "Teaching", "Other"];

/// Configuration for the client.
///
/// # Example
///
/// ```ignore
/// use skillbridge::config::ClientConfig;
///
/// let config = ClientConfig::from_env()
///     .with_api_base("http://127.0.0.1:3000/server/SkillBridge/")
///     .with_toast_duration(Duration::from_secs(2));
/// assert_eq!(config.api_base, "http://127.0.0.1:3000/server/SkillBridge");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Store base URL, without a trailing slash
    pub api_base: String,
    /// How long a toast stays visible (default: 4s)
    pub toast_duration: Duration,
    /// Where the log file goes (default: ~/.skillbridge)
    pub log_dir: Option<PathBuf>,
    /// Options offered for a learning's category
    pub categories: Vec<String>,
    /// Options offered for an applied skill's type
    pub skill_types: Vec<String>,
    /// Redraw / toast-expiry interval (default: 250ms)
    pub tick_rate: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            toast_duration: Duration::from_secs(4),
            log_dir: dirs::home_dir().map(|home| home.join(".skillbridge")),
            categories: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            skill_types: DEFAULT_SKILL_TYPES.iter().map(|s| s.to_string()).collect(),
            tick_rate: Duration::from_millis(250),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the store base URL. Trailing slashes are stripped.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration = duration;
        self
    }

    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_skill_types(mut self, skill_types: Vec<String>) -> Self {
        self.skill_types = skill_types;
        self
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Defaults overridden by `SKILLBRIDGE_API_BASE` / `SKILLBRIDGE_LOG_DIR`.
    /// Blank values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(base) = non_blank_env(API_BASE_ENV) {
            config = config.with_api_base(base);
        }
        if let Some(dir) = non_blank_env(LOG_DIR_ENV) {
            config = config.with_log_dir(dir);
        }
        config
    }

    /// Full path of the log file, if a log directory is known.
    pub fn log_file(&self) -> Option<PathBuf> {
        self.log_dir.as_ref().map(|dir| dir.join("skillbridge.log"))
    }
}

fn non_blank_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}
