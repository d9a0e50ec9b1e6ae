//! Environment-driven configuration.
//!
//! The inspector reads its flag, URL prefix, and exclusion patterns once
//! at boot. `ROUTESCOPE_ENABLED` overrides the default of enabling the
//! inspector only when `APP_ENV` is `local` or `development`.

use std::env;
use std::fmt;

/// Loads `.env` from the working directory if present. Call once at
/// startup, before reading any configuration.
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

/// Default URL prefix the inspector is mounted under.
pub const DEFAULT_PREFIX: &str = "routescope";

/// URIs containing any of these are hidden from the listings: the
/// inspector's own routes plus ambient browser noise.
const DEFAULT_EXCLUDED: &[&str] = &["routescope", "favicon.ico", ".well-known"];

#[derive(Debug)]
pub enum ConfigError {
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { key, value } => {
                write!(f, "invalid value for {}: {:?}", key, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Bind address configuration, from `HOST` and `PORT`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value: raw })?,
            Err(_) => 3000,
        };

        Ok(Self { host, port })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Inspector settings, read at boot and never mutated afterwards.
///
/// # Examples
///
/// ```
/// use routescope::config::InspectorConfig;
///
/// let config = InspectorConfig::new()
///     .prefix("/__routes/")
///     .exclude("internal");
/// assert_eq!(config.prefix, "__routes");
/// assert!(config.excluded_patterns.contains(&"internal".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct InspectorConfig {
    /// Whether the inspector routes are mounted at all.
    pub enabled: bool,
    /// URL prefix, stored without surrounding slashes.
    pub prefix: String,
    /// Substring patterns filtered out of the listings.
    pub excluded_patterns: Vec<String>,
}

impl InspectorConfig {
    /// An enabled inspector with the default prefix and exclusions.
    pub fn new() -> Self {
        Self {
            enabled: true,
            prefix: DEFAULT_PREFIX.to_string(),
            excluded_patterns: default_excluded(),
        }
    }

    /// Reads `ROUTESCOPE_ENABLED` and `ROUTESCOPE_PREFIX`.
    ///
    /// Without an explicit flag the inspector is enabled only in a
    /// development environment (`APP_ENV` of `local` or `development`).
    pub fn from_env() -> Self {
        let enabled = match env::var("ROUTESCOPE_ENABLED") {
            Ok(raw) => parse_bool(&raw).unwrap_or_else(dev_environment),
            Err(_) => dev_environment(),
        };

        let prefix = env::var("ROUTESCOPE_PREFIX")
            .ok()
            .map(|raw| normalize_prefix(&raw))
            .filter(|prefix| !prefix.is_empty())
            .unwrap_or_else(|| DEFAULT_PREFIX.to_string());

        Self {
            enabled,
            prefix,
            excluded_patterns: default_excluded(),
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn prefix(mut self, prefix: &str) -> Self {
        let normalized = normalize_prefix(prefix);
        if !normalized.is_empty() {
            self.prefix = normalized;
        }
        self
    }

    /// Appends an exclusion pattern.
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.excluded_patterns.push(pattern.into());
        self
    }

    /// Replaces the exclusion list entirely. An empty list makes every
    /// registered route visible, the inspector's own included.
    pub fn exclusions<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub(crate) fn base_path(&self) -> String {
        format!("/{}", self.prefix)
    }
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn default_excluded() -> Vec<String> {
    DEFAULT_EXCLUDED.iter().map(|s| s.to_string()).collect()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn dev_environment() -> bool {
    matches!(
        env::var("APP_ENV").as_deref(),
        Ok("local") | Ok("development")
    )
}

fn normalize_prefix(raw: &str) -> String {
    raw.trim().trim_matches('/').to_string()
}
