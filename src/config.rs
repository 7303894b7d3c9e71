use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: Server,
    pub search: Search,
    pub results: Results,
    pub observability: Observability,
    #[serde(default)]
    pub localization: Localization,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

/// Which job store answers `sid` lookups.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SearchBackend {
    Splunk,
    Memory,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Search {
    pub backend: SearchBackend,
    pub base_url: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    pub request_timeout_ms: u64,
    #[serde(default)]
    pub accept_invalid_certs: bool,
    /// JSON file of jobs loaded into the in-memory store at start-up.
    #[serde(default)]
    pub fixture_path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Results {
    pub default_count: i64,
    pub default_entity: String,
    pub mime_type: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Observability {
    pub service_name: String,
    pub log_level: String,
    #[serde(default)]
    pub json_logs: bool,
    pub enable_metrics: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Localization {
    #[serde(default = "default_locale")]
    pub default_locale: String,
    /// locale -> (message key -> translated text)
    #[serde(default)]
    pub catalogs: HashMap<String, HashMap<String, String>>,
}

impl Default for Localization {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            catalogs: HashMap::new(),
        }
    }
}

fn default_locale() -> String {
    "en-US".to_string()
}

/// Load settings from `config/default.toml`, `config/<env>.toml`, and env overrides.
pub fn load() -> Result<Settings, config::ConfigError> {
    load_from(Path::new("config"))
}

/// Same layering as [`load`], rooted at `dir` instead of `./config`.
pub fn load_from(dir: &Path) -> Result<Settings, config::ConfigError> {
    let env_name = std::env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());
    let default_path = dir.join("default");
    let env_path = dir.join(&env_name);
    config::Config::builder()
        .add_source(config::File::with_name(&default_path.to_string_lossy()))
        .add_source(config::File::with_name(&env_path.to_string_lossy()).required(false))
        .add_source(config::Environment::with_prefix("HEATMAP").separator("__"))
        .build()?
        .try_deserialize()
}
