use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub api: ApiSettings,
    #[serde(default)]
    pub auth: AuthSettings,
    /// JSON table of translations layered over the built-in English strings.
    #[serde(default)]
    pub locale_file: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AuthSettings {
    /// Seed token, usually supplied through the environment.
    #[serde(default)]
    pub token: Option<String>,
}

fn default_timeout_secs() -> u64 {
    30
}

fn base_builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    config::Config::builder()
        .set_default("api.base_url", "http://localhost:50505")?
        .set_default("api.timeout_secs", default_timeout_secs() as i64)
}

fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Settings, ConfigError> {
    builder.build()?.try_deserialize::<Settings>()
}

/// Defaults, then `file_manager.toml` in the working directory if present,
/// then `FILE_MANAGER__*` environment variables.
pub fn get_configuration() -> Result<Settings, ConfigError> {
    let builder = base_builder()?
        .add_source(config::File::with_name("file_manager").required(false))
        .add_source(
            config::Environment::with_prefix("FILE_MANAGER")
                .prefix_separator("__")
                .separator("__"),
        );
    from_builder(builder)
}
