use crate::error::ConfigError;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use url::Url;

/// Optional file merged over the defaults, relative to the working directory.
pub const CONFIG_FILE: &str = "petclinic.toml";
/// Prefix for environment overrides, e.g. `PETCLINIC_LISTEN_ADDR`.
pub const ENV_PREFIX: &str = "PETCLINIC_";

/// Process configuration.
///
/// Database credentials are deliberately absent: they come from the secrets
/// store at startup unless `database_url` points at a local database.
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    pub listen_addr: String,
    pub loglevel: String,
    /// Base URL of the Secrets-Manager-compatible HTTP endpoint.
    pub secrets_endpoint: Url,
    /// Sent as `X-Aws-Parameters-Secrets-Token` when present.
    pub secrets_token: Option<String>,
    /// Skips secrets resolution entirely when set.
    pub database_url: Option<String>,
    /// Create the owners table on startup if it is missing.
    pub init_schema: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            loglevel: "info".to_string(),
            secrets_endpoint: Url::parse("http://localhost:2773")
                .expect("default secrets endpoint is a valid url"),
            secrets_token: None,
            database_url: None,
            init_schema: false,
        }
    }
}

impl Config {
    /// Defaults, then `petclinic.toml`, then `PETCLINIC_*` variables.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::figment().extract()?)
    }
}
