use crate::config::Config;
use crate::error::ConfigError;
use serde::Deserialize;
use std::collections::HashMap;
use std::future::Future;
use tracing::debug;
use url::Url;

pub const SECRETS_TOKEN_HEADER: &str = "X-Aws-Parameters-Secrets-Token";

/// Fetches secret strings by id.
pub trait SecretsStore {
    fn get_secret_string(
        &self,
        secret_id: &str,
    ) -> impl Future<Output = Result<String, ConfigError>> + Send;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GetSecretValueResponse {
    #[serde(default)]
    secret_string: Option<String>,
}

/// Secrets store reached over HTTP (`GET {endpoint}/secretsmanager/get?secretId=...`).
pub struct HttpSecretsStore {
    client: reqwest::Client,
    endpoint: Url,
    token: Option<String>,
}

impl HttpSecretsStore {
    pub fn new(endpoint: Url, token: Option<String>) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("petclinic-customers/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint,
            token,
        })
    }

    pub fn from_config(cfg: &Config) -> Result<Self, ConfigError> {
        Self::new(cfg.secrets_endpoint.clone(), cfg.secrets_token.clone())
    }
}

impl SecretsStore for HttpSecretsStore {
    async fn get_secret_string(&self, secret_id: &str) -> Result<String, ConfigError> {
        let mut url = self.endpoint.join("secretsmanager/get")?;
        url.query_pairs_mut().append_pair("secretId", secret_id);

        let mut request = self.client.get(url).header("Accept", "application/json");
        if let Some(token) = self.token.as_deref() {
            request = request.header(SECRETS_TOKEN_HEADER, token);
        }

        let resp = request.send().await?.error_for_status()?;
        let body: GetSecretValueResponse = resp.json().await?;
        debug!(secret_id, "secret value fetched");
        body.secret_string
            .ok_or_else(|| ConfigError::SecretNotString(secret_id.to_string()))
    }
}

/// In-memory store keyed by secret id.
#[derive(Debug, Default, Clone)]
pub struct StaticSecretsStore {
    secrets: HashMap<String, String>,
}

impl StaticSecretsStore {
    pub fn with_secret(mut self, secret_id: impl Into<String>, value: impl Into<String>) -> Self {
        self.secrets.insert(secret_id.into(), value.into());
        self
    }
}

impl SecretsStore for StaticSecretsStore {
    async fn get_secret_string(&self, secret_id: &str) -> Result<String, ConfigError> {
        self.secrets
            .get(secret_id)
            .cloned()
            .ok_or_else(|| ConfigError::SecretNotFound(secret_id.to_string()))
    }
}
