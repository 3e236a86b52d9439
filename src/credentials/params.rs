use crate::error::ConfigError;
use serde_json::Value;
use std::fmt;
use url::Url;

pub const ENGINE: &str = "mysql";
pub const MYSQL_PORT: u16 = 3306;
pub const DATABASE_NAME: &str = "petclinic";
pub const CREATE_DATABASE_DIRECTIVE: &str = "createDatabaseIfNotExist";

/// Credential blob stored in the secrets store.
#[derive(Clone)]
pub struct DatabaseSecret {
    pub host: String,
    pub username: String,
    pub password: String,
}

impl DatabaseSecret {
    /// Parse the JSON secret string; `host`, `username` and `password` must all be strings.
    pub fn from_secret_string(secret: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(secret)?;
        Self::from_payload(&value)
    }

    pub fn from_payload(value: &Value) -> Result<Self, ConfigError> {
        Ok(Self {
            host: required_str(value, "host")?,
            username: required_str(value, "username")?,
            password: required_str(value, "password")?,
        })
    }
}

impl fmt::Debug for DatabaseSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSecret")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn required_str(value: &Value, field: &'static str) -> Result<String, ConfigError> {
    value
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(ConfigError::MissingSecretField(field))
}

/// Connection parameters for the storage driver.
///
/// `url` never carries the credentials; they are only spliced in by
/// [`ConnectionParams::connect_url`].
#[derive(Clone)]
pub struct ConnectionParams {
    url: Url,
    username: String,
    password: String,
}

impl ConnectionParams {
    pub fn from_secret(secret: DatabaseSecret) -> Result<Self, ConfigError> {
        let url = Url::parse(&format!(
            "{ENGINE}://{}:{MYSQL_PORT}/{DATABASE_NAME}?{CREATE_DATABASE_DIRECTIVE}=true",
            secret.host
        ))?;
        Ok(Self {
            url,
            username: secret.username,
            password: secret.password,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn host(&self) -> &str {
        self.url.host_str().unwrap_or_default()
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn create_database_if_absent(&self) -> bool {
        self.url
            .query_pairs()
            .any(|(k, v)| k == CREATE_DATABASE_DIRECTIVE && v == "true")
    }

    /// URL handed to the driver: credentials embedded, directive stripped.
    pub fn connect_url(&self) -> Result<Url, ConfigError> {
        let mut url = self.url.clone();
        url.set_username(&self.username)
            .map_err(|_| ConfigError::CredentialsRejected)?;
        url.set_password(Some(&self.password))
            .map_err(|_| ConfigError::CredentialsRejected)?;

        let retained: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(k, _)| k != CREATE_DATABASE_DIRECTIVE)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        if retained.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(retained);
        }
        Ok(url)
    }
}

impl fmt::Debug for ConnectionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionParams")
            .field("url", &self.url.as_str())
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
