use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

/// Errors raised while serving owner requests.
#[derive(Debug, ThisError)]
pub enum PetclinicError {
    #[error("Owner {0} not found")]
    OwnerNotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),
}

impl IntoResponse for PetclinicError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            PetclinicError::OwnerNotFound(id) => {
                let status = StatusCode::NOT_FOUND;
                let body = ApiErrorBody {
                    code: "NOT_FOUND".to_string(),
                    message: format!("Owner {id} not found"),
                };
                (status, body)
            }
            PetclinicError::DatabaseError(_) => {
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                let body = ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                };
                (status, body)
            }
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Startup failures. Any of these stops the process before it accepts traffic.
#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Malformed secret name {0:?}: expected at least two '-' separated parts")]
    MalformedSecretName(String),

    #[error("Secrets store request failed: {0}")]
    SecretsStore(#[from] reqwest::Error),

    #[error("Secret {0} not found")]
    SecretNotFound(String),

    #[error("Secret {0} has no string value")]
    SecretNotString(String),

    #[error("Secret payload is not valid JSON: {0}")]
    SecretPayload(#[from] serde_json::Error),

    #[error("Secret payload is missing field `{0}`")]
    MissingSecretField(&'static str),

    #[error("Invalid connection url: {0}")]
    Url(#[from] url::ParseError),

    #[error("Connection url cannot carry credentials")]
    CredentialsRejected,

    #[error("Unsupported database url scheme: {0}")]
    UnsupportedDatabase(String),

    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
