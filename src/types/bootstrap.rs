use crate::db::Database;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info};

/// Result of reseeding the database. Failures are carried as text, never raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    Initialized,
    Failed(String),
}

impl BootstrapOutcome {
    pub async fn run(db: &Database) -> Self {
        match db.run_seed().await {
            Ok(()) => {
                info!("Database successfully initialized for petclinic");
                Self::Initialized
            }
            Err(e) => {
                let message = format!("Error while initializing data {e}");
                error!(error = %e, dialect = ?db.dialect(), "Database seed failed");
                Self::Failed(message)
            }
        }
    }
}

impl IntoResponse for BootstrapOutcome {
    fn into_response(self) -> Response {
        match self {
            Self::Initialized => (StatusCode::OK, String::new()).into_response(),
            Self::Failed(message) => (StatusCode::INTERNAL_SERVER_ERROR, message).into_response(),
        }
    }
}
