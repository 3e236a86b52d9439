use super::params::{ConnectionParams, DatabaseSecret};
use super::secrets_store::SecretsStore;
use crate::error::ConfigError;
use std::collections::HashMap;
use tracing::info;

/// Environment variable naming the deployment, e.g. `petclinic-prod-mysql`.
pub const SECRETS_NAME_VAR: &str = "SECRETS_NAME";
const NAME_DELIMITER: char = '-';

/// Derive the secret id from the first two `-` separated parts of `name`.
/// Empty parts are kept as-is; only a name without any `-` is malformed.
pub fn secret_id_from_name(name: &str) -> Result<String, ConfigError> {
    let mut parts = name.split(NAME_DELIMITER);
    match (parts.next(), parts.next()) {
        (Some(first), Some(second)) => Ok(format!("{first}{NAME_DELIMITER}{second}")),
        _ => Err(ConfigError::MalformedSecretName(name.to_string())),
    }
}

/// Resolve database connection parameters from the secrets store.
///
/// Runs once during startup. `env` is the process environment (or any
/// stand-in for it); nothing here reads ambient state. Every failure is
/// returned as-is, without retry.
pub async fn resolve_connection<S>(
    env: &HashMap<String, String>,
    store: &S,
) -> Result<ConnectionParams, ConfigError>
where
    S: SecretsStore,
{
    let name = env
        .get(SECRETS_NAME_VAR)
        .ok_or_else(|| ConfigError::MissingEnvVar(SECRETS_NAME_VAR.to_string()))?;
    let secret_id = secret_id_from_name(name)?;

    let secret_string = store.get_secret_string(&secret_id).await?;
    let secret = DatabaseSecret::from_secret_string(&secret_string)?;
    let params = ConnectionParams::from_secret(secret)?;

    info!(
        secret_id = %secret_id,
        host = %params.host(),
        username = %params.username(),
        "Database credentials resolved"
    );
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::params::CREATE_DATABASE_DIRECTIVE;
    use crate::credentials::secrets_store::StaticSecretsStore;

    fn env_with(name: &str) -> HashMap<String, String> {
        HashMap::from([(SECRETS_NAME_VAR.to_string(), name.to_string())])
    }

    #[test]
    fn secret_id_joins_first_two_parts() {
        assert_eq!(
            secret_id_from_name("petclinic-prod-mysql").unwrap(),
            "petclinic-prod"
        );
        assert_eq!(secret_id_from_name("petclinic-prod").unwrap(), "petclinic-prod");
        assert_eq!(secret_id_from_name("a-b-c-d").unwrap(), "a-b");
    }

    #[test]
    fn secret_id_keeps_empty_parts() {
        assert_eq!(secret_id_from_name("-prod").unwrap(), "-prod");
        assert_eq!(secret_id_from_name("-prod-mysql").unwrap(), "-prod");
        assert_eq!(secret_id_from_name("petclinic-").unwrap(), "petclinic-");
        assert_eq!(secret_id_from_name("-").unwrap(), "-");
    }

    #[test]
    fn secret_id_rejects_short_names() {
        for name in ["petclinic", ""] {
            assert!(
                matches!(
                    secret_id_from_name(name),
                    Err(ConfigError::MalformedSecretName(n)) if n == name
                ),
                "{name:?} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn resolves_connection_from_secret() {
        let store = StaticSecretsStore::default().with_secret(
            "petclinic-prod",
            r#"{"host":"db.example.com","username":"u","password":"p"}"#,
        );

        let params = resolve_connection(&env_with("petclinic-prod-mysql"), &store)
            .await
            .unwrap();

        let url = params.url().as_str();
        assert!(url.contains("db.example.com:3306"));
        assert!(url.contains(&format!("{CREATE_DATABASE_DIRECTIVE}=true")));
        assert_eq!(params.username(), "u");
        assert_eq!(params.connect_url().unwrap().password(), Some("p"));
    }

    #[tokio::test]
    async fn missing_env_var_is_fatal() {
        let store = StaticSecretsStore::default();
        let err = resolve_connection(&HashMap::new(), &store).await.unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(v) if v == SECRETS_NAME_VAR));
    }

    #[tokio::test]
    async fn malformed_name_never_reaches_the_store() {
        let store = StaticSecretsStore::default().with_secret("petclinic", "{}");
        let err = resolve_connection(&env_with("petclinic"), &store)
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::MalformedSecretName(_)));
    }

    #[tokio::test]
    async fn unknown_secret_propagates() {
        let store = StaticSecretsStore::default();
        let err = resolve_connection(&env_with("petclinic-prod-mysql"), &store)
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::SecretNotFound(id) if id == "petclinic-prod"));
    }

    #[tokio::test]
    async fn incomplete_secret_propagates() {
        let store = StaticSecretsStore::default()
            .with_secret("petclinic-prod", r#"{"host":"db.example.com","username":"u"}"#);
        let err = resolve_connection(&env_with("petclinic-prod-mysql"), &store)
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingSecretField("password")));
    }
}
