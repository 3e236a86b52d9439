//! Database credential resolution.
//!
//! Layout:
//! - `params.rs`: connection parameters built from a resolved secret
//! - `resolver.rs`: secret id derivation and the one-shot resolution flow
//! - `secrets_store.rs`: the secrets store seam and its implementations

pub mod params;
pub mod resolver;
pub mod secrets_store;

pub use params::{ConnectionParams, DatabaseSecret};
pub use resolver::{SECRETS_NAME_VAR, resolve_connection, secret_id_from_name};
pub use secrets_store::{HttpSecretsStore, SecretsStore, StaticSecretsStore};
