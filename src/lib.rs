pub mod config;
pub mod credentials;
pub mod db;
pub mod error;
pub mod handlers;
pub mod router;
pub mod types;

pub use db::{Database, Owner, OwnerRepository};
pub use error::{ConfigError, PetclinicError};
