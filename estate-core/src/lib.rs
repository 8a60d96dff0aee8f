//! estate-core: transport-agnostic core for the rental backend.

pub mod config;
pub mod errors;
pub mod store;

pub use config::EstateConfig;
pub use errors::{ErrorKind, EstateError, EstateResult, StatusPayload};
pub use store::{Entity, EntityStore, MemoryStore};
