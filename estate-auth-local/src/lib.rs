//! Local (password) credential handling for the rental backend.

pub mod hasher;

pub use hasher::{BcryptHasher, CredentialError, CredentialHasher, HasherOptions, MAX_PASSWORD_BYTES};
