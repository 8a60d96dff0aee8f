//! Credential hasher.
//!
//! bcrypt only reads the first 72 bytes of its input, so longer passwords
//! are refused instead of being silently shortened.

use async_trait::async_trait;
use bcrypt::{hash, verify};
use estate_core::EstateConfig;
use thiserror::Error;

/// Failures of the hashing primitive itself.
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("bcrypt cost must be between 4 and 31, got {0}")]
    InvalidCost(u32),

    #[error("password cannot exceed {0} bytes")]
    TooLong(usize),

    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

mod bcrypt_cost {
    pub const MIN: u32 = 4;
    pub const MAX: u32 = 31;
}

/// Longest plaintext bcrypt hashes without truncation.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// One-way password hashing with a matching verification.
///
/// Tokens are opaque to callers; plaintext never leaves the hasher.
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    async fn hash(&self, plaintext: &str) -> Result<String, CredentialError>;

    /// `false` for a wrong plaintext and for tokens that are not valid hashes.
    async fn verify(&self, plaintext: &str, token: &str) -> Result<bool, CredentialError>;
}

#[derive(Clone, Debug)]
pub struct HasherOptions {
    pub cost: u32,
}

impl Default for HasherOptions {
    fn default() -> Self {
        Self { cost: 10 }
    }
}

impl HasherOptions {
    /// Reads `auth.bcrypt.cost`, falling back to the default.
    pub fn from_config(config: &EstateConfig) -> Self {
        let defaults = Self::default();
        Self {
            cost: config.get_parsed("auth.bcrypt.cost").unwrap_or(defaults.cost),
        }
    }
}

pub struct BcryptHasher {
    options: HasherOptions,
}

impl BcryptHasher {
    pub fn new(options: HasherOptions) -> Result<Self, CredentialError> {
        if !(bcrypt_cost::MIN..=bcrypt_cost::MAX).contains(&options.cost) {
            return Err(CredentialError::InvalidCost(options.cost));
        }
        Ok(Self { options })
    }

    pub fn with_cost(cost: u32) -> Result<Self, CredentialError> {
        Self::new(HasherOptions { cost })
    }
}

#[async_trait]
impl CredentialHasher for BcryptHasher {
    async fn hash(&self, plaintext: &str) -> Result<String, CredentialError> {
        if plaintext.len() > MAX_PASSWORD_BYTES {
            return Err(CredentialError::TooLong(MAX_PASSWORD_BYTES));
        }
        Ok(hash(plaintext, self.options.cost)?)
    }

    async fn verify(&self, plaintext: &str, token: &str) -> Result<bool, CredentialError> {
        // Nothing longer was ever hashed; bcrypt would compare only the prefix.
        if plaintext.len() > MAX_PASSWORD_BYTES {
            return Ok(false);
        }
        match verify(plaintext, token) {
            Ok(ok) => Ok(ok),
            Err(e) => {
                tracing::warn!(error = %e, "stored credential is not a valid bcrypt hash");
                Ok(false)
            }
        }
    }
}
