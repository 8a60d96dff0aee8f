use std::sync::Arc;

use estate_auth_local::CredentialHasher;
use estate_core::MemoryStore;

use super::properties::{Property, PropertyStore};
use super::tenants::{Tenant, TenantStore};

/// Gateways and the hasher the services are built from.
#[derive(Clone)]
pub struct EstateState {
    pub properties: Arc<dyn PropertyStore>,
    pub tenants: Arc<dyn TenantStore>,
    pub hasher: Arc<dyn CredentialHasher>,
}

impl EstateState {
    pub fn in_memory(hasher: Arc<dyn CredentialHasher>) -> Self {
        Self {
            properties: Arc::new(MemoryStore::<Property>::new()),
            tenants: Arc::new(MemoryStore::<Tenant>::new()),
            hasher,
        }
    }

    #[cfg(feature = "postgres")]
    pub async fn postgres(url: &str, hasher: Arc<dyn CredentialHasher>) -> anyhow::Result<Self> {
        use super::adapters::postgres_adapter::{PostgresPropertyStore, PostgresTenantStore};

        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(5)
            .connect(url)
            .await?;

        Ok(Self {
            properties: Arc::new(PostgresPropertyStore::new(pool.clone())),
            tenants: Arc::new(PostgresTenantStore::new(pool)),
            hasher,
        })
    }
}
