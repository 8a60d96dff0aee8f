use anyhow::Result;
use async_trait::async_trait;
use estate_core::{Entity, EntityStore};
use serde::Serialize;

/// A tenant account. `password` always holds a hash and is never serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub contact_number: i64,
    #[serde(skip_serializing)]
    pub password: String,
}

impl Entity for Tenant {
    fn id(&self) -> i64 {
        self.id
    }

    fn with_id(self, id: i64) -> Self {
        Self { id, ..self }
    }
}

#[async_trait]
pub trait TenantStore: EntityStore<Tenant> {
    async fn find_by_email(&self, email: &str) -> Result<Option<Tenant>>;
}

pub fn not_found_message(id: i64) -> String {
    format!("Tenant not found with ID: {id}")
}
