//! PostgreSQL gateways for properties and tenants.
//!
//! Expects the tables below to exist; creating them is left to the
//! deployment's migration tooling.
//!
//! ```sql
//! CREATE TABLE property (
//!     id           BIGSERIAL PRIMARY KEY,
//!     name         TEXT NOT NULL,
//!     address      TEXT NOT NULL,
//!     price        DOUBLE PRECISION NOT NULL,
//!     availability TEXT NOT NULL,
//!     type         TEXT NOT NULL
//! );
//! CREATE TABLE tenant (
//!     id             BIGSERIAL PRIMARY KEY,
//!     name           TEXT NOT NULL,
//!     email          TEXT NOT NULL,
//!     contact_number BIGINT NOT NULL,
//!     password       TEXT NOT NULL
//! );
//! ```

use anyhow::Result;
use async_trait::async_trait;
use estate_core::EntityStore;
use sqlx::PgPool;

use crate::services::properties::{Availability, Property, PropertyStore};
use crate::services::tenants::{Tenant, TenantStore};

#[derive(sqlx::FromRow)]
struct PropertyRow {
    id: i64,
    name: String,
    address: String,
    price: f64,
    availability: String,
    #[sqlx(rename = "type")]
    kind: String,
}

impl TryFrom<PropertyRow> for Property {
    type Error = anyhow::Error;

    fn try_from(row: PropertyRow) -> Result<Self> {
        Ok(Property {
            id: row.id,
            name: row.name,
            address: row.address,
            price: row.price,
            availability: row.availability.parse()?,
            kind: row.kind.parse()?,
        })
    }
}

fn into_properties(rows: Vec<PropertyRow>) -> Result<Vec<Property>> {
    rows.into_iter().map(Property::try_from).collect()
}

const PROPERTY_COLUMNS: &str = "id, name, address, price, availability, type";

pub struct PostgresPropertyStore {
    pool: PgPool,
}

impl PostgresPropertyStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityStore<Property> for PostgresPropertyStore {
    async fn find_all(&self) -> Result<Vec<Property>> {
        let rows: Vec<PropertyRow> =
            sqlx::query_as(&format!("SELECT {PROPERTY_COLUMNS} FROM property ORDER BY id"))
                .fetch_all(&self.pool)
                .await?;
        into_properties(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Property>> {
        let row: Option<PropertyRow> =
            sqlx::query_as(&format!("SELECT {PROPERTY_COLUMNS} FROM property WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        row.map(Property::try_from).transpose()
    }

    async fn insert(&self, entity: Property) -> Result<Property> {
        let row: PropertyRow = sqlx::query_as(&format!(
            "INSERT INTO property (name, address, price, availability, type) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {PROPERTY_COLUMNS}"
        ))
        .bind(&entity.name)
        .bind(&entity.address)
        .bind(entity.price)
        .bind(entity.availability.as_str())
        .bind(entity.kind.as_str())
        .fetch_one(&self.pool)
        .await?;
        row.try_into()
    }

    async fn save(&self, entity: Property) -> Result<Property> {
        sqlx::query(
            "UPDATE property SET name = $2, address = $3, price = $4, availability = $5, type = $6 \
             WHERE id = $1",
        )
        .bind(entity.id)
        .bind(&entity.name)
        .bind(&entity.address)
        .bind(entity.price)
        .bind(entity.availability.as_str())
        .bind(entity.kind.as_str())
        .execute(&self.pool)
        .await?;
        Ok(entity)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let done = sqlx::query("DELETE FROM property WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(done.rows_affected() > 0)
    }
}

#[async_trait]
impl PropertyStore for PostgresPropertyStore {
    async fn find_by_availability(&self, availability: Availability) -> Result<Vec<Property>> {
        let rows: Vec<PropertyRow> = sqlx::query_as(&format!(
            "SELECT {PROPERTY_COLUMNS} FROM property WHERE availability = $1 ORDER BY id"
        ))
        .bind(availability.as_str())
        .fetch_all(&self.pool)
        .await?;
        into_properties(rows)
    }
}

#[derive(sqlx::FromRow)]
struct TenantRow {
    id: i64,
    name: String,
    email: String,
    contact_number: i64,
    password: String,
}

impl From<TenantRow> for Tenant {
    fn from(row: TenantRow) -> Self {
        Tenant {
            id: row.id,
            name: row.name,
            email: row.email,
            contact_number: row.contact_number,
            password: row.password,
        }
    }
}

const TENANT_COLUMNS: &str = "id, name, email, contact_number, password";

pub struct PostgresTenantStore {
    pool: PgPool,
}

impl PostgresTenantStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityStore<Tenant> for PostgresTenantStore {
    async fn find_all(&self) -> Result<Vec<Tenant>> {
        let rows: Vec<TenantRow> = sqlx::query_as(&format!("SELECT {TENANT_COLUMNS} FROM tenant ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Tenant::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Tenant>> {
        let row: Option<TenantRow> = sqlx::query_as(&format!("SELECT {TENANT_COLUMNS} FROM tenant WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Tenant::from))
    }

    async fn insert(&self, entity: Tenant) -> Result<Tenant> {
        let row: TenantRow = sqlx::query_as(&format!(
            "INSERT INTO tenant (name, email, contact_number, password) \
             VALUES ($1, $2, $3, $4) RETURNING {TENANT_COLUMNS}"
        ))
        .bind(&entity.name)
        .bind(&entity.email)
        .bind(entity.contact_number)
        .bind(&entity.password)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    async fn save(&self, entity: Tenant) -> Result<Tenant> {
        sqlx::query(
            "UPDATE tenant SET name = $2, email = $3, contact_number = $4, password = $5 WHERE id = $1",
        )
        .bind(entity.id)
        .bind(&entity.name)
        .bind(&entity.email)
        .bind(entity.contact_number)
        .bind(&entity.password)
        .execute(&self.pool)
        .await?;
        Ok(entity)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let done = sqlx::query("DELETE FROM tenant WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(done.rows_affected() > 0)
    }
}

#[async_trait]
impl TenantStore for PostgresTenantStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Tenant>> {
        let row: Option<TenantRow> = sqlx::query_as(&format!(
            "SELECT {TENANT_COLUMNS} FROM tenant WHERE email = $1 ORDER BY id LIMIT 1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Tenant::from))
    }
}
