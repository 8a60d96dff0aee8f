use std::sync::Arc;

use anyhow::Result;
use estate_auth_local::{CredentialError, CredentialHasher};
use estate_core::bail_estate;
use estate_core::errors::EstateError;

use super::tenants_schema::{CreateTenant, PasswordUpdate, ProfileUpdate};
use super::tenants_shared::{not_found_message, Tenant, TenantStore};

pub struct TenantsService {
    pub store: Arc<dyn TenantStore>,
    pub hasher: Arc<dyn CredentialHasher>,
}

impl TenantsService {
    pub fn new(store: Arc<dyn TenantStore>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { store, hasher }
    }

    pub async fn create(&self, data: CreateTenant) -> Result<Tenant> {
        let (Some(name), Some(email), Some(contact_number), Some(password)) =
            (data.name, data.email, data.contact_number, data.password)
        else {
            return Err(EstateError::bad_request("Validation failed: incomplete tenant").into_anyhow());
        };

        self.ensure_email_free(&email, None).await?;

        let tenant = Tenant {
            id: 0,
            name,
            email,
            contact_number,
            password: self.hasher.hash(&password).await.map_err(credential_error)?,
        };

        let saved = self.store.insert(tenant).await?;
        tracing::info!(tenant_id = saved.id, "tenant created");
        Ok(saved)
    }

    pub async fn find(&self) -> Result<Vec<Tenant>> {
        self.store.find_all().await
    }

    pub async fn get(&self, id: i64) -> Result<Tenant> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| EstateError::not_found(not_found_message(id)).into_anyhow())
    }

    pub async fn update_profile(&self, id: i64, data: ProfileUpdate) -> Result<Tenant> {
        let current = self.get(id).await?;

        if let Some(email) = data.email.as_deref().filter(|e| !e.is_empty() && *e != current.email) {
            self.ensure_email_free(email, Some(id)).await?;
        }

        self.store.save(merge_profile(current, data)).await
    }

    pub async fn update_password(&self, id: i64, data: PasswordUpdate) -> Result<Tenant> {
        let (Some(old_password), Some(new_password)) = (data.old_password, data.new_password) else {
            return Err(EstateError::bad_request("Validation failed: incomplete password update").into_anyhow());
        };

        let mut tenant = self.get(id).await?;

        if !self.hasher.verify(&old_password, &tenant.password).await? {
            tracing::warn!(tenant_id = id, "password change rejected");
            bail_estate!(not_authenticated, "Old password is incorrect");
        }

        tenant.password = self.hasher.hash(&new_password).await.map_err(credential_error)?;
        let saved = self.store.save(tenant).await?;
        tracing::info!(tenant_id = id, "tenant password changed");
        Ok(saved)
    }

    pub async fn remove(&self, id: i64) -> Result<String> {
        if !self.store.delete(id).await? {
            bail_estate!(not_found, not_found_message(id));
        }
        tracing::info!(tenant_id = id, "tenant deleted");
        Ok(format!("Tenant with ID: {id} was successfully deleted."))
    }

    async fn ensure_email_free(&self, email: &str, owner: Option<i64>) -> Result<()> {
        match self.store.find_by_email(email).await? {
            Some(existing) if Some(existing.id) != owner => {
                Err(EstateError::bad_request("Validation failed: Email is already registered").into_anyhow())
            }
            _ => Ok(()),
        }
    }
}

fn credential_error(err: CredentialError) -> anyhow::Error {
    match err {
        CredentialError::TooLong(max) => {
            EstateError::bad_request(format!("Validation failed: Password cannot exceed {max} bytes")).into_anyhow()
        }
        other => other.into(),
    }
}

/// Sparse profile patch: text overwrites when non-empty, the contact
/// number when strictly positive. The password is never touched here.
pub fn merge_profile(mut current: Tenant, patch: ProfileUpdate) -> Tenant {
    if let Some(name) = patch.name.filter(|s| !s.is_empty()) {
        current.name = name;
    }
    if let Some(email) = patch.email.filter(|s| !s.is_empty()) {
        current.email = email;
    }
    if let Some(contact_number) = patch.contact_number.filter(|n| *n > 0) {
        current.contact_number = contact_number;
    }
    current
}
