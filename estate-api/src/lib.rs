mod app;
pub mod config;
pub mod services;

use std::sync::Arc;

use anyhow::Result;
use estate_auth_local::{BcryptHasher, CredentialHasher, HasherOptions};
use estate_axum::AxumApp;
use estate_core::EstateConfig;

pub use services::EstateState;

/// Build the app with the gateways selected by the config.
pub async fn build(config: EstateConfig) -> Result<AxumApp> {
    let hasher: Arc<dyn CredentialHasher> = Arc::new(BcryptHasher::new(HasherOptions::from_config(&config))?);
    let state = select_state(&config, hasher).await?;
    Ok(build_with_state(config, state))
}

/// Build the app around caller-supplied gateways.
pub fn build_with_state(config: EstateConfig, state: EstateState) -> AxumApp {
    let services = services::configure(state);
    app::estate_app(config, services)
}

#[cfg(feature = "postgres")]
async fn select_state(config: &EstateConfig, hasher: Arc<dyn CredentialHasher>) -> Result<EstateState> {
    match config.get("store.url") {
        Some(url) => {
            tracing::info!("using postgres store");
            EstateState::postgres(url, hasher).await
        }
        None => Ok(EstateState::in_memory(hasher)),
    }
}

#[cfg(not(feature = "postgres"))]
async fn select_state(config: &EstateConfig, hasher: Arc<dyn CredentialHasher>) -> Result<EstateState> {
    if config.has("store.url") {
        tracing::warn!("store.url is set but the postgres feature is disabled; using the in-memory store");
    }
    Ok(EstateState::in_memory(hasher))
}
