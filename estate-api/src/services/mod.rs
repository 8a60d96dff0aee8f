use std::sync::Arc;

pub mod adapters;
pub mod properties;
pub mod tenants;
pub mod types;

pub use types::EstateState;

pub struct EstateServices {
    pub properties: Arc<properties::PropertiesService>,
    pub tenants: Arc<tenants::TenantsService>,
}

pub fn configure(state: EstateState) -> EstateServices {
    let properties = Arc::new(properties::PropertiesService::new(state.properties));
    let tenants = Arc::new(tenants::TenantsService::new(state.tenants, state.hasher));

    EstateServices { properties, tenants }
}
