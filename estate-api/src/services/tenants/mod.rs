pub mod tenants_routes;
pub mod tenants_schema;
pub mod tenants_service;
pub mod tenants_shared;

pub use tenants_service::TenantsService;
pub use tenants_shared::{Tenant, TenantStore};
