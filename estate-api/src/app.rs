use estate_axum::{axum, AxumApp};
use estate_core::EstateConfig;

use crate::services::{properties, tenants, EstateServices};

pub fn estate_app(config: EstateConfig, services: EstateServices) -> AxumApp {
    axum(config)
        .use_router("/api/properties", properties::properties_routes::router(services.properties))
        .use_router("/api/tenants", tenants::tenants_routes::router(services.tenants))
        .service("/health", || async { "ok" })
        .with_request_tracing()
}
