pub mod properties_routes;
pub mod properties_schema;
pub mod properties_service;
pub mod properties_shared;

pub use properties_service::PropertiesService;
pub use properties_shared::{Availability, Property, PropertyStore, PropertyType};
