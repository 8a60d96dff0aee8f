use std::sync::Arc;

use anyhow::Result;
use estate_core::bail_estate;
use estate_core::errors::EstateError;

use super::properties_schema::{CreateProperty, PatchProperty};
use super::properties_shared::{not_found_message, Availability, Property, PropertyStore};

pub struct PropertiesService {
    pub store: Arc<dyn PropertyStore>,
}

impl PropertiesService {
    pub fn new(store: Arc<dyn PropertyStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, data: CreateProperty) -> Result<Property> {
        let (Some(name), Some(address), Some(price), Some(availability), Some(kind)) =
            (data.name, data.address, data.price, data.availability, data.kind)
        else {
            return Err(EstateError::bad_request("Validation failed: incomplete property").into_anyhow());
        };

        let property = Property {
            id: 0,
            name,
            address,
            price,
            availability,
            kind,
        };

        let saved = self.store.insert(property).await?;
        tracing::info!(property_id = saved.id, "property created");
        Ok(saved)
    }

    pub async fn find(&self) -> Result<Vec<Property>> {
        self.store.find_all().await
    }

    pub async fn find_available(&self) -> Result<Vec<Property>> {
        self.store.find_by_availability(Availability::Available).await
    }

    pub async fn get(&self, id: i64) -> Result<Property> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| EstateError::not_found(not_found_message(id)).into_anyhow())
    }

    pub async fn patch(&self, id: i64, data: PatchProperty) -> Result<Property> {
        let current = self.get(id).await?;
        let merged = merge(current, data);
        self.store.save(merged).await
    }

    pub async fn remove(&self, id: i64) -> Result<String> {
        if !self.store.delete(id).await? {
            bail_estate!(not_found, not_found_message(id));
        }
        tracing::info!(property_id = id, "property deleted");
        Ok(format!("Property with ID: {id} was successfully deleted."))
    }
}

/// Sparse patch. Text overwrites only when non-empty and price only when
/// strictly positive, so a price of 0 can never be set through an update.
pub fn merge(mut current: Property, patch: PatchProperty) -> Property {
    if let Some(name) = patch.name.filter(|s| !s.is_empty()) {
        current.name = name;
    }
    if let Some(address) = patch.address.filter(|s| !s.is_empty()) {
        current.address = address;
    }
    if let Some(price) = patch.price.filter(|p| *p > 0.0) {
        current.price = price;
    }
    if let Some(availability) = patch.availability {
        current.availability = availability;
    }
    if let Some(kind) = patch.kind {
        current.kind = kind;
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::properties::properties_shared::PropertyType;

    fn villa() -> Property {
        Property {
            id: 5,
            name: "Villa".to_string(),
            address: "1 Shore Rd".to_string(),
            price: 2500.0,
            availability: Availability::Available,
            kind: PropertyType::House,
        }
    }

    #[test]
    fn price_only_patch_leaves_other_fields() {
        let patch = || PatchProperty {
            price: Some(2700.0),
            ..Default::default()
        };

        let once = merge(villa(), patch());
        let twice = merge(once.clone(), patch());

        assert_eq!(once, Property { price: 2700.0, ..villa() });
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_and_non_positive_values_are_ignored() {
        let patch = PatchProperty {
            name: Some(String::new()),
            address: Some(String::new()),
            price: Some(0.0),
            ..Default::default()
        };
        assert_eq!(merge(villa(), patch), villa());

        let negative = PatchProperty {
            price: Some(-10.0),
            ..Default::default()
        };
        assert_eq!(merge(villa(), negative), villa());
    }

    #[test]
    fn enums_and_text_overwrite_when_present() {
        let patch = PatchProperty {
            name: Some("Villa Rosa".to_string()),
            availability: Some(Availability::Occupied),
            kind: Some(PropertyType::Condominium),
            ..Default::default()
        };

        let merged = merge(villa(), patch);

        assert_eq!(merged.name, "Villa Rosa");
        assert_eq!(merged.address, "1 Shore Rd");
        assert_eq!(merged.availability, Availability::Occupied);
        assert_eq!(merged.kind, PropertyType::Condominium);
        assert_eq!(merged.id, 5);
    }
}
