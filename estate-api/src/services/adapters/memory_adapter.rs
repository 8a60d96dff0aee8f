use anyhow::Result;
use async_trait::async_trait;
use estate_core::MemoryStore;

use crate::services::properties::{Availability, Property, PropertyStore};
use crate::services::tenants::{Tenant, TenantStore};

#[async_trait]
impl PropertyStore for MemoryStore<Property> {
    async fn find_by_availability(&self, availability: Availability) -> Result<Vec<Property>> {
        Ok(self.find_where(|p| p.availability == availability).await)
    }
}

#[async_trait]
impl TenantStore for MemoryStore<Tenant> {
    async fn find_by_email(&self, email: &str) -> Result<Option<Tenant>> {
        Ok(self.find_where(|t| t.email == email).await.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use estate_core::EntityStore;

    use super::*;
    use crate::services::properties::PropertyType;

    fn property(name: &str, availability: Availability) -> Property {
        Property {
            id: 0,
            name: name.to_string(),
            address: "Main St".to_string(),
            price: 100.0,
            availability,
            kind: PropertyType::Apartment,
        }
    }

    #[tokio::test]
    async fn availability_filter_excludes_occupied() {
        let store = MemoryStore::<Property>::new();
        store.insert(property("a", Availability::Available)).await.unwrap();
        store.insert(property("b", Availability::Occupied)).await.unwrap();
        store.insert(property("c", Availability::Available)).await.unwrap();

        let available = store.find_by_availability(Availability::Available).await.unwrap();

        let names: Vec<_> = available.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[tokio::test]
    async fn tenant_lookup_by_email() {
        let store = MemoryStore::<Tenant>::new();
        let saved = store
            .insert(Tenant {
                id: 0,
                name: "Ana".to_string(),
                email: "ana@example.com".to_string(),
                contact_number: 1,
                password: "hash".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(store.find_by_email("ana@example.com").await.unwrap(), Some(saved));
        assert_eq!(store.find_by_email("bob@example.com").await.unwrap(), None);
    }
}
