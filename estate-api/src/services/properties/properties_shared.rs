use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use async_trait::async_trait;
use estate_core::{Entity, EntityStore};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Availability {
    Available,
    Occupied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    House,
    Condominium,
    Apartment,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Available => "AVAILABLE",
            Availability::Occupied => "OCCUPIED",
        }
    }
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::House => "HOUSE",
            PropertyType::Condominium => "CONDOMINIUM",
            PropertyType::Apartment => "APARTMENT",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Availability {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "AVAILABLE" => Ok(Availability::Available),
            "OCCUPIED" => Ok(Availability::Occupied),
            other => Err(anyhow::anyhow!("unknown availability: {other}")),
        }
    }
}

impl FromStr for PropertyType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "HOUSE" => Ok(PropertyType::House),
            "CONDOMINIUM" => Ok(PropertyType::Condominium),
            "APARTMENT" => Ok(PropertyType::Apartment),
            other => Err(anyhow::anyhow!("unknown property type: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub price: f64,
    pub availability: Availability,
    #[serde(rename = "type")]
    pub kind: PropertyType,
}

impl Entity for Property {
    fn id(&self) -> i64 {
        self.id
    }

    fn with_id(self, id: i64) -> Self {
        Self { id, ..self }
    }
}

/// Property gateway: generic CRUD plus the availability lookup.
#[async_trait]
pub trait PropertyStore: EntityStore<Property> {
    async fn find_by_availability(&self, availability: Availability) -> Result<Vec<Property>>;
}

pub fn not_found_message(id: i64) -> String {
    format!("Property not found with ID: {id}")
}
