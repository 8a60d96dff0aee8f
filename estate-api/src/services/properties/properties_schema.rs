use estate_schema_validator::{not_blank, Payload};
use serde::Deserialize;
use validator::Validate;

use super::properties_shared::{Availability, PropertyType};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateProperty {
    #[validate(
        required(message = "Name is required"),
        custom(function = "not_blank", message = "Name is required"),
        length(max = 255, message = "Name cannot exceed 255 characters")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "Address is required"),
        custom(function = "not_blank", message = "Address is required"),
        length(max = 255, message = "Address cannot exceed 255 characters")
    )]
    pub address: Option<String>,

    #[validate(
        required(message = "Price is required"),
        range(min = 0.01, message = "Price must be greater than 0")
    )]
    pub price: Option<f64>,

    #[validate(required(message = "Availability is required"))]
    pub availability: Option<Availability>,

    #[serde(rename = "type")]
    #[validate(required(message = "Type is required"))]
    pub kind: Option<PropertyType>,
}

impl Payload for CreateProperty {
    const FIELDS: &'static [&'static str] = &["name", "address", "price", "availability", "kind", "type"];
}

/// Sparse update: every field is optional. Empty text and non-positive
/// prices are accepted here and ignored by the merge.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PatchProperty {
    #[validate(length(max = 255, message = "Name cannot exceed 255 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 255, message = "Address cannot exceed 255 characters"))]
    pub address: Option<String>,

    pub price: Option<f64>,

    pub availability: Option<Availability>,

    #[serde(rename = "type")]
    pub kind: Option<PropertyType>,
}

impl Payload for PatchProperty {
    const FIELDS: &'static [&'static str] = &["name", "address"];
}
