use estate_schema_validator::{email_or_empty, Payload};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTenant {
    #[validate(
        required(message = "Name cannot be null"),
        length(min = 3, max = 100, message = "Name should be between 3 and 100 characters")
    )]
    pub name: Option<String>,

    #[validate(required(message = "Email cannot be null"), email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(
        required(message = "Contact number cannot be null"),
        range(min = 1, message = "Contact number must be positive")
    )]
    pub contact_number: Option<i64>,

    #[validate(required(message = "Password cannot be null"))]
    pub password: Option<String>,
}

impl Payload for CreateTenant {
    const FIELDS: &'static [&'static str] = &["name", "email", "contact_number", "contactNumber", "password"];
}

/// Profile edit. Absent fields keep their stored value.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[validate(length(min = 3, max = 100, message = "Name should be between 3 and 100 characters"))]
    pub name: Option<String>,

    #[validate(custom(function = "email_or_empty", message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(range(min = 1, message = "Contact number must be positive"))]
    pub contact_number: Option<i64>,
}

impl Payload for ProfileUpdate {
    const FIELDS: &'static [&'static str] = &["name", "email", "contact_number", "contactNumber"];
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PasswordUpdate {
    #[validate(required(message = "Old password cannot be null"))]
    pub old_password: Option<String>,

    #[validate(
        required(message = "New password cannot be null"),
        length(min = 6, message = "New password should be at least 6 characters long")
    )]
    pub new_password: Option<String>,
}

impl Payload for PasswordUpdate {
    const FIELDS: &'static [&'static str] = &["old_password", "oldPassword", "new_password", "newPassword"];
}
