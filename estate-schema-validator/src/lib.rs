use estate_core::errors::EstateError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::{Validate, ValidateEmail, ValidationError};

/// A request payload with declarative constraints.
///
/// `FIELDS` lists the payload's fields in declaration order. Violations are
/// reported in that order; fields missing from the list sort last by name.
/// Renamed fields are listed under both their Rust and wire names.
pub trait Payload: DeserializeOwned + Validate {
    const FIELDS: &'static [&'static str];
}

/// Violations collected from one payload, as `(field path, message)`.
#[derive(Debug, Default)]
pub struct SchemaErrors {
    entries: Vec<(String, String)>,
}

impl SchemaErrors {
    pub fn push_field(&mut self, field: &str, msg: impl Into<String>) {
        self.entries.push((field.to_string(), msg.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Messages ordered by `fields`. Order within one field is preserved.
    pub fn ordered_messages(mut self, fields: &[&str]) -> Vec<String> {
        let rank = |field: &str| {
            fields
                .iter()
                .position(|f| *f == field)
                .unwrap_or(fields.len())
        };
        self.entries
            .sort_by(|(a, _), (b, _)| (rank(a), a.as_str()).cmp(&(rank(b), b.as_str())));
        self.entries.into_iter().map(|(_, msg)| msg).collect()
    }

    pub fn into_bad_request_anyhow(self, fields: &[&str]) -> anyhow::Error {
        bad_request(&self.ordered_messages(fields).join(", "))
    }
}

pub fn bad_request(detail: &str) -> anyhow::Error {
    EstateError::bad_request(format!("Validation failed: {detail}")).into_anyhow()
}

/// Rejects strings that are empty or only whitespace.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Email shape check that lets an empty string through, for sparse
/// updates where empty means "leave unchanged".
pub fn email_or_empty(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.validate_email() {
        return Ok(());
    }
    Err(ValidationError::new("email"))
}

fn friendly_message(code: &str) -> Option<&'static str> {
    match code {
        "required" => Some("is required"),
        "blank" => Some("must not be blank"),
        "email" => Some("must be a valid email"),
        "length" => Some("has invalid length"),
        "range" => Some("is out of range"),
        _ => None,
    }
}

/// Flat payloads only: nested struct and list errors are not reported.
fn push_validation_errors(out: &mut SchemaErrors, errs: &validator::ValidationErrors) {
    for (field, field_errors) in errs.field_errors() {
        for e in field_errors {
            let msg = e
                .message
                .as_ref()
                .map(|m| m.to_string())
                .or_else(|| friendly_message(&e.code).map(|m| format!("{field} {m}")))
                .unwrap_or_else(|| format!("{field} {}", e.code));
            out.push_field(&field, msg);
        }
    }
}

/// Deserialize `data` into `T` and run its constraints.
///
/// Shape errors (wrong JSON types, unknown enum values) and constraint
/// violations both surface as a BadRequest `EstateError` whose message is
/// `Validation failed: ` followed by every violation joined with `", "`.
pub fn validate<T>(data: &Value) -> anyhow::Result<T>
where
    T: Payload,
{
    let parsed: T = serde_json::from_value(data.clone()).map_err(|e| bad_request(&e.to_string()))?;

    parsed.validate().map_err(|e| {
        let mut out = SchemaErrors::default();
        push_validation_errors(&mut out, &e);
        out.into_bad_request_anyhow(T::FIELDS)
    })?;

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use estate_core::errors::{ErrorKind, EstateError};
    use serde::Deserialize;
    use serde_json::json;
    use validator::Validate;

    use super::{email_or_empty, not_blank, validate, Payload};

    #[derive(Debug, Deserialize, Validate)]
    struct Listing {
        #[validate(
            required(message = "Title is required"),
            custom(function = "not_blank", message = "Title is required"),
            length(max = 10, message = "Title cannot exceed 10 characters")
        )]
        title: Option<String>,

        #[validate(required(message = "Email cannot be null"), email(message = "Invalid email format"))]
        email: Option<String>,

        #[validate(range(min = 1, message = "Rooms must be positive"))]
        rooms: Option<i64>,
    }

    impl Payload for Listing {
        const FIELDS: &'static [&'static str] = &["title", "email", "rooms"];
    }

    fn message_of(err: &anyhow::Error) -> String {
        let estate = EstateError::from_anyhow(err).expect("must be EstateError");
        assert_eq!(estate.kind, ErrorKind::BadRequest);
        estate.message.clone()
    }

    #[test]
    fn all_violations_are_joined_in_field_order() {
        let data = json!({ "email": "not-an-email", "rooms": 0 });

        let err = validate::<Listing>(&data).unwrap_err();

        assert_eq!(
            message_of(&err),
            "Validation failed: Title is required, Invalid email format, Rooms must be positive"
        );
    }

    #[test]
    fn blank_text_is_rejected() {
        let data = json!({ "title": "   ", "email": "a@example.com" });

        let err = validate::<Listing>(&data).unwrap_err();

        assert_eq!(message_of(&err), "Validation failed: Title is required");
    }

    #[test]
    fn shape_errors_are_bad_requests() {
        let data = json!({ "title": 42, "email": "a@example.com" });

        let err = validate::<Listing>(&data).unwrap_err();

        assert!(message_of(&err).starts_with("Validation failed: "));
    }

    #[test]
    fn valid_payload_is_returned() {
        let data = json!({ "title": "Loft", "email": "a@example.com", "rooms": 2 });

        let listing = validate::<Listing>(&data).unwrap();

        assert_eq!(listing.title.as_deref(), Some("Loft"));
        assert_eq!(listing.rooms, Some(2));
        assert!(not_blank("x").is_ok());
    }

    #[test]
    fn empty_email_passes_the_sparse_rule() {
        assert!(email_or_empty("").is_ok());
        assert!(email_or_empty("a@example.com").is_ok());
        assert_eq!(email_or_empty("nope").unwrap_err().code, "email");
    }
}
