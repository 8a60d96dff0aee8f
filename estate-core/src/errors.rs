//! # Errors
//!
//! A small structured error taxonomy for the rental backend.
//! Core goals:
//! - one status code per kind
//! - can be carried through anyhow::Error (services return `anyhow::Result`)
//! - transport-agnostic (the HTTP crate decides how to write the response)
//!
//! Every error, and every delete confirmation, is rendered with the same
//! [`StatusPayload`] shape: `{ status, message, timestamp }`.

use std::fmt;

use anyhow::Error as AnyError;
use serde::Serialize;

/// A convenience result type for estate core APIs.
pub type EstateResult<T> = std::result::Result<T, AnyError>;

/// Error kinds understood by the HTTP boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    BadRequest,       // 400
    NotAuthenticated, // 401
    NotFound,         // 404
    GeneralError,     // 500
}

impl ErrorKind {
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::NotAuthenticated => 401,
            ErrorKind::NotFound => 404,
            ErrorKind::GeneralError => 500,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "BadRequest",
            ErrorKind::NotAuthenticated => "NotAuthenticated",
            ErrorKind::NotFound => "NotFound",
            ErrorKind::GeneralError => "GeneralError",
        }
    }
}

/// A structured error that can live inside `anyhow::Error`.
#[derive(Debug)]
pub struct EstateError {
    pub kind: ErrorKind,
    pub message: String,
    pub source: Option<AnyError>,
}

impl EstateError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: AnyError) -> Self {
        self.source = Some(source);
        self
    }

    pub fn code(&self) -> u16 {
        self.kind.status_code()
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Convert into `anyhow::Error` so it flows through `?`.
    pub fn into_anyhow(self) -> AnyError {
        AnyError::new(self)
    }

    /// Downcast an `anyhow::Error` to an `EstateError` if possible.
    pub fn from_anyhow(err: &AnyError) -> Option<&EstateError> {
        err.downcast_ref::<EstateError>()
    }

    /// Turn any error into an EstateError:
    /// - if it's already an EstateError, keep it
    /// - otherwise wrap as GeneralError, keeping the cause text
    pub fn normalize(err: AnyError) -> EstateError {
        match err.downcast::<EstateError>() {
            Ok(estate) => estate,
            Err(other) => EstateError::general_error(format!("Internal Server Error: {other}"))
                .with_source(other),
        }
    }

    /// Copy without the inner `source`, suitable for returning to clients.
    pub fn sanitize_for_client(&self) -> EstateError {
        EstateError {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }

    pub fn to_payload(&self) -> StatusPayload {
        StatusPayload::new(self.code(), self.message.clone())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, msg)
    }
    pub fn not_authenticated(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotAuthenticated, msg)
    }
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, msg)
    }
    pub fn general_error(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::GeneralError, msg)
    }
}

impl fmt::Display for EstateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name(), self.code(), self.message)
    }
}

impl std::error::Error for EstateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| &**e as &(dyn std::error::Error + 'static))
    }
}

/// The canonical `{ status, message, timestamp }` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusPayload {
    pub status: u16,
    pub message: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl StatusPayload {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Convenience helper for "bail with EstateError".
#[macro_export]
macro_rules! bail_estate {
    ($ctor:ident, $msg:expr) => {
        return Err($crate::errors::EstateError::$ctor($msg).into_anyhow());
    };
    ($ctor:ident, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::errors::EstateError::$ctor(format!($fmt, $($arg)*)).into_anyhow());
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing(id: i64) -> anyhow::Result<()> {
        bail_estate!(not_found, "Property not found with ID: {}", id);
    }

    #[test]
    fn kinds_map_to_status_codes() {
        assert_eq!(EstateError::bad_request("x").code(), 400);
        assert_eq!(EstateError::not_authenticated("x").code(), 401);
        assert_eq!(EstateError::not_found("x").code(), 404);
        assert_eq!(EstateError::general_error("x").code(), 500);
    }

    #[test]
    fn normalize_keeps_typed_errors() {
        let err = missing(7).unwrap_err();
        let estate = EstateError::normalize(err);
        assert_eq!(estate.kind, ErrorKind::NotFound);
        assert_eq!(estate.message, "Property not found with ID: 7");
    }

    #[test]
    fn normalize_wraps_foreign_errors_as_general() {
        let estate = EstateError::normalize(anyhow::anyhow!("connection reset"));
        assert_eq!(estate.kind, ErrorKind::GeneralError);
        assert_eq!(estate.message, "Internal Server Error: connection reset");
        assert!(estate.source.is_some());
        assert!(estate.sanitize_for_client().source.is_none());
    }

    #[test]
    fn payload_carries_status_and_timestamp() {
        let payload = EstateError::not_authenticated("Old password is incorrect").to_payload();
        assert_eq!(payload.status, 401);
        assert_eq!(payload.message, "Old password is incorrect");
        assert!(payload.timestamp > 0);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["status"], 401);
        assert!(json["timestamp"].is_i64());
    }
}
