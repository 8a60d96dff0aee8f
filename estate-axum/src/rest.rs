use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use estate_core::errors::{EstateError, StatusPayload};
use serde::Serialize;

use crate::EstateAxumError;

/// Body extractor rejection → 400 with the canonical payload.
pub fn map_json_rejection(rejection: JsonRejection) -> EstateAxumError {
    EstateError::bad_request(format!("Validation failed: {}", rejection.body_text())).into()
}

/// Path extractor rejection (e.g. a non-numeric id) → 400.
pub fn map_path_rejection(rejection: PathRejection) -> EstateAxumError {
    EstateError::bad_request(rejection.body_text()).into()
}

/// `201 Created` with the stored entity as body.
pub struct Created<T>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

/// A collection response: `200` with the items, or `204` with no body
/// when there are none.
pub enum Listing<T> {
    Items(Vec<T>),
    Empty,
}

impl<T> From<Vec<T>> for Listing<T> {
    fn from(items: Vec<T>) -> Self {
        if items.is_empty() {
            Listing::Empty
        } else {
            Listing::Items(items)
        }
    }
}

impl<T: Serialize> IntoResponse for Listing<T> {
    fn into_response(self) -> Response {
        match self {
            Listing::Items(items) => (StatusCode::OK, Json(items)).into_response(),
            Listing::Empty => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `200` with a `{ status, message, timestamp }` confirmation.
pub struct Confirmation(pub String);

impl IntoResponse for Confirmation {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(StatusPayload::new(StatusCode::OK.as_u16(), self.0))).into_response()
    }
}
