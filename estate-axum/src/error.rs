use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use estate_core::errors::EstateError;

/// Boundary error for every handler. Anything reaching the client goes
/// through `into_response`, so callers always get the canonical payload.
#[derive(Debug)]
pub struct EstateAxumError(pub anyhow::Error);

impl From<anyhow::Error> for EstateAxumError {
    fn from(e: anyhow::Error) -> Self {
        Self(e)
    }
}

impl From<EstateError> for EstateAxumError {
    fn from(e: EstateError) -> Self {
        Self(e.into_anyhow())
    }
}

impl IntoResponse for EstateAxumError {
    fn into_response(self) -> Response {
        // Typed errors may sit under anyhow contexts; look through the chain first.
        let typed = self
            .0
            .chain()
            .find_map(|e| e.downcast_ref::<EstateError>())
            .map(EstateError::sanitize_for_client);
        let estate = match typed {
            Some(estate) => estate,
            None => EstateError::normalize(self.0),
        };

        let status = StatusCode::from_u16(estate.code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!(error = %estate, source = ?estate.source, "request failed");
        }

        (status, Json(estate.sanitize_for_client().to_payload())).into_response()
    }
}
