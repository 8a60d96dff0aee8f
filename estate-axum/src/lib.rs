//! estate-axum: Axum adapter for the rental backend.
//!
//! Builds the HTTP app, translates service errors into the canonical
//! `{ status, message, timestamp }` payload and provides the response
//! helpers shared by every resource router.

pub mod app;
pub mod rest;
mod error;
pub use error::EstateAxumError;

pub use app::{axum, AxumApp};
pub use rest::{Confirmation, Created, Listing};
