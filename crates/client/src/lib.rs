//! Typed wrappers around the backend REST API.
//!
//! Each wrapper performs exactly one request and unwraps the backend's
//! `{ error, status, message, payload }` envelope. No retries.

pub mod client;
pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod resource;

pub use client::{ApiClient, DEFAULT_TIMEOUT};
pub use envelope::Envelope;
pub use error::{ApiError, ApiResult};
pub use resource::Resource;
