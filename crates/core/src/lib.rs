//! `backoffice-core`: shared building blocks for the backoffice console.
//!
//! This crate contains identifiers, the record abstraction used by the list
//! stores, and the entity shapes exchanged with the backend. No IO.

pub mod error;
pub mod id;
pub mod models;
pub mod record;

pub use error::{CoreError, CoreResult};
pub use id::RecordId;
pub use record::Record;
