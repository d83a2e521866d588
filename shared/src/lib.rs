//! Shared types for the Xquisito admin console
//!
//! Common types used across the client and console crates: the canonical
//! service enumeration, data models, analytics DTOs, the API response
//! envelope, and the QR batch provisioning core.

pub mod models;
pub mod qr;
pub mod response;
pub mod service;
pub mod types;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use qr::{BatchSelection, QrBatchError, build_batch, resolve_capacity, validate_batch};
pub use response::ApiResponse;
pub use service::{AgeRange, Gender, QrType, Service};
