//! Data models
//!
//! Shared between the HTTP client and the console core. Record types mirror
//! the backend's JSON; all IDs are backend-assigned strings.

pub mod analytics;
pub mod branch;
pub mod client;
pub mod qr_code;

// Re-exports
pub use analytics::*;
pub use branch::*;
pub use client::*;
pub use qr_code::*;
