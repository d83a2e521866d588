//! Xquisito Client - HTTP client for the Xquisito backend
//!
//! Authenticated REST calls for the super-admin console: tenant and branch
//! management, QR provisioning, and business analytics.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::ApiResponse;
pub use shared::models::{
    Branch, Client, QrBatchRequest, QrCode, Restaurant, StatsQuery, SuperAdminStats,
};
