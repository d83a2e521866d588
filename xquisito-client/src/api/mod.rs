//! Typed API surfaces
//!
//! One module per backend resource, each extending [`crate::HttpClient`]
//! with the calls the console consumes.

mod analytics;
mod branches;
mod clients;
mod qr_codes;
mod restaurants;
