//! Console application core
//!
//! View-facing state for the super-admin console: tenant/branch selection,
//! the QR provisioning form machine, stats filter stores, and the pure
//! helpers behind the analytics screens. Rendering, routing, and identity
//! live outside this crate.

pub mod date_range;
pub mod filters;
pub mod metrics;
pub mod qr_form;
pub mod state;

pub use date_range::DateRangePreset;
pub use filters::{ControlledFilter, FilterAction, FilterStore, UncontrolledFilter};
pub use qr_form::{QrBatchSubmitter, QrForm, QrFormError, QrFormState};
pub use state::AdminState;
