//! QR batch provisioning core
//!
//! Admission control for QR code batches: resolve the capacity bound for a
//! requested range, validate the request against it fail-fast, and package
//! a submittable batch descriptor. All functions are pure; the backend
//! remains the authority on conflicts.

mod builder;
mod capacity;
mod validator;

pub use builder::{BatchSelection, build_batch};
pub use capacity::resolve_capacity;
pub use validator::validate_batch;

use thiserror::Error;

/// Largest batch accepted in a single generation request
pub const MAX_BATCH_COUNT: u32 = 500;

/// Why a batch request was refused
///
/// Exactly one reason is reported per attempt (first failing check wins);
/// the `Display` text is what the console surfaces inline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QrBatchError {
    /// No branch selected, or the branch has no analytics restaurant id yet
    #[error("select a branch with a provisioned restaurant first")]
    MissingSelection,

    /// Room capacity requested without a client record to read it from
    #[error("client record is required to resolve room capacity")]
    MissingClient,

    /// The branch already holds its single Pick & Go code
    #[error("this branch already has a Pick & Go QR code")]
    DuplicatePickup,

    /// Requested range runs past the branch's table count
    #[error("range ends at {end} but the branch has {tables} tables")]
    ExceedsTableCapacity { end: i64, tables: u32 },

    /// Requested range runs past the client's room count
    #[error("range ends at {end} but the client has {rooms} rooms")]
    ExceedsRoomCapacity { end: i64, rooms: u32 },

    /// Count outside the accepted batch size
    #[error("count must be between 1 and {MAX_BATCH_COUNT}, got {count}")]
    CountOutOfBounds { count: u32 },

    /// Start index below 1
    #[error("start number must be at least 1, got {start}")]
    StartTooSmall { start: u32 },
}
