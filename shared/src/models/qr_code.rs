//! QR code model
//!
//! Invariants (validated by [`crate::qr`] before submission and arbitrated
//! by the backend on conflict):
//! - at most one pickup QR per branch
//! - numbered codes never exceed the declared table/room capacity

use crate::service::{QrType, Service};
use serde::{Deserialize, Serialize};

/// Provisioned QR code record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QrCode {
    pub id: String,
    pub client_id: String,
    pub branch_id: String,
    pub service: Service,
    pub qr_type: QrType,
    pub table_number: Option<u32>,
    pub room_number: Option<u32>,
    /// Encoded payload printed on the physical QR
    pub code: String,
    pub is_active: bool,
}

impl QrCode {
    /// Whether this is the branch's pickup (Pick & Go) code
    pub fn is_pickup(&self) -> bool {
        self.service == Service::PickNGo
    }
}

/// Batch creation request sent to the QR provisioning endpoint
///
/// Transient: assembled by [`crate::qr::build_batch`], validated by
/// [`crate::qr::validate_batch`], never stored client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrBatchRequest {
    pub client_id: String,
    pub branch_id: String,
    pub restaurant_id: String,
    pub service: Service,
    pub qr_type: QrType,
    pub start_number: u32,
    pub count: u32,
}

impl QrBatchRequest {
    /// Last index in the requested range
    pub fn end_number(&self) -> i64 {
        self.start_number as i64 + self.count as i64 - 1
    }
}

/// Update QR code payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QrCodeUpdate {
    pub is_active: Option<bool>,
}
