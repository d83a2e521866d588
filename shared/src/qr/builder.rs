//! Batch request assembly
//!
//! Packaging only; policy checks live in [`super::validate_batch`].

use crate::models::QrBatchRequest;
use crate::service::Service;

/// Form selection the console builds a batch request from
///
/// `qr_type` may carry a stale value from an earlier service choice; the
/// builder always rederives it from the service mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSelection {
    pub client_id: String,
    pub branch_id: String,
    pub restaurant_id: String,
    pub service: Service,
    pub qr_type: Option<crate::service::QrType>,
    pub start_number: u32,
    pub count: u32,
}

/// Assemble a submittable batch request from a form selection
///
/// Pure and idempotent. Pick & Go is a singleton code, so its range is
/// pinned to `start_number = 1, count = 1` regardless of the form values.
pub fn build_batch(selection: &BatchSelection) -> QrBatchRequest {
    let (start_number, count) = if selection.service == Service::PickNGo {
        (1, 1)
    } else {
        (selection.start_number, selection.count)
    };

    QrBatchRequest {
        client_id: selection.client_id.clone(),
        branch_id: selection.branch_id.clone(),
        restaurant_id: selection.restaurant_id.clone(),
        service: selection.service,
        qr_type: selection.service.qr_type(),
        start_number,
        count,
    }
}
