//! Batch admission control
//!
//! Checks run in a fixed order and the first failure wins; the console
//! surfaces exactly one reason at a time.

use super::{MAX_BATCH_COUNT, QrBatchError, resolve_capacity};
use crate::models::{Branch, Client, QrBatchRequest, QrCode};
use crate::service::{QrType, Service};

/// Validate a batch request against capacity and uniqueness constraints
///
/// Check order:
/// 1. a branch must be selected and resolved to a restaurant id;
/// 2. Pick & Go: refuse if the branch already has a pickup code, otherwise
///    accept immediately (range checks do not apply to the singleton code);
/// 3. the requested range must fit the table/room capacity;
/// 4. `count` must be in `[1, 500]` and `start_number` at least 1.
///
/// `existing` is the branch's current QR list as last fetched; it may be
/// stale, and the backend arbitrates races on the pickup singleton.
pub fn validate_batch(
    request: &QrBatchRequest,
    existing: &[QrCode],
    branch: Option<&Branch>,
    client: Option<&Client>,
) -> Result<(), QrBatchError> {
    let branch = branch.ok_or(QrBatchError::MissingSelection)?;
    if branch.restaurant_id.is_none() {
        return Err(QrBatchError::MissingSelection);
    }

    // Singleton pickup code: uniqueness is the only constraint
    if request.service == Service::PickNGo {
        let taken = existing
            .iter()
            .any(|qr| qr.branch_id == request.branch_id && qr.is_pickup());
        return if taken {
            Err(QrBatchError::DuplicatePickup)
        } else {
            Ok(())
        };
    }

    let end = request.end_number();
    if let Some(capacity) = resolve_capacity(request.qr_type, Some(branch), client)? {
        if end > capacity as i64 {
            return Err(match request.qr_type {
                QrType::Table => QrBatchError::ExceedsTableCapacity {
                    end,
                    tables: capacity,
                },
                // resolve_capacity returns Some only for table and room
                _ => QrBatchError::ExceedsRoomCapacity {
                    end,
                    rooms: capacity,
                },
            });
        }
    }

    if request.count < 1 || request.count > MAX_BATCH_COUNT {
        return Err(QrBatchError::CountOutOfBounds {
            count: request.count,
        });
    }
    if request.start_number < 1 {
        return Err(QrBatchError::StartTooSmall {
            start: request.start_number,
        });
    }

    Ok(())
}
