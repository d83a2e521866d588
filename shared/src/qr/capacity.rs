//! Capacity resolution for QR numbering

use super::QrBatchError;
use crate::models::{Branch, Client};
use crate::service::QrType;

/// Resolve the maximum valid index for a QR series
///
/// - `Table` → the branch's table count
/// - `Room` → the client's declared room count (0 when undeclared)
/// - `Pickup` → `None`; pickup codes are unnumbered and the batch size is
///   forced to 1 elsewhere
///
/// Errors only when the record needed for the resource type is absent.
pub fn resolve_capacity(
    qr_type: QrType,
    branch: Option<&Branch>,
    client: Option<&Client>,
) -> Result<Option<u32>, QrBatchError> {
    match qr_type {
        QrType::Table => branch
            .map(|b| Some(b.tables))
            .ok_or(QrBatchError::MissingSelection),
        QrType::Room => client
            .map(|c| Some(c.room_count.unwrap_or(0)))
            .ok_or(QrBatchError::MissingClient),
        QrType::Pickup => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qr::validator::tests::{branch, client};

    #[test]
    fn test_table_capacity_comes_from_branch() {
        let b = branch("b1", 14);
        let cap = resolve_capacity(QrType::Table, Some(&b), None).unwrap();
        assert_eq!(cap, Some(14));
    }

    #[test]
    fn test_room_capacity_defaults_to_zero() {
        let mut c = client(Some(8));
        assert_eq!(
            resolve_capacity(QrType::Room, None, Some(&c)).unwrap(),
            Some(8)
        );
        c.room_count = None;
        assert_eq!(
            resolve_capacity(QrType::Room, None, Some(&c)).unwrap(),
            Some(0)
        );
    }

    #[test]
    fn test_pickup_is_unconstrained() {
        assert_eq!(resolve_capacity(QrType::Pickup, None, None).unwrap(), None);
    }

    #[test]
    fn test_missing_records_fail() {
        assert_eq!(
            resolve_capacity(QrType::Table, None, None),
            Err(QrBatchError::MissingSelection)
        );
        assert_eq!(
            resolve_capacity(QrType::Room, None, None),
            Err(QrBatchError::MissingClient)
        );
    }
}
