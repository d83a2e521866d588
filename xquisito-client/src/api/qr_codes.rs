//! QR code API
//!
//! Batch creation expects a request already validated by
//! `shared::qr::validate_batch`; the backend re-checks and arbitrates races
//! (e.g. two admins provisioning the same Pick & Go code).

use crate::{ClientResult, HttpClient};
use shared::models::{QrBatchRequest, QrCode, QrCodeUpdate};

impl HttpClient {
    /// GET /api/admin-portal/branches/{id}/qr-codes - codes of a branch
    pub async fn list_qr_codes(&self, branch_id: &str) -> ClientResult<Vec<QrCode>> {
        self.get(&format!("/api/admin-portal/branches/{branch_id}/qr-codes"))
            .await
    }

    /// POST /api/admin-portal/qr-codes/batch - provision a batch of codes
    pub async fn create_qr_batch(&self, request: &QrBatchRequest) -> ClientResult<Vec<QrCode>> {
        self.post("/api/admin-portal/qr-codes/batch", request).await
    }

    /// PUT /api/admin-portal/qr-codes/{id} - update a code
    pub async fn update_qr_code(&self, id: &str, payload: &QrCodeUpdate) -> ClientResult<QrCode> {
        self.put(&format!("/api/admin-portal/qr-codes/{id}"), payload)
            .await
    }

    /// DELETE /api/admin-portal/qr-codes/{id} - delete a code
    pub async fn delete_qr_code(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/api/admin-portal/qr-codes/{id}"))
            .await
    }
}
