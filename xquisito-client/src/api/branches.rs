//! Branch API

use crate::{ClientResult, HttpClient};
use shared::models::{Branch, BranchCreate, BranchUpdate};

impl HttpClient {
    /// GET /api/admin-portal/clients/{id}/branches - branches of a tenant
    pub async fn list_branches(&self, client_id: &str) -> ClientResult<Vec<Branch>> {
        self.get(&format!("/api/admin-portal/clients/{client_id}/branches"))
            .await
    }

    /// POST /api/admin-portal/branches - create a branch
    pub async fn create_branch(&self, payload: &BranchCreate) -> ClientResult<Branch> {
        self.post("/api/admin-portal/branches", payload).await
    }

    /// PUT /api/admin-portal/branches/{id} - update a branch
    pub async fn update_branch(&self, id: &str, payload: &BranchUpdate) -> ClientResult<Branch> {
        self.put(&format!("/api/admin-portal/branches/{id}"), payload)
            .await
    }

    /// DELETE /api/admin-portal/branches/{id} - delete a branch
    pub async fn delete_branch(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/api/admin-portal/branches/{id}"))
            .await
    }
}
