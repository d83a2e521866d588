//! Client (tenant) API
//!
//! Deleting a client cascades to its branches on the backend.

use crate::{ClientResult, HttpClient};
use shared::models::{Client, ClientCreate, ClientUpdate};

impl HttpClient {
    /// GET /api/admin-portal/clients - list all tenants
    pub async fn list_clients(&self) -> ClientResult<Vec<Client>> {
        self.get("/api/admin-portal/clients").await
    }

    /// GET /api/admin-portal/clients/{id} - single tenant
    pub async fn get_client(&self, id: &str) -> ClientResult<Client> {
        self.get(&format!("/api/admin-portal/clients/{id}")).await
    }

    /// POST /api/admin-portal/clients - create a tenant
    pub async fn create_client(&self, payload: &ClientCreate) -> ClientResult<Client> {
        self.post("/api/admin-portal/clients", payload).await
    }

    /// PUT /api/admin-portal/clients/{id} - update a tenant
    pub async fn update_client(&self, id: &str, payload: &ClientUpdate) -> ClientResult<Client> {
        self.put(&format!("/api/admin-portal/clients/{id}"), payload)
            .await
    }

    /// DELETE /api/admin-portal/clients/{id} - delete a tenant and its branches
    pub async fn delete_client(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/api/admin-portal/clients/{id}")).await
    }
}
