//! Client (tenant) model
//!
//! A client is a restaurant or hotel business onboarded onto the platform.
//! Deleting a client cascades to its branches (backend-enforced).

use crate::service::Service;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Tenant record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub owner_name: String,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub is_active: bool,
    /// Services enabled for this tenant
    #[serde(default)]
    pub services: Vec<Service>,
    pub table_count: u32,
    /// Declared room capacity; only meaningful for hotel tenants
    pub room_count: Option<u32>,
}

/// Create client payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ClientCreate {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(length(min = 1, max = 120))]
    pub owner_name: String,
    #[validate(email)]
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub services: Vec<Service>,
    pub table_count: u32,
    pub room_count: Option<u32>,
}

/// Update client payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ClientUpdate {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 120))]
    pub owner_name: Option<String>,
    #[validate(email)]
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub services: Option<Vec<Service>>,
    pub table_count: Option<u32>,
    pub room_count: Option<u32>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_payload_validation() {
        let payload = ClientCreate {
            name: "".to_string(),
            owner_name: "Ana".to_string(),
            contact_email: Some("not-an-email".to_string()),
            contact_phone: None,
            services: vec![Service::FlexBill],
            table_count: 12,
            room_count: None,
        };
        assert!(payload.validate().is_err());

        let payload = ClientCreate {
            name: "La Terraza".to_string(),
            contact_email: Some("owner@laterraza.mx".to_string()),
            ..payload
        };
        assert!(payload.validate().is_ok());
    }
}
