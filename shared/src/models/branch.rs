//! Branch model
//!
//! A physical location belonging to a client. Every branch references an
//! existing client and, once provisioned, a restaurant record on the
//! analytics side.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Branch record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub id: String,
    pub client_id: String,
    /// Analytics restaurant id; absent until the branch is provisioned
    pub restaurant_id: Option<String>,
    pub name: String,
    pub address: String,
    /// Number of tables at this location
    pub tables: u32,
    pub is_active: bool,
    /// Room numbering range for hotel branches
    pub room_range: Option<RoomRange>,
}

/// Inclusive room numbering range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRange {
    pub start: u32,
    pub end: u32,
}

/// Create branch payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BranchCreate {
    #[validate(length(min = 1))]
    pub client_id: String,
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(length(min = 1, max = 240))]
    pub address: String,
    pub tables: u32,
    pub room_range: Option<RoomRange>,
}

/// Update branch payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct BranchUpdate {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 240))]
    pub address: Option<String>,
    pub tables: Option<u32>,
    pub is_active: Option<bool>,
    pub room_range: Option<RoomRange>,
}
