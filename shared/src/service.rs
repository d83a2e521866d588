//! Canonical service and filter enumerations
//!
//! The platform historically used both `tap-and-pay` and `tap-pay` for the
//! same service. [`Service`] is the single canonical enumeration; the legacy
//! identifier is accepted on input and never emitted.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Ordering/payment mode offered to a tenant's guests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Service {
    /// Split-the-bill payment at the table
    FlexBill,
    /// Order and pay from a table QR
    TapOrderPay,
    /// In-room ordering for hotel tenants
    RoomService,
    /// Counter pickup (Pick & Go); one QR per branch
    PickNGo,
    /// Payment-only QR at the table
    #[serde(alias = "tap-and-pay")]
    TapPay,
}

impl Service {
    /// All services, in display order
    pub const ALL: [Service; 5] = [
        Service::FlexBill,
        Service::TapOrderPay,
        Service::RoomService,
        Service::PickNGo,
        Service::TapPay,
    ];

    /// Canonical wire identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Service::FlexBill => "flex-bill",
            Service::TapOrderPay => "tap-order-pay",
            Service::RoomService => "room-service",
            Service::PickNGo => "pick-n-go",
            Service::TapPay => "tap-pay",
        }
    }

    /// QR type this service provisions codes for
    pub fn qr_type(&self) -> QrType {
        match self {
            Service::FlexBill | Service::TapOrderPay | Service::TapPay => QrType::Table,
            Service::RoomService => QrType::Room,
            Service::PickNGo => QrType::Pickup,
        }
    }
}

impl FromStr for Service {
    type Err = UnknownIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flex-bill" => Ok(Service::FlexBill),
            "tap-order-pay" => Ok(Service::TapOrderPay),
            "room-service" => Ok(Service::RoomService),
            "pick-n-go" => Ok(Service::PickNGo),
            // Legacy alias still present in older records
            "tap-pay" | "tap-and-pay" => Ok(Service::TapPay),
            other => Err(UnknownIdentifier(other.to_string())),
        }
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resource a QR code is numbered against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QrType {
    Table,
    Room,
    Pickup,
}

impl QrType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QrType::Table => "table",
            QrType::Room => "room",
            QrType::Pickup => "pickup",
        }
    }
}

impl std::fmt::Display for QrType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Guest gender filter for stats queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

/// Guest age bracket filter for stats queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeRange {
    #[serde(rename = "under-18")]
    Under18,
    #[serde(rename = "18-24")]
    From18To24,
    #[serde(rename = "25-34")]
    From25To34,
    #[serde(rename = "35-44")]
    From35To44,
    #[serde(rename = "45-54")]
    From45To54,
    #[serde(rename = "55-plus")]
    From55,
}

impl AgeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeRange::Under18 => "under-18",
            AgeRange::From18To24 => "18-24",
            AgeRange::From25To34 => "25-34",
            AgeRange::From35To44 => "35-44",
            AgeRange::From45To54 => "45-54",
            AgeRange::From55 => "55-plus",
        }
    }
}

/// Error for unrecognized wire identifiers
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown identifier: {0}")]
pub struct UnknownIdentifier(pub String);
