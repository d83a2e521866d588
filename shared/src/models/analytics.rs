//! Analytics DTOs
//!
//! Response payloads for the dashboard and super-admin stats endpoints,
//! plus the filter set applied to `/api/super-admin/stats`.

use crate::service::{AgeRange, Gender, Service};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Restaurant as listed by `/api/analytics/restaurants`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub is_active: bool,
}

/// Restaurant detail from `/api/admin-portal/restaurant/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantInfo {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    pub timezone: Option<String>,
    pub is_active: bool,
}

/// One day of aggregated activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub volume: Decimal,
    pub orders: u64,
}

/// Volume/transaction split for one payment method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodSplit {
    pub method: String,
    pub volume: Decimal,
    pub transactions: u64,
}

/// Order count for one service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCount {
    pub service: Service,
    pub orders: u64,
}

/// Full dashboard payload from `/api/analytics/dashboard/complete`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardComplete {
    pub total_volume: Decimal,
    pub total_orders: u64,
    pub total_transactions: u64,
    pub average_ticket: Decimal,
    #[serde(default)]
    pub payment_methods: Vec<PaymentMethodSplit>,
    #[serde(default)]
    pub daily: Vec<DailyPoint>,
}

/// Orders breakdown from `/api/analytics/dashboard/orders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdersBreakdown {
    pub total: u64,
    #[serde(default)]
    pub by_service: Vec<ServiceCount>,
}

/// Per-restaurant rollup from `/api/analytics/dashboard/summary/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantSummary {
    pub restaurant_id: String,
    pub volume: Decimal,
    pub orders: u64,
    pub transactions: u64,
}

/// Best seller from `/api/analytics/dashboard/top-selling-item`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopSellingItem {
    pub name: String,
    pub quantity: u64,
    pub volume: Decimal,
}

/// Aggregate business stats from `/api/super-admin/stats`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuperAdminStats {
    pub total_volume: Decimal,
    pub total_orders: u64,
    pub total_transactions: u64,
    #[serde(default)]
    pub payment_methods: Vec<PaymentMethodSplit>,
    #[serde(default)]
    pub series: Vec<DailyPoint>,
}

/// Filter set for the super-admin stats endpoint
///
/// Every field is optional; unset filters are omitted from the query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub restaurant_id: Option<String>,
    pub service: Option<Service>,
    pub gender: Option<Gender>,
    pub age_range: Option<AgeRange>,
}

impl StatsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn restaurant(mut self, id: impl Into<String>) -> Self {
        self.restaurant_id = Some(id.into());
        self
    }

    pub fn service(mut self, service: Service) -> Self {
        self.service = Some(service);
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn age_range(mut self, age_range: AgeRange) -> Self {
        self.age_range = Some(age_range);
        self
    }

    /// Query-string pairs, with unset filters omitted
    ///
    /// Parameter names match the backend exactly: `start_date`, `end_date`,
    /// `restaurant_id`, `service`, `gender`, `age_range`.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(start) = self.start_date {
            pairs.push(("start_date", start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end_date {
            pairs.push(("end_date", end.format("%Y-%m-%d").to_string()));
        }
        if let Some(id) = &self.restaurant_id {
            pairs.push(("restaurant_id", id.clone()));
        }
        if let Some(service) = self.service {
            pairs.push(("service", service.as_str().to_string()));
        }
        if let Some(gender) = self.gender {
            pairs.push(("gender", gender.as_str().to_string()));
        }
        if let Some(age_range) = self.age_range {
            pairs.push(("age_range", age_range.as_str().to_string()));
        }
        pairs
    }
}
