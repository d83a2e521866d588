//! Analytics API

use crate::{ClientResult, HttpClient};
use shared::models::{
    DashboardComplete, OrdersBreakdown, RestaurantSummary, StatsQuery, SuperAdminStats,
    TopSellingItem,
};

impl HttpClient {
    /// GET /api/analytics/dashboard/complete - full dashboard payload
    pub async fn dashboard_complete(&self) -> ClientResult<DashboardComplete> {
        self.get("/api/analytics/dashboard/complete").await
    }

    /// GET /api/analytics/dashboard/orders - order counts by service
    pub async fn dashboard_orders(&self) -> ClientResult<OrdersBreakdown> {
        self.get("/api/analytics/dashboard/orders").await
    }

    /// GET /api/analytics/dashboard/summary/{id} - per-restaurant rollup
    pub async fn dashboard_summary(&self, restaurant_id: &str) -> ClientResult<RestaurantSummary> {
        self.get(&format!("/api/analytics/dashboard/summary/{restaurant_id}"))
            .await
    }

    /// GET /api/analytics/dashboard/top-selling-item - best seller
    pub async fn top_selling_item(&self) -> ClientResult<TopSellingItem> {
        self.get("/api/analytics/dashboard/top-selling-item").await
    }

    /// GET /api/super-admin/stats - aggregate stats with optional filters
    pub async fn super_admin_stats(&self, query: &StatsQuery) -> ClientResult<SuperAdminStats> {
        self.get_with_query("/api/super-admin/stats", &query.to_query_pairs())
            .await
    }
}
