//! Restaurant API

use crate::{ClientResult, HttpClient};
use shared::models::{Restaurant, RestaurantInfo};

impl HttpClient {
    /// GET /api/analytics/restaurants - list restaurants known to analytics
    pub async fn list_restaurants(&self) -> ClientResult<Vec<Restaurant>> {
        self.get("/api/analytics/restaurants").await
    }

    /// GET /api/admin-portal/restaurant/{id} - restaurant detail
    pub async fn get_restaurant(&self, id: &str) -> ClientResult<RestaurantInfo> {
        self.get(&format!("/api/admin-portal/restaurant/{id}")).await
    }
}
