//! Equipment Endpoints

use reqwest::Method;

use super::ApiClient;
use crate::availability::AvailabilityQuery;
use crate::error::ApiError;
use crate::models::Equipment;

impl ApiClient {
    pub async fn list_equipment(&self) -> Result<Vec<Equipment>, ApiError> {
        self.send(self.request(Method::GET, "equipment")).await
    }

    /// Equipment the backend reports free for a date and time slot
    pub async fn available_equipment(&self, query: &AvailabilityQuery) -> Result<Vec<Equipment>, ApiError> {
        let builder = self
            .request(Method::GET, "equipment/available")
            .query(&query.params());
        self.send(builder).await
    }
}
