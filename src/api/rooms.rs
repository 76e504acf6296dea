//! Room Endpoints

use reqwest::Method;

use super::ApiClient;
use crate::availability::{AvailabilityBackend, AvailabilityQuery};
use crate::error::ApiError;
use crate::models::{Equipment, Room};

impl ApiClient {
    pub async fn list_rooms(&self) -> Result<Vec<Room>, ApiError> {
        self.send(self.request(Method::GET, "rooms")).await
    }

    /// Rooms the backend reports free for a date and time slot
    pub async fn available_rooms(&self, query: &AvailabilityQuery) -> Result<Vec<Room>, ApiError> {
        let builder = self
            .request(Method::GET, "rooms/available")
            .query(&query.params());
        self.send(builder).await
    }
}

impl AvailabilityBackend for ApiClient {
    async fn available_rooms(&self, query: &AvailabilityQuery) -> Result<Vec<Room>, ApiError> {
        ApiClient::available_rooms(self, query).await
    }

    async fn available_equipment(&self, query: &AvailabilityQuery) -> Result<Vec<Equipment>, ApiError> {
        ApiClient::available_equipment(self, query).await
    }
}
