//! Time Slot Endpoints

use reqwest::Method;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{TimeSlot, TimeSlotRequest};

impl ApiClient {
    pub async fn list_time_slots(&self) -> Result<Vec<TimeSlot>, ApiError> {
        self.send(self.request(Method::GET, "timeslots")).await
    }

    pub async fn create_time_slot(&self, request: &TimeSlotRequest) -> Result<TimeSlot, ApiError> {
        self.send(self.request(Method::POST, "timeslots").json(request)).await
    }

    pub async fn update_time_slot(&self, id: u32, request: &TimeSlotRequest) -> Result<TimeSlot, ApiError> {
        self.send(self.request(Method::PUT, &format!("timeslots/{}", id)).json(request)).await
    }

    pub async fn delete_time_slot(&self, id: u32) -> Result<(), ApiError> {
        self.send_empty(self.request(Method::DELETE, &format!("timeslots/{}", id))).await
    }
}
