//! Reservation Endpoints

use reqwest::Method;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{Reservation, ReservationRequest};

impl ApiClient {
    pub async fn user_reservations(&self, user_id: u32) -> Result<Vec<Reservation>, ApiError> {
        self.send(self.request(Method::GET, &format!("reservations/user/{}", user_id))).await
    }

    /// Reservations the backend still considers active for a user
    pub async fn user_active_reservations(&self, user_id: u32) -> Result<Vec<Reservation>, ApiError> {
        self.send(self.request(Method::GET, &format!("reservations/user/{}/active", user_id))).await
    }

    pub async fn create_reservation(&self, request: &ReservationRequest) -> Result<Reservation, ApiError> {
        self.send(self.request(Method::POST, "reservations").json(request)).await
    }

    pub async fn cancel_reservation(&self, id: u32) -> Result<(), ApiError> {
        self.send_empty(self.request(Method::PATCH, &format!("reservations/{}/cancel", id))).await
    }
}
