//! Admin Endpoints
//!
//! Everything under `/admin`. The backend enforces the ADMIN role; the client
//! only hides the pages.

use reqwest::Method;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{
    CreateAdminRequest, DashboardStats, Equipment, EquipmentRequest, EquipmentStatus, RegisterRequest,
    Reservation, Role, Room, RoomRequest, RoomStatus, SqlQueryRequest, SqlQueryResult, UpdateUserRequest,
    User,
};

impl ApiClient {
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.send(self.request(Method::GET, "admin/dashboard")).await
    }

    // ========================
    // Users
    // ========================

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.send(self.request(Method::GET, "admin/users")).await
    }

    pub async fn create_admin(&self, request: &CreateAdminRequest) -> Result<(), ApiError> {
        self.send_empty(self.request(Method::POST, "admin/users/create-admin").json(request)).await
    }

    /// Regular accounts go through the public registration endpoint
    pub async fn create_user(&self, request: &CreateAdminRequest) -> Result<User, ApiError> {
        let register = RegisterRequest {
            name: request.name.clone(),
            email: request.email.clone(),
            password: request.password.clone(),
            role: Role::User,
        };
        self.register(&register).await
    }

    pub async fn promote_to_admin(&self, user_id: u32) -> Result<(), ApiError> {
        let builder = self
            .request(Method::PUT, &format!("admin/users/{}/promote", user_id))
            .json(&serde_json::json!({}));
        self.send_empty(builder).await
    }

    pub async fn update_user(&self, user_id: u32, request: &UpdateUserRequest) -> Result<(), ApiError> {
        self.send_empty(self.request(Method::PUT, &format!("admin/users/{}", user_id)).json(request)).await
    }

    pub async fn delete_user(&self, user_id: u32) -> Result<(), ApiError> {
        self.send_empty(self.request(Method::DELETE, &format!("admin/users/{}", user_id))).await
    }

    // ========================
    // Rooms
    // ========================

    pub async fn admin_list_rooms(&self) -> Result<Vec<Room>, ApiError> {
        self.send(self.request(Method::GET, "admin/rooms")).await
    }

    pub async fn create_room(&self, request: &RoomRequest) -> Result<(), ApiError> {
        self.send_empty(self.request(Method::POST, "admin/rooms").json(request)).await
    }

    pub async fn update_room(&self, room_id: u32, request: &RoomRequest) -> Result<(), ApiError> {
        self.send_empty(self.request(Method::PUT, &format!("admin/rooms/{}", room_id)).json(request)).await
    }

    pub async fn delete_room(&self, room_id: u32) -> Result<(), ApiError> {
        self.send_empty(self.request(Method::DELETE, &format!("admin/rooms/{}", room_id))).await
    }

    pub async fn update_room_status(&self, room_id: u32, status: RoomStatus) -> Result<(), ApiError> {
        let builder = self
            .request(Method::PATCH, &format!("admin/rooms/{}/status", room_id))
            .query(&[("status", status.as_str())]);
        self.send_empty(builder).await
    }

    // ========================
    // Equipment
    // ========================

    pub async fn admin_list_equipment(&self) -> Result<Vec<Equipment>, ApiError> {
        self.send(self.request(Method::GET, "admin/equipment")).await
    }

    pub async fn create_equipment(&self, request: &EquipmentRequest) -> Result<(), ApiError> {
        self.send_empty(self.request(Method::POST, "admin/equipment").json(request)).await
    }

    pub async fn update_equipment(&self, equipment_id: u32, request: &EquipmentRequest) -> Result<(), ApiError> {
        let builder = self
            .request(Method::PUT, &format!("admin/equipment/{}", equipment_id))
            .json(request);
        self.send_empty(builder).await
    }

    pub async fn delete_equipment(&self, equipment_id: u32) -> Result<(), ApiError> {
        self.send_empty(self.request(Method::DELETE, &format!("admin/equipment/{}", equipment_id))).await
    }

    pub async fn update_equipment_status(&self, equipment_id: u32, status: EquipmentStatus) -> Result<(), ApiError> {
        let builder = self
            .request(Method::PATCH, &format!("admin/equipment/{}/status", equipment_id))
            .query(&[("status", status.as_str())]);
        self.send_empty(builder).await
    }

    // ========================
    // Reservations
    // ========================

    pub async fn admin_list_reservations(&self) -> Result<Vec<Reservation>, ApiError> {
        self.send(self.request(Method::GET, "admin/reservations")).await
    }

    pub async fn pending_reservations(&self) -> Result<Vec<Reservation>, ApiError> {
        self.send(self.request(Method::GET, "admin/reservations/pending")).await
    }

    pub async fn confirm_reservation(&self, reservation_id: u32) -> Result<(), ApiError> {
        let path = format!("admin/reservations/{}/confirm", reservation_id);
        self.send_empty(self.request(Method::PATCH, &path)).await
    }

    pub async fn admin_delete_reservation(&self, reservation_id: u32) -> Result<(), ApiError> {
        let path = format!("admin/reservations/{}", reservation_id);
        self.send_empty(self.request(Method::DELETE, &path)).await
    }

    // ========================
    // SQL Console
    // ========================

    pub async fn execute_sql(&self, query: &str) -> Result<SqlQueryResult, ApiError> {
        let builder = self
            .request(Method::POST, "admin/sql/execute")
            .json(&SqlQueryRequest { query });
        self.send(builder).await
    }
}
