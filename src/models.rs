//! Frontend Models
//!
//! Data structures matching backend entities and request bodies.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

// ========================
// Users
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// User record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: u32,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

// ========================
// Rooms and Equipment
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RoomStatus {
    Empty,
    Occupied,
    Maintenance,
}

impl RoomStatus {
    pub const ALL: [RoomStatus; 3] = [RoomStatus::Empty, RoomStatus::Occupied, RoomStatus::Maintenance];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Empty => "EMPTY",
            RoomStatus::Occupied => "OCCUPIED",
            RoomStatus::Maintenance => "MAINTENANCE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoomStatus::Empty => "Boş",
            RoomStatus::Occupied => "Dolu",
            RoomStatus::Maintenance => "Bakımda",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            RoomStatus::Empty => "status-available",
            RoomStatus::Occupied => "status-occupied",
            RoomStatus::Maintenance => "status-maintenance",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// Room record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub room_id: u32,
    pub name: String,
    pub capacity: u32,
    pub status: RoomStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EquipmentStatus {
    Available,
    Reserved,
    Maintenance,
}

impl EquipmentStatus {
    pub const ALL: [EquipmentStatus; 3] = [
        EquipmentStatus::Available,
        EquipmentStatus::Reserved,
        EquipmentStatus::Maintenance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentStatus::Available => "AVAILABLE",
            EquipmentStatus::Reserved => "RESERVED",
            EquipmentStatus::Maintenance => "MAINTENANCE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EquipmentStatus::Available => "Müsait",
            EquipmentStatus::Reserved => "Rezerve",
            EquipmentStatus::Maintenance => "Bakımda",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            EquipmentStatus::Available => "status-available",
            EquipmentStatus::Reserved => "status-reserved",
            EquipmentStatus::Maintenance => "status-maintenance",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// Equipment record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub equipment_id: u32,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub status: EquipmentStatus,
}

/// Equipment categories offered in admin forms
pub const EQUIPMENT_TYPES: &[&str] = &[
    "Laptop",
    "Tablet",
    "Projeksiyon",
    "Yazıcı",
    "Mikrofon",
    "Kamera",
    "Hoparlör",
    "Tahta",
    "Mouse",
    "Klavye",
    "Monitör",
    "Kulaklık",
];

/// Icon for a free-text equipment category
pub fn equipment_icon(kind: &str) -> &'static str {
    const ICONS: &[(&[&str], &str)] = &[
        (&["laptop"], "💻"),
        (&["tablet", "ipad"], "📱"),
        (&["projeksiyon", "projector"], "📽️"),
        (&["yazıcı", "yazici", "printer"], "🖨️"),
        (&["mikrofon", "microphone", "mic"], "🎤"),
        (&["kamera", "camera", "webcam"], "📷"),
        (&["hoparlör", "hoparlor", "speaker", "ses"], "🔊"),
        (&["tahta", "board"], "📋"),
        (&["mouse", "fare"], "🖱️"),
        (&["klavye", "keyboard"], "⌨️"),
        (&["monitör", "monitor", "ekran"], "🖥️"),
        (&["kulaklık", "kulaklik", "headphone"], "🎧"),
    ];

    let kind = kind.trim().to_lowercase();
    ICONS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| kind.contains(k)))
        .map(|(_, icon)| *icon)
        .unwrap_or("🔧")
}

/// Which resource type a search or reservation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResourceKind {
    #[default]
    Room,
    Equipment,
}

// ========================
// Time Slots
// ========================

/// `HH:MM` wall-clock times; `HH:MM:SS` is accepted on input
pub mod wall_clock {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn parse(value: &str) -> Option<NaiveTime> {
        let value = value.trim();
        NaiveTime::parse_from_str(value, "%H:%M:%S%.f")
            .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
            .ok()
    }

    pub fn format(time: &NaiveTime) -> String {
        time.format("%H:%M").to_string()
    }

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid wall-clock time '{}'", raw)))
    }
}

/// Time slot record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    #[serde(alias = "id")]
    pub time_slot_id: u32,
    #[serde(with = "wall_clock")]
    pub start_time: NaiveTime,
    #[serde(with = "wall_clock")]
    pub end_time: NaiveTime,
}

impl TimeSlot {
    /// e.g. "09:00 - 11:00"
    pub fn label(&self) -> String {
        format!("{} - {}", wall_clock::format(&self.start_time), wall_clock::format(&self.end_time))
    }
}

// ========================
// Reservations
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReservationStatus {
    #[serde(rename = "BEKLENIYOR", alias = "PENDING")]
    Pending,
    #[serde(rename = "ONAYLANDI", alias = "CONFIRMED")]
    Confirmed,
    #[serde(rename = "IPTAL_EDILDI", alias = "CANCELLED")]
    Cancelled,
}

impl ReservationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "Bekliyor",
            ReservationStatus::Confirmed => "Onaylandı",
            ReservationStatus::Cancelled => "İptal Edildi",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "badge-warning",
            ReservationStatus::Confirmed => "badge-success",
            ReservationStatus::Cancelled => "badge-danger",
        }
    }
}

/// Reservation record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub reservation_id: u32,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub room: Option<Room>,
    #[serde(default)]
    pub equipment: Option<Equipment>,
    #[serde(default)]
    pub time_slot: Option<TimeSlot>,
    pub reservation_date: NaiveDate,
    pub status: ReservationStatus,
}

impl Reservation {
    /// Display name of the reserved room or equipment
    pub fn resource_name(&self) -> String {
        match (&self.room, &self.equipment) {
            (Some(room), _) => format!("🚪 {}", room.name),
            (None, Some(equipment)) => format!("{} {}", equipment_icon(&equipment.kind), equipment.name),
            (None, None) => "-".to_string(),
        }
    }

    pub fn time_slot_label(&self) -> String {
        self.time_slot.as_ref().map(TimeSlot::label).unwrap_or_else(|| "-".to_string())
    }
}

// ========================
// Admin Dashboard
// ========================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_users: u32,
    pub total_admins: u32,
    pub total_regular_users: u32,
    pub total_rooms: u32,
    pub empty_rooms: u32,
    pub occupied_rooms: u32,
    pub maintenance_rooms: u32,
    pub total_equipment: u32,
    pub available_equipment: u32,
    pub reserved_equipment: u32,
    pub maintenance_equipment: u32,
    pub total_reservations: u32,
    pub pending_reservations: u32,
    pub total_time_slots: u32,
}

/// Result of an admin SQL console query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqlQueryResult {
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<serde_json::Value>>,
    #[serde(default)]
    pub row_count: u64,
}

// ========================
// Request Bodies
// ========================

#[derive(Debug, Clone, Default, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateAdminRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl CreateAdminRequest {
    pub fn is_complete(&self) -> bool {
        ![&self.name, &self.email, &self.password].iter().any(|f| f.trim().is_empty())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateUserRequest {
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoomRequest {
    pub name: String,
    pub capacity: u32,
    pub status: RoomStatus,
}

impl Default for RoomRequest {
    fn default() -> Self {
        Self { name: String::new(), capacity: 1, status: RoomStatus::Empty }
    }
}

impl From<&Room> for RoomRequest {
    fn from(room: &Room) -> Self {
        Self { name: room.name.clone(), capacity: room.capacity, status: room.status }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EquipmentRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: EquipmentStatus,
}

impl Default for EquipmentRequest {
    fn default() -> Self {
        Self { name: String::new(), kind: String::new(), status: EquipmentStatus::Available }
    }
}

impl From<&Equipment> for EquipmentRequest {
    fn from(equipment: &Equipment) -> Self {
        Self { name: equipment.name.clone(), kind: equipment.kind.clone(), status: equipment.status }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotRequest {
    #[serde(with = "wall_clock")]
    pub start_time: NaiveTime,
    #[serde(with = "wall_clock")]
    pub end_time: NaiveTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub user_id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment_id: Option<u32>,
    pub time_slot_id: u32,
    pub reservation_date: NaiveDate,
}

impl ReservationRequest {
    /// Request for a room or a piece of equipment, depending on `kind`
    pub fn new(user_id: u32, kind: ResourceKind, resource_id: u32, time_slot_id: u32, date: NaiveDate) -> Self {
        let (room_id, equipment_id) = match kind {
            ResourceKind::Room => (Some(resource_id), None),
            ResourceKind::Equipment => (None, Some(resource_id)),
        };
        Self { user_id, room_id, equipment_id, time_slot_id, reservation_date: date }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SqlQueryRequest<'a> {
    pub query: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reservation_from_backend_json() {
        let value = json!({
            "reservationId": 7,
            "user": { "userId": 3, "name": "Ayşe", "email": "ayse@example.com", "role": "USER" },
            "room": { "roomId": 2, "name": "Grup Çalışma 1", "capacity": 6, "status": "EMPTY" },
            "timeSlot": { "timeSlotId": 4, "startTime": "09:00:00", "endTime": "11:00" },
            "reservationDate": "2025-06-15",
            "status": "BEKLENIYOR"
        });

        let reservation: Reservation = serde_json::from_value(value).unwrap();
        assert_eq!(reservation.reservation_id, 7);
        assert_eq!(reservation.status, ReservationStatus::Pending);
        assert_eq!(reservation.time_slot_label(), "09:00 - 11:00");
        assert_eq!(reservation.resource_name(), "🚪 Grup Çalışma 1");
        assert!(reservation.equipment.is_none());
    }

    #[test]
    fn test_reservation_status_accepts_english_names() {
        let status: ReservationStatus = serde_json::from_value(json!("CANCELLED")).unwrap();
        assert_eq!(status, ReservationStatus::Cancelled);
        assert_eq!(serde_json::to_value(status).unwrap(), json!("IPTAL_EDILDI"));
    }

    #[test]
    fn test_time_slot_accepts_plain_id() {
        let slot: TimeSlot = serde_json::from_value(json!({
            "id": 3, "startTime": "13:00", "endTime": "15:30"
        }))
        .unwrap();
        assert_eq!(slot.time_slot_id, 3);
        assert_eq!(slot.end_time, NaiveTime::from_hms_opt(15, 30, 0).unwrap());
    }

    #[test]
    fn test_invalid_wall_clock_rejected() {
        let result: Result<TimeSlot, _> = serde_json::from_value(json!({
            "timeSlotId": 1, "startTime": "nine", "endTime": "10:00"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_reservation_request_targets_one_resource() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 20).unwrap();
        let request = ReservationRequest::new(15, ResourceKind::Equipment, 9, 1, date);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "userId": 15, "equipmentId": 9, "timeSlotId": 1, "reservationDate": "2025-11-20" })
        );
    }

    #[test]
    fn test_equipment_type_field_name() {
        let equipment: Equipment = serde_json::from_value(json!({
            "equipmentId": 1, "name": "Epson", "type": "Projeksiyon", "status": "AVAILABLE"
        }))
        .unwrap();
        assert_eq!(equipment.kind, "Projeksiyon");
        let body = serde_json::to_value(EquipmentRequest::from(&equipment)).unwrap();
        assert_eq!(body["type"], "Projeksiyon");
    }

    #[test]
    fn test_equipment_icon_matches_keywords() {
        assert_eq!(equipment_icon("Gaming Laptop"), "💻");
        assert_eq!(equipment_icon("  IPAD Pro "), "📱");
        assert_eq!(equipment_icon("Yazıcı"), "🖨️");
        assert_eq!(equipment_icon("Kulaklık"), "🎧");
        assert_eq!(equipment_icon("Sandalye"), "🔧");
    }

    #[test]
    fn test_dashboard_stats_tolerates_missing_fields() {
        let stats: DashboardStats = serde_json::from_value(json!({ "totalUsers": 12 })).unwrap();
        assert_eq!(stats.total_users, 12);
        assert_eq!(stats.pending_reservations, 0);
    }

    #[test]
    fn test_user_role() {
        let admin: User = serde_json::from_value(json!({
            "userId": 1, "name": "Root", "email": "root@kutuphane.com", "role": "ADMIN"
        }))
        .unwrap();
        assert!(admin.is_admin());
    }
}
