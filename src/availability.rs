//! Availability Reconciliation
//!
//! Merges a full resource list with the subset the backend reports free for
//! one date and time slot. The result is a display-only view: statuses in it
//! are never sent back to the server.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::{ApiError, ClientError, ValidationError};
use crate::models::{Equipment, EquipmentStatus, ReservationRequest, ResourceKind, Room, RoomStatus, User};

/// A reservable resource with a status that depends on the queried slot
pub trait Resource: Clone {
    type Status: Copy + PartialEq;

    /// Status shown for resources missing from the available subset
    const UNAVAILABLE: Self::Status;
    /// Status that makes a resource selectable in the reservation form
    const BOOKABLE: Self::Status;

    fn id(&self) -> u32;
    fn status(&self) -> Self::Status;
    fn set_status(&mut self, status: Self::Status);
}

impl Resource for Room {
    type Status = RoomStatus;

    const UNAVAILABLE: RoomStatus = RoomStatus::Occupied;
    const BOOKABLE: RoomStatus = RoomStatus::Empty;

    fn id(&self) -> u32 {
        self.room_id
    }

    fn status(&self) -> RoomStatus {
        self.status
    }

    fn set_status(&mut self, status: RoomStatus) {
        self.status = status;
    }
}

impl Resource for Equipment {
    type Status = EquipmentStatus;

    const UNAVAILABLE: EquipmentStatus = EquipmentStatus::Reserved;
    const BOOKABLE: EquipmentStatus = EquipmentStatus::Available;

    fn id(&self) -> u32 {
        self.equipment_id
    }

    fn status(&self) -> EquipmentStatus {
        self.status
    }

    fn set_status(&mut self, status: EquipmentStatus) {
        self.status = status;
    }
}

/// Rewrite every resource's status for one slot.
///
/// Output has the length and order of `all`. Resources whose id appears in
/// `available` take that entry's status; all others get `R::UNAVAILABLE`.
pub fn reconcile<R: Resource>(all: &[R], available: &[R]) -> Vec<R> {
    let available_status: HashMap<u32, R::Status> = available
        .iter()
        .map(|r| (r.id(), r.status()))
        .collect();

    all.iter()
        .cloned()
        .map(|mut resource| {
            let status = available_status
                .get(&resource.id())
                .copied()
                .unwrap_or(R::UNAVAILABLE);
            resource.set_status(status);
            resource
        })
        .collect()
}

/// Entries of the available subset that can actually be reserved
pub fn bookable<R: Resource>(available: &[R]) -> Vec<R> {
    available
        .iter()
        .filter(|r| r.status() == R::BOOKABLE)
        .cloned()
        .collect()
}

/// What the user has picked in the search form so far
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AvailabilitySelection {
    pub kind: ResourceKind,
    pub date: Option<NaiveDate>,
    pub time_slot_id: Option<u32>,
}

/// A complete (date, slot) pair; only obtainable through validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityQuery {
    pub date: NaiveDate,
    pub time_slot_id: u32,
}

impl AvailabilityQuery {
    /// Query string pairs for `/…/available`
    pub fn params(&self) -> [(&'static str, String); 2] {
        [
            ("date", self.date.format("%Y-%m-%d").to_string()),
            ("timeSlotId", self.time_slot_id.to_string()),
        ]
    }
}

impl AvailabilitySelection {
    /// Reject incomplete selections before anything is sent
    pub fn query(&self) -> Result<AvailabilityQuery, ValidationError> {
        match (self.date, self.time_slot_id) {
            (Some(date), Some(time_slot_id)) => Ok(AvailabilityQuery { date, time_slot_id }),
            _ => Err(ValidationError::MissingDateOrTimeSlot),
        }
    }
}

/// Source of the per-slot available subsets
pub trait AvailabilityBackend {
    async fn available_rooms(&self, query: &AvailabilityQuery) -> Result<Vec<Room>, ApiError>;
    async fn available_equipment(&self, query: &AvailabilityQuery) -> Result<Vec<Equipment>, ApiError>;
}

/// Reconciled search result for one resource kind
#[derive(Debug, Clone, PartialEq)]
pub enum AvailabilityView {
    Rooms { display: Vec<Room>, bookable: Vec<Room> },
    Equipment { display: Vec<Equipment>, bookable: Vec<Equipment> },
}

impl AvailabilityView {
    pub fn bookable_count(&self) -> usize {
        match self {
            AvailabilityView::Rooms { bookable, .. } => bookable.len(),
            AvailabilityView::Equipment { bookable, .. } => bookable.len(),
        }
    }
}

/// Validate the selection, fetch the available subset, and reconcile it
/// against the full lists.
pub async fn search_availability<B: AvailabilityBackend>(
    backend: &B,
    selection: &AvailabilitySelection,
    all_rooms: &[Room],
    all_equipment: &[Equipment],
) -> Result<AvailabilityView, ClientError> {
    let query = selection.query()?;

    let view = match selection.kind {
        ResourceKind::Room => {
            let available = backend.available_rooms(&query).await?;
            AvailabilityView::Rooms {
                display: reconcile(all_rooms, &available),
                bookable: bookable(&available),
            }
        }
        ResourceKind::Equipment => {
            let available = backend.available_equipment(&query).await?;
            AvailabilityView::Equipment {
                display: reconcile(all_equipment, &available),
                bookable: bookable(&available),
            }
        }
    };

    log::info!(
        "availability for {:?} on {} slot {}: {} bookable",
        selection.kind,
        query.date,
        query.time_slot_id,
        view.bookable_count()
    );
    Ok(view)
}

/// Search date offered when the rooms page opens
pub fn default_search_date(today: NaiveDate) -> NaiveDate {
    today.succ_opt().unwrap_or(today)
}

/// Build the reservation request for the picked resource
pub fn reservation_request(
    user: Option<&User>,
    selection: &AvailabilitySelection,
    resource_id: Option<u32>,
) -> Result<ReservationRequest, ValidationError> {
    let user = user.ok_or(ValidationError::NotLoggedIn)?;
    let (resource_id, time_slot_id) = match (resource_id, selection.time_slot_id) {
        (Some(resource), Some(slot)) => (resource, slot),
        _ => return Err(ValidationError::MissingResource),
    };
    let date = selection.date.ok_or(ValidationError::MissingDateOrTimeSlot)?;
    Ok(ReservationRequest::new(user.user_id, selection.kind, resource_id, time_slot_id, date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn room(id: u32, status: RoomStatus) -> Room {
        Room { room_id: id, name: format!("Oda {}", id), capacity: 4, status }
    }

    fn equipment(id: u32, status: EquipmentStatus) -> Equipment {
        Equipment { equipment_id: id, name: format!("Cihaz {}", id), kind: "Laptop".to_string(), status }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Backend fake that records how often it was queried
    #[derive(Default)]
    struct FakeBackend {
        rooms: Vec<Room>,
        equipment: Vec<Equipment>,
        calls: Cell<u32>,
        fail: bool,
    }

    impl AvailabilityBackend for FakeBackend {
        async fn available_rooms(&self, _query: &AvailabilityQuery) -> Result<Vec<Room>, ApiError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                return Err(ApiError::Status { status: 500, message: None });
            }
            Ok(self.rooms.clone())
        }

        async fn available_equipment(&self, _query: &AvailabilityQuery) -> Result<Vec<Equipment>, ApiError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.equipment.clone())
        }
    }

    #[test]
    fn test_reconcile_room_scenario() {
        let all = vec![room(1, RoomStatus::Empty), room(2, RoomStatus::Empty)];
        let available = vec![room(1, RoomStatus::Empty)];

        let display = reconcile(&all, &available);

        assert_eq!(display, vec![room(1, RoomStatus::Empty), room(2, RoomStatus::Occupied)]);
    }

    #[test]
    fn test_reconcile_preserves_length_order_and_copies_subset_status() {
        let all = vec![
            equipment(5, EquipmentStatus::Available),
            equipment(3, EquipmentStatus::Maintenance),
            equipment(9, EquipmentStatus::Available),
            equipment(1, EquipmentStatus::Reserved),
        ];
        // Backend may report a different status than the persisted one
        let available = vec![equipment(9, EquipmentStatus::Maintenance), equipment(1, EquipmentStatus::Available)];

        let display = reconcile(&all, &available);

        assert_eq!(display.len(), all.len());
        let ids: Vec<u32> = display.iter().map(|e| e.equipment_id).collect();
        assert_eq!(ids, vec![5, 3, 9, 1]);
        let statuses: Vec<EquipmentStatus> = display.iter().map(|e| e.status).collect();
        assert_eq!(
            statuses,
            vec![
                EquipmentStatus::Reserved,
                EquipmentStatus::Reserved,
                EquipmentStatus::Maintenance,
                EquipmentStatus::Available,
            ]
        );
        // Only status changes
        assert_eq!(display[0].name, all[0].name);
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let all = vec![room(1, RoomStatus::Maintenance), room(2, RoomStatus::Empty), room(3, RoomStatus::Empty)];
        let available = vec![room(3, RoomStatus::Empty), room(1, RoomStatus::Maintenance)];

        let once = reconcile(&all, &available);
        let twice = reconcile(&once, &available);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_reconcile_empty_subset_marks_everything_unavailable() {
        let all = vec![room(1, RoomStatus::Empty), room(2, RoomStatus::Maintenance)];
        let display = reconcile(&all, &[]);
        assert!(display.iter().all(|r| r.status == RoomStatus::Occupied));
        assert!(reconcile::<Room>(&[], &[room(42, RoomStatus::Empty)]).is_empty());
    }

    #[test]
    fn test_bookable_keeps_only_bookable_status() {
        let available = vec![room(1, RoomStatus::Empty), room(2, RoomStatus::Maintenance), room(3, RoomStatus::Empty)];
        let ids: Vec<u32> = bookable(&available).iter().map(|r| r.room_id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_selection_requires_date_and_slot() {
        let mut selection = AvailabilitySelection { date: Some(date(2025, 6, 15)), ..Default::default() };
        assert_eq!(selection.query(), Err(ValidationError::MissingDateOrTimeSlot));

        selection.time_slot_id = Some(3);
        selection.date = None;
        assert_eq!(selection.query(), Err(ValidationError::MissingDateOrTimeSlot));

        selection.date = Some(date(2025, 6, 15));
        let query = selection.query().unwrap();
        assert_eq!(
            query.params(),
            [("date", "2025-06-15".to_string()), ("timeSlotId", "3".to_string())]
        );
    }

    #[tokio::test]
    async fn test_search_without_time_slot_issues_no_request() {
        let backend = FakeBackend { rooms: vec![room(1, RoomStatus::Empty)], ..Default::default() };
        let selection = AvailabilitySelection { date: Some(date(2025, 6, 15)), time_slot_id: None, ..Default::default() };

        let result = search_availability(&backend, &selection, &[room(1, RoomStatus::Empty)], &[]).await;

        assert_eq!(result, Err(ClientError::Validation(ValidationError::MissingDateOrTimeSlot)));
        assert_eq!(backend.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_search_rooms_reconciles_against_full_list() {
        let backend = FakeBackend { rooms: vec![room(1, RoomStatus::Empty)], ..Default::default() };
        let selection = AvailabilitySelection {
            kind: ResourceKind::Room,
            date: Some(date(2025, 6, 15)),
            time_slot_id: Some(3),
        };
        let all_rooms = vec![room(1, RoomStatus::Empty), room(2, RoomStatus::Empty)];

        let view = search_availability(&backend, &selection, &all_rooms, &[]).await.unwrap();

        assert_eq!(
            view,
            AvailabilityView::Rooms {
                display: vec![room(1, RoomStatus::Empty), room(2, RoomStatus::Occupied)],
                bookable: vec![room(1, RoomStatus::Empty)],
            }
        );
        assert_eq!(backend.calls.get(), 1);
        // Inputs are untouched
        assert_eq!(all_rooms[1].status, RoomStatus::Empty);
    }

    #[tokio::test]
    async fn test_search_equipment_uses_reserved_sentinel() {
        let backend = FakeBackend { equipment: vec![equipment(2, EquipmentStatus::Available)], ..Default::default() };
        let selection = AvailabilitySelection {
            kind: ResourceKind::Equipment,
            date: Some(date(2025, 6, 15)),
            time_slot_id: Some(1),
        };
        let all = vec![equipment(1, EquipmentStatus::Available), equipment(2, EquipmentStatus::Available)];

        let view = search_availability(&backend, &selection, &[], &all).await.unwrap();

        match view {
            AvailabilityView::Equipment { display, bookable } => {
                assert_eq!(display[0].status, EquipmentStatus::Reserved);
                assert_eq!(display[1].status, EquipmentStatus::Available);
                assert_eq!(bookable.len(), 1);
            }
            other => panic!("expected equipment view, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_search_surfaces_backend_failure() {
        let backend = FakeBackend { fail: true, ..Default::default() };
        let selection = AvailabilitySelection {
            kind: ResourceKind::Room,
            date: Some(date(2025, 6, 15)),
            time_slot_id: Some(3),
        };

        let err = search_availability(&backend, &selection, &[], &[]).await.unwrap_err();

        assert_eq!(err.user_message("Müsait odalar yüklenemedi!"), "Müsait odalar yüklenemedi!");
        assert_eq!(backend.calls.get(), 1);
    }

    #[test]
    fn test_default_search_date_is_tomorrow() {
        assert_eq!(default_search_date(date(2025, 12, 31)), date(2026, 1, 1));
    }

    #[test]
    fn test_reservation_request_targets_selected_kind() {
        let user = User { user_id: 7, name: "Ali".to_string(), email: "ali@example.com".to_string(), role: Default::default() };
        let mut selection = AvailabilitySelection {
            kind: ResourceKind::Equipment,
            date: Some(date(2025, 6, 15)),
            time_slot_id: Some(2),
        };

        let request = reservation_request(Some(&user), &selection, Some(11)).unwrap();
        assert_eq!(request.user_id, 7);
        assert_eq!(request.equipment_id, Some(11));
        assert_eq!(request.room_id, None);

        selection.kind = ResourceKind::Room;
        let request = reservation_request(Some(&user), &selection, Some(4)).unwrap();
        assert_eq!(request.room_id, Some(4));
        assert_eq!(request.equipment_id, None);
    }

    #[test]
    fn test_reservation_request_validation() {
        let user = User { user_id: 7, name: "Ali".to_string(), email: "ali@example.com".to_string(), role: Default::default() };
        let selection = AvailabilitySelection { kind: ResourceKind::Room, date: Some(date(2025, 6, 15)), time_slot_id: Some(2) };

        assert_eq!(reservation_request(None, &selection, Some(1)), Err(ValidationError::NotLoggedIn));
        assert_eq!(reservation_request(Some(&user), &selection, None), Err(ValidationError::MissingResource));

        let no_slot = AvailabilitySelection { time_slot_id: None, ..selection };
        assert_eq!(reservation_request(Some(&user), &no_slot, Some(1)), Err(ValidationError::MissingResource));
    }
}
