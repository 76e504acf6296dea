//! Reservation Lifecycle
//!
//! Client-side active/past split of a user's reservations. Display filtering
//! only; the backend decides what a reservation really is.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

use crate::models::{Reservation, ReservationStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationPhase {
    Active,
    Past,
}

/// Tabs on the reservations page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReservationTab {
    All,
    #[default]
    Active,
    Past,
}

impl ReservationTab {
    pub const ALL: [ReservationTab; 3] = [ReservationTab::All, ReservationTab::Active, ReservationTab::Past];

    pub fn label(&self) -> &'static str {
        match self {
            ReservationTab::All => "Tümü",
            ReservationTab::Active => "Aktif",
            ReservationTab::Past => "Geçmiş",
        }
    }
}

/// Past if cancelled, dated before today, or dated today with a slot that
/// has already ended at `now`. The end time is compared at minute precision.
pub fn classify(reservation: &Reservation, now: NaiveDateTime) -> ReservationPhase {
    if reservation.status == ReservationStatus::Cancelled {
        return ReservationPhase::Past;
    }

    let today = now.date();
    if reservation.reservation_date < today {
        return ReservationPhase::Past;
    }

    if reservation.reservation_date == today {
        if let Some(slot) = &reservation.time_slot {
            let end = slot.end_time.with_second(0).unwrap_or(slot.end_time);
            if now.time() > end {
                return ReservationPhase::Past;
            }
        }
    }

    ReservationPhase::Active
}

/// Split into (active, past), keeping the input order within each group
pub fn partition(reservations: &[Reservation], now: NaiveDateTime) -> (Vec<Reservation>, Vec<Reservation>) {
    reservations
        .iter()
        .cloned()
        .partition(|r| classify(r, now) == ReservationPhase::Active)
}

/// Reservations shown under a tab
pub fn filter_tab(reservations: &[Reservation], tab: ReservationTab, now: NaiveDateTime) -> Vec<Reservation> {
    match tab {
        ReservationTab::All => reservations.to_vec(),
        ReservationTab::Active => partition(reservations, now).0,
        ReservationTab::Past => partition(reservations, now).1,
    }
}

/// Owners may cancel reservations dated today or later that are not already cancelled
pub fn can_cancel(reservation: &Reservation, today: NaiveDate) -> bool {
    reservation.status != ReservationStatus::Cancelled && reservation.reservation_date >= today
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeSlot;
    use chrono::NaiveTime;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    fn reservation(id: u32, date: (i32, u32, u32), end: Option<(u32, u32)>, status: ReservationStatus) -> Reservation {
        Reservation {
            reservation_id: id,
            user: None,
            room: None,
            equipment: None,
            time_slot: end.map(|(h, m)| TimeSlot {
                time_slot_id: 1,
                start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                end_time: NaiveTime::from_hms_opt(h, m, 0).unwrap(),
            }),
            reservation_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            status,
        }
    }

    #[test]
    fn test_yesterday_is_past() {
        let r = reservation(1, (2025, 6, 9), Some((12, 0)), ReservationStatus::Confirmed);
        assert_eq!(classify(&r, at(2025, 6, 10, 10, 0)), ReservationPhase::Past);
    }

    #[test]
    fn test_today_before_slot_end_is_active() {
        let r = reservation(1, (2025, 6, 10), Some((23, 59)), ReservationStatus::Confirmed);
        assert_eq!(classify(&r, at(2025, 6, 10, 10, 0)), ReservationPhase::Active);
    }

    #[test]
    fn test_today_after_slot_end_is_past() {
        let r = reservation(1, (2025, 6, 10), Some((9, 30)), ReservationStatus::Pending);
        assert_eq!(classify(&r, at(2025, 6, 10, 10, 0)), ReservationPhase::Past);
        // The end minute itself still counts as active
        assert_eq!(classify(&r, at(2025, 6, 10, 9, 30)), ReservationPhase::Active);
    }

    #[test]
    fn test_slot_end_seconds_are_dropped() {
        let mut r = reservation(1, (2025, 6, 10), Some((9, 30)), ReservationStatus::Confirmed);
        if let Some(slot) = r.time_slot.as_mut() {
            slot.end_time = NaiveTime::from_hms_opt(9, 30, 45).unwrap();
        }
        let now = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap().and_hms_opt(9, 30, 30).unwrap();
        assert_eq!(classify(&r, now), ReservationPhase::Past);
        assert_eq!(classify(&r, at(2025, 6, 10, 9, 30)), ReservationPhase::Active);
    }

    #[test]
    fn test_today_without_slot_is_active() {
        let r = reservation(1, (2025, 6, 10), None, ReservationStatus::Pending);
        assert_eq!(classify(&r, at(2025, 6, 10, 23, 0)), ReservationPhase::Active);
    }

    #[test]
    fn test_cancelled_is_always_past() {
        let future = reservation(1, (2030, 1, 1), Some((23, 59)), ReservationStatus::Cancelled);
        assert_eq!(classify(&future, at(2025, 6, 10, 10, 0)), ReservationPhase::Past);
    }

    #[test]
    fn test_classification_follows_the_clock() {
        let r = reservation(1, (2025, 6, 10), Some((12, 0)), ReservationStatus::Confirmed);
        let list = vec![r];
        assert_eq!(partition(&list, at(2025, 6, 10, 11, 59)).0.len(), 1);
        assert_eq!(partition(&list, at(2025, 6, 10, 12, 1)).1.len(), 1);
    }

    #[test]
    fn test_partition_and_tabs() {
        let list = vec![
            reservation(1, (2025, 6, 9), None, ReservationStatus::Confirmed),
            reservation(2, (2025, 6, 11), None, ReservationStatus::Pending),
            reservation(3, (2025, 6, 12), None, ReservationStatus::Cancelled),
            reservation(4, (2025, 6, 10), Some((23, 59)), ReservationStatus::Confirmed),
        ];
        let now = at(2025, 6, 10, 10, 0);

        let (active, past) = partition(&list, now);
        let ids = |v: &[Reservation]| v.iter().map(|r| r.reservation_id).collect::<Vec<_>>();
        assert_eq!(ids(&active), vec![2, 4]);
        assert_eq!(ids(&past), vec![1, 3]);

        assert_eq!(filter_tab(&list, ReservationTab::All, now).len(), 4);
        assert_eq!(ids(&filter_tab(&list, ReservationTab::Past, now)), vec![1, 3]);
    }

    #[test]
    fn test_can_cancel() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        assert!(can_cancel(&reservation(1, (2025, 6, 10), None, ReservationStatus::Pending), today));
        assert!(can_cancel(&reservation(1, (2025, 6, 20), None, ReservationStatus::Confirmed), today));
        assert!(!can_cancel(&reservation(1, (2025, 6, 9), None, ReservationStatus::Pending), today));
        assert!(!can_cancel(&reservation(1, (2025, 6, 20), None, ReservationStatus::Cancelled), today));
    }
}
