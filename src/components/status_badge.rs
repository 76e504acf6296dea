//! Status Badges
//!
//! Localized colored labels for room, equipment and reservation statuses.

use leptos::prelude::*;

use crate::models::{EquipmentStatus, ReservationStatus, RoomStatus};

#[component]
pub fn RoomStatusBadge(status: RoomStatus) -> impl IntoView {
    view! { <span class=format!("status-badge {}", status.css_class())>{status.label()}</span> }
}

#[component]
pub fn EquipmentStatusBadge(status: EquipmentStatus) -> impl IntoView {
    view! { <span class=format!("status-badge {}", status.css_class())>{status.label()}</span> }
}

#[component]
pub fn ReservationStatusBadge(status: ReservationStatus) -> impl IntoView {
    view! { <span class=format!("badge {}", status.badge_class())>{status.label()}</span> }
}
