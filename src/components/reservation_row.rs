//! Reservation Row Component
//!
//! One table row per reservation, shared by the user pages and the admin
//! reservation lists.

use leptos::prelude::*;

use crate::components::ReservationStatusBadge;
use crate::models::Reservation;

#[component]
pub fn ReservationRow(
    reservation: Reservation,
    /// Include the owner's name column (admin lists)
    #[prop(optional)]
    show_user: bool,
    /// Action buttons for the last cell
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let user_cell = show_user.then(|| {
        let owner = reservation.user.as_ref().map(|u| u.name.clone()).unwrap_or_else(|| "-".to_string());
        view! { <td>{owner}</td> }
    });

    view! {
        <tr>
            <td>{format!("#{}", reservation.reservation_id)}</td>
            {user_cell}
            <td>{reservation.resource_name()}</td>
            <td>{reservation.reservation_date.format("%d.%m.%Y").to_string()}</td>
            <td>{reservation.time_slot_label()}</td>
            <td><ReservationStatusBadge status=reservation.status /></td>
            <td class="row-actions">{children.map(|c| c())}</td>
        </tr>
    }
}
