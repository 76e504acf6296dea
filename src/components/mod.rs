//! UI Components
//!
//! Pages and reusable Leptos components.

mod nav_bar;
mod notification_toast;
mod confirm_dialog;
mod status_badge;
mod type_selector;
mod login_form;
mod register_form;
mod dashboard;
mod rooms_page;
mod reservations_page;
mod reservation_row;
mod admin_panel;
mod admin_users;
mod admin_rooms;
mod admin_equipment;
mod admin_reservations;
mod admin_time_slots;
mod sql_console_panel;

pub use nav_bar::NavBar;
pub use notification_toast::NotificationToast;
pub use confirm_dialog::ConfirmDialog;
pub use status_badge::{EquipmentStatusBadge, ReservationStatusBadge, RoomStatusBadge};
pub use type_selector::{EquipmentTypeSelect, ResourceKindSelector};
pub use login_form::LoginForm;
pub use register_form::RegisterForm;
pub use dashboard::Dashboard;
pub use rooms_page::RoomsPage;
pub use reservations_page::ReservationsPage;
pub use reservation_row::ReservationRow;
pub use admin_panel::AdminPanel;
pub use admin_users::AdminUsers;
pub use admin_rooms::AdminRooms;
pub use admin_equipment::AdminEquipment;
pub use admin_reservations::{AdminReservations, ReservationScope};
pub use admin_time_slots::AdminTimeSlots;
pub use sql_console_panel::SqlConsolePanel;
