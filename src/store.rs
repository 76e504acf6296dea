//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Equipment, Room, TimeSlot};

/// Catalogue data shared by the rooms page and the admin panel
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Full room list as last fetched
    pub rooms: Vec<Room>,
    /// Full equipment list as last fetched
    pub equipment: Vec<Equipment>,
    pub time_slots: Vec<TimeSlot>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_rooms(store: &AppStore, rooms: Vec<Room>) {
    *store.rooms().write() = rooms;
}

pub fn store_set_equipment(store: &AppStore, equipment: Vec<Equipment>) {
    *store.equipment().write() = equipment;
}

pub fn store_set_time_slots(store: &AppStore, mut slots: Vec<TimeSlot>) {
    slots.sort_by_key(|s| s.start_time);
    *store.time_slots().write() = slots;
}

/// Remove a room from the store by ID
pub fn store_remove_room(store: &AppStore, room_id: u32) {
    store.rooms().write().retain(|room| room.room_id != room_id);
}

/// Remove an equipment entry from the store by ID
pub fn store_remove_equipment(store: &AppStore, equipment_id: u32) {
    store.equipment().write().retain(|e| e.equipment_id != equipment_id);
}

/// Remove a time slot from the store by ID
pub fn store_remove_time_slot(store: &AppStore, time_slot_id: u32) {
    store.time_slots().write().retain(|s| s.time_slot_id != time_slot_id);
}
