//! Admin Rooms Tab

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::RoomStatusBadge;
use crate::confirm::PendingAction;
use crate::context::use_app_context;
use crate::models::{Room, RoomRequest, RoomStatus};
use crate::store::{store_set_rooms, use_app_store, AppStateStoreFields};

#[component]
pub fn AdminRooms(set_error: WriteSignal<Option<String>>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (show_modal, set_show_modal) = signal(false);
    // None = creating a new room
    let (editing, set_editing) = signal::<Option<u32>>(None);
    let (name, set_name) = signal(String::new());
    let (capacity, set_capacity) = signal(1u32);
    let (status, set_status) = signal(RoomStatus::Empty);

    let load = move || {
        let api = ctx.api();
        spawn_local(async move {
            match api.admin_list_rooms().await {
                Ok(rooms) => store_set_rooms(&store, rooms),
                Err(e) => {
                    log::warn!("rooms not loaded: {}", e);
                    set_error.set(Some("Odalar yüklenemedi".to_string()));
                }
            }
        });
    };

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        load();
    });

    let open_modal = move |room: Option<Room>| {
        let request = room.as_ref().map(RoomRequest::from).unwrap_or_default();
        set_editing.set(room.map(|r| r.room_id));
        set_name.set(request.name);
        set_capacity.set(request.capacity);
        set_status.set(request.status);
        set_show_modal.set(true);
    };

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = RoomRequest { name: name.get(), capacity: capacity.get(), status: status.get() };
        if request.name.trim().is_empty() {
            set_error.set(Some("Oda adı boş olamaz".to_string()));
            return;
        }
        let editing = editing.get();
        let api = ctx.api();
        spawn_local(async move {
            let (result, done, failed) = match editing {
                Some(id) => (api.update_room(id, &request).await, "Oda güncellendi", "Oda güncellenemedi"),
                None => (api.create_room(&request).await, "Oda eklendi", "Oda eklenemedi"),
            };
            match result {
                Ok(()) => {
                    set_show_modal.set(false);
                    ctx.notifications.success(done);
                    load();
                }
                Err(e) => {
                    ctx.notifications.report(&e, failed);
                }
            }
        });
    };

    let change_status = move |room_id: u32, value: String| {
        let Some(new_status) = RoomStatus::parse(&value) else { return };
        let api = ctx.api();
        spawn_local(async move {
            match api.update_room_status(room_id, new_status).await {
                Ok(()) => {
                    ctx.notifications.success("Oda durumu güncellendi");
                    load();
                }
                Err(e) => {
                    ctx.notifications.report(&e, "Durum güncellenemedi");
                }
            }
        });
    };

    view! {
        <div class="admin-section">
            <div class="section-actions">
                <button class="btn-primary" on:click=move |_| open_modal(None)>"+ Oda Ekle"</button>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Ad"</th>
                        <th>"Kapasite"</th>
                        <th>"Durum"</th>
                        <th>"Durum Değiştir"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || store.rooms().get()
                        key=|r| (r.room_id, r.status, r.name.clone(), r.capacity)
                        children=move |room| {
                            let id = room.room_id;
                            let current = room.status;
                            let editable = room.clone();
                            view! {
                                <tr>
                                    <td>{id}</td>
                                    <td>{room.name.clone()}</td>
                                    <td>{room.capacity}</td>
                                    <td><RoomStatusBadge status=current /></td>
                                    <td>
                                        <select on:change=move |ev| change_status(id, event_target_value(&ev))>
                                            {RoomStatus::ALL.into_iter().map(|s| view! {
                                                <option value=s.as_str() selected=s == current>{s.label()}</option>
                                            }).collect_view()}
                                        </select>
                                    </td>
                                    <td class="row-actions">
                                        <button class="btn-secondary small" on:click=move |_| open_modal(Some(editable.clone()))>
                                            "Düzenle"
                                        </button>
                                        <button
                                            class="btn-danger small"
                                            on:click=move |_| ctx.request_confirmation(PendingAction::DeleteRoom(id))
                                        >
                                            "Sil"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <Show when=move || show_modal.get()>
                <div class="modal-overlay">
                    <form class="modal" on:submit=save>
                        <h2>{move || if editing.get().is_some() { "Odayı Düzenle" } else { "Yeni Oda" }}</h2>
                        <input
                            type="text"
                            placeholder="Oda adı"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                        <input
                            type="number"
                            min="1"
                            prop:value=move || capacity.get().to_string()
                            on:input=move |ev| set_capacity.set(event_target_value(&ev).parse().unwrap_or(1))
                        />
                        <select on:change=move |ev| {
                            if let Some(s) = RoomStatus::parse(&event_target_value(&ev)) {
                                set_status.set(s);
                            }
                        }>
                            {RoomStatus::ALL.into_iter().map(|s| view! {
                                <option value=s.as_str() selected=move || status.get() == s>{s.label()}</option>
                            }).collect_view()}
                        </select>
                        <div class="modal-actions">
                            <button type="submit" class="btn-primary">"Kaydet"</button>
                            <button type="button" class="cancel-btn" on:click=move |_| set_show_modal.set(false)>"İptal"</button>
                        </div>
                    </form>
                </div>
            </Show>
        </div>
    }
}
