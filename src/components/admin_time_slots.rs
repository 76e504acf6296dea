//! Admin Time Slots Tab

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::confirm::PendingAction;
use crate::context::use_app_context;
use crate::models::{wall_clock, TimeSlot, TimeSlotRequest};
use crate::store::{store_set_time_slots, use_app_store, AppStateStoreFields};

/// Parse the two time inputs into a request; the slot must end after it starts
fn slot_request(start: &str, end: &str) -> Result<TimeSlotRequest, &'static str> {
    let (Some(start_time), Some(end_time)) = (wall_clock::parse(start), wall_clock::parse(end)) else {
        return Err("Başlangıç ve bitiş saatini giriniz");
    };
    if end_time <= start_time {
        return Err("Bitiş saati başlangıçtan sonra olmalı");
    }
    Ok(TimeSlotRequest { start_time, end_time })
}

#[component]
pub fn AdminTimeSlots(set_error: WriteSignal<Option<String>>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (editing, set_editing) = signal::<Option<u32>>(None);
    let (start, set_start) = signal(String::new());
    let (end, set_end) = signal(String::new());

    let load = move || {
        let api = ctx.api();
        spawn_local(async move {
            match api.list_time_slots().await {
                Ok(slots) => store_set_time_slots(&store, slots),
                Err(e) => {
                    log::warn!("time slots not loaded: {}", e);
                    set_error.set(Some("Zaman dilimleri yüklenemedi".to_string()));
                }
            }
        });
    };

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        load();
    });

    let reset_form = move || {
        set_editing.set(None);
        set_start.set(String::new());
        set_end.set(String::new());
    };

    let start_edit = move |slot: TimeSlot| {
        set_editing.set(Some(slot.time_slot_id));
        set_start.set(wall_clock::format(&slot.start_time));
        set_end.set(wall_clock::format(&slot.end_time));
    };

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = match slot_request(&start.get(), &end.get()) {
            Ok(request) => request,
            Err(msg) => {
                set_error.set(Some(msg.to_string()));
                return;
            }
        };
        let editing = editing.get();
        let api = ctx.api();
        spawn_local(async move {
            let (result, done, failed) = match editing {
                Some(id) => (api.update_time_slot(id, &request).await, "Zaman dilimi güncellendi", "Zaman dilimi güncellenemedi"),
                None => (api.create_time_slot(&request).await, "Zaman dilimi eklendi", "Zaman dilimi eklenemedi"),
            };
            match result {
                Ok(slot) => {
                    log::info!("time slot {} saved", slot.time_slot_id);
                    ctx.notifications.success(done);
                    reset_form();
                    load();
                }
                Err(e) => {
                    ctx.notifications.report(&e, failed);
                }
            }
        });
    };

    view! {
        <div class="admin-section">
            <form class="inline-form" on:submit=save>
                <input
                    type="time"
                    prop:value=move || start.get()
                    on:input=move |ev| set_start.set(event_target_value(&ev))
                />
                <span>"-"</span>
                <input
                    type="time"
                    prop:value=move || end.get()
                    on:input=move |ev| set_end.set(event_target_value(&ev))
                />
                <button type="submit" class="btn-primary">
                    {move || if editing.get().is_some() { "Güncelle" } else { "+ Ekle" }}
                </button>
                <Show when=move || editing.get().is_some()>
                    <button type="button" class="cancel-btn" on:click=move |_| reset_form()>"İptal"</button>
                </Show>
            </form>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Zaman Dilimi"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || store.time_slots().get()
                        key=|s| (s.time_slot_id, s.start_time, s.end_time)
                        children=move |slot| {
                            let id = slot.time_slot_id;
                            let label = slot.label();
                            view! {
                                <tr>
                                    <td>{id}</td>
                                    <td>{label}</td>
                                    <td class="row-actions">
                                        <button class="btn-secondary small" on:click=move |_| start_edit(slot.clone())>
                                            "Düzenle"
                                        </button>
                                        <button
                                            class="btn-danger small"
                                            on:click=move |_| ctx.request_confirmation(PendingAction::DeleteTimeSlot(id))
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
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_request_validation() {
        let request = slot_request("09:00", "10:30").unwrap();
        assert_eq!(wall_clock::format(&request.end_time), "10:30");
        assert!(slot_request("", "10:00").is_err());
        assert!(slot_request("11:00", "10:00").is_err());
        assert!(slot_request("10:00", "10:00").is_err());
    }
}
