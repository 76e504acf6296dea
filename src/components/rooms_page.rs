//! Rooms & Equipment Page
//!
//! Availability search for one date and time slot, the reconciled resource
//! grid, and the reservation form for the bookable subset.

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::availability::{
    default_search_date, reservation_request, search_availability, AvailabilitySelection, AvailabilityView,
};
use crate::components::{EquipmentStatusBadge, ResourceKindSelector, RoomStatusBadge};
use crate::context::use_app_context;
use crate::models::{equipment_icon, Equipment, ResourceKind, Room};
use crate::store::{store_set_equipment, store_set_rooms, store_set_time_slots, use_app_store, AppStateStoreFields};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The searched selection, if the form still shows the same date and slot
fn booking_selection(
    searched: Option<AvailabilitySelection>,
    current: &AvailabilitySelection,
) -> Option<AvailabilitySelection> {
    searched.filter(|s| s == current)
}

#[component]
fn RoomCard(room: Room) -> impl IntoView {
    view! {
        <div class="resource-card">
            <div class="resource-icon">"🚪"</div>
            <h3>{room.name}</h3>
            <p class="resource-meta">{format!("Kapasite: {} kişi", room.capacity)}</p>
            <RoomStatusBadge status=room.status />
        </div>
    }
}

#[component]
fn EquipmentCard(equipment: Equipment) -> impl IntoView {
    view! {
        <div class="resource-card">
            <div class="resource-icon">{equipment_icon(&equipment.kind)}</div>
            <h3>{equipment.name}</h3>
            <p class="resource-meta">{equipment.kind}</p>
            <EquipmentStatusBadge status=equipment.status />
        </div>
    }
}

#[component]
pub fn RoomsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let tomorrow = default_search_date(ctx.now.get_untracked().date());
    let (kind, set_kind) = signal(ResourceKind::Room);
    let (date, set_date) = signal(tomorrow.format(DATE_FORMAT).to_string());
    let (time_slot_id, set_time_slot_id) = signal::<Option<u32>>(None);
    let (selected_resource, set_selected_resource) = signal::<Option<u32>>(None);
    let (result, set_result) = signal::<Option<AvailabilityView>>(None);
    let (searched, set_searched) = signal::<Option<AvailabilitySelection>>(None);
    let (show_form, set_show_form) = signal(false);
    let (is_loading, set_is_loading) = signal(false);

    // Catalogue and slots on mount
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let api = ctx.api();
        spawn_local(async move {
            match api.list_time_slots().await {
                Ok(slots) => store_set_time_slots(&store, slots),
                Err(e) => log::warn!("time slots not loaded: {}", e),
            }
            match api.list_rooms().await {
                Ok(rooms) => store_set_rooms(&store, rooms),
                Err(e) => log::warn!("rooms not loaded: {}", e),
            }
            match api.list_equipment().await {
                Ok(equipment) => store_set_equipment(&store, equipment),
                Err(e) => log::warn!("equipment not loaded: {}", e),
            }
        });
    });

    let selection = move || AvailabilitySelection {
        kind: kind.get(),
        date: NaiveDate::parse_from_str(&date.get(), DATE_FORMAT).ok(),
        time_slot_id: time_slot_id.get(),
    };

    let clear_result = move || {
        set_result.set(None);
        set_searched.set(None);
        set_show_form.set(false);
        set_selected_resource.set(None);
    };

    let change_kind = move |k: ResourceKind| {
        set_kind.set(k);
        clear_result();
    };

    let search = move |_: web_sys::MouseEvent| {
        let selection = selection();
        if let Err(e) = selection.query() {
            ctx.notifications.error(e.to_string());
            return;
        }
        let fallback = match selection.kind {
            ResourceKind::Room => "Müsait odalar yüklenemedi!",
            ResourceKind::Equipment => "Müsait ekipmanlar yüklenemedi!",
        };
        let all_rooms = store.rooms().get_untracked();
        let all_equipment = store.equipment().get_untracked();
        let api = ctx.api();

        set_is_loading.set(true);
        spawn_local(async move {
            match search_availability(&api, &selection, &all_rooms, &all_equipment).await {
                Ok(view) => {
                    set_selected_resource.set(None);
                    set_result.set(Some(view));
                    set_searched.set(Some(selection));
                    set_show_form.set(true);
                }
                Err(e) => {
                    ctx.notifications.report_client(&e, fallback);
                }
            }
            set_is_loading.set(false);
        });
    };

    let make_reservation = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(searched) = booking_selection(searched.get(), &selection()) else {
            clear_result();
            ctx.notifications.warning("Arama kriterleri değişti, lütfen tekrar arayın");
            return;
        };
        let user = ctx.session.current_user();
        let request = match reservation_request(user.as_ref(), &searched, selected_resource.get()) {
            Ok(request) => request,
            Err(e) => {
                ctx.notifications.error(e.to_string());
                return;
            }
        };

        let api = ctx.api();
        set_is_loading.set(true);
        spawn_local(async move {
            match api.create_reservation(&request).await {
                Ok(created) => {
                    log::info!("reservation {} created", created.reservation_id);
                    ctx.notifications.success(
                        "Rezervasyon başarıyla oluşturuldu! Lütfen yöneticinin onaylamasını bekleyiniz.",
                    );
                    set_selected_resource.set(None);
                    set_show_form.set(false);
                }
                Err(e) => {
                    ctx.notifications.report(&e, "Rezervasyon oluşturulamadı!");
                }
            }
            set_is_loading.set(false);
        });
    };

    let rooms_shown = move || match result.get() {
        Some(AvailabilityView::Rooms { display, .. }) => display,
        _ => store.rooms().get(),
    };
    let equipment_shown = move || match result.get() {
        Some(AvailabilityView::Equipment { display, .. }) => display,
        _ => store.equipment().get(),
    };

    // (id, label) choices for the reservation form
    let bookable_options = move || -> Vec<(u32, String)> {
        match result.get() {
            Some(AvailabilityView::Rooms { bookable, .. }) => bookable
                .into_iter()
                .map(|r| (r.room_id, format!("🚪 {} ({} kişi)", r.name, r.capacity)))
                .collect(),
            Some(AvailabilityView::Equipment { bookable, .. }) => bookable
                .into_iter()
                .map(|e| (e.equipment_id, format!("{} {}", equipment_icon(&e.kind), e.name)))
                .collect(),
            None => Vec::new(),
        }
    };

    view! {
        <div class="rooms-page">
            <h1>"Odalar & Ekipmanlar"</h1>

            <ResourceKindSelector current=kind on_change=change_kind />

            <div class="search-form">
                <label>
                    "Tarih"
                    <input
                        type="date"
                        prop:value=move || date.get()
                        on:input=move |ev| {
                            set_date.set(event_target_value(&ev));
                            clear_result();
                        }
                    />
                </label>
                <label>
                    "Zaman Dilimi"
                    <select on:change=move |ev| {
                        set_time_slot_id.set(event_target_value(&ev).parse().ok());
                        clear_result();
                    }>
                        <option value="" selected=move || time_slot_id.get().is_none()>"Seçiniz"</option>
                        <For
                            each=move || store.time_slots().get()
                            key=|s| s.time_slot_id
                            children=move |slot| {
                                let id = slot.time_slot_id;
                                view! {
                                    <option value=id.to_string() selected=move || time_slot_id.get() == Some(id)>
                                        {slot.label()}
                                    </option>
                                }
                            }
                        />
                    </select>
                </label>
                <button class="btn-primary" on:click=search disabled=move || is_loading.get()>
                    {move || if is_loading.get() { "Aranıyor..." } else { "Müsaitlik Ara" }}
                </button>
            </div>

            <Show when=move || show_form.get()>
                <form class="reservation-form" on:submit=make_reservation>
                    <h2>{move || format!("Müsait kaynaklar: {}", bookable_options().len())}</h2>
                    <select on:change=move |ev| set_selected_resource.set(event_target_value(&ev).parse().ok())>
                        <option value="" selected=move || selected_resource.get().is_none()>"Kaynak seçiniz"</option>
                        {move || bookable_options().into_iter().map(|(id, label)| view! {
                            <option value=id.to_string() selected=move || selected_resource.get() == Some(id)>
                                {label}
                            </option>
                        }).collect_view()}
                    </select>
                    <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                        "Rezervasyon Yap"
                    </button>
                    <button type="button" class="cancel-btn" on:click=move |_| set_show_form.set(false)>
                        "Vazgeç"
                    </button>
                </form>
            </Show>

            <div class="resource-grid">
                {move || match kind.get() {
                    ResourceKind::Room => rooms_shown()
                        .into_iter()
                        .map(|room| view! { <RoomCard room=room /> })
                        .collect_view()
                        .into_any(),
                    ResourceKind::Equipment => equipment_shown()
                        .into_iter()
                        .map(|equipment| view! { <EquipmentCard equipment=equipment /> })
                        .collect_view()
                        .into_any(),
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(date: (i32, u32, u32), slot: u32) -> AvailabilitySelection {
        AvailabilitySelection {
            kind: ResourceKind::Room,
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2),
            time_slot_id: Some(slot),
        }
    }

    #[test]
    fn test_booking_uses_the_searched_selection() {
        let searched = selection((2025, 6, 11), 2);
        assert_eq!(booking_selection(Some(searched.clone()), &searched), Some(searched.clone()));

        // Date or slot changed after the search
        assert_eq!(booking_selection(Some(searched.clone()), &selection((2025, 6, 12), 2)), None);
        assert_eq!(booking_selection(Some(searched), &selection((2025, 6, 11), 3)), None);
        assert_eq!(booking_selection(None, &selection((2025, 6, 11), 2)), None);
    }
}
