//! Dashboard Page
//!
//! Greeting, catalogue counts, and the user's active reservations.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ReservationRow;
use crate::confirm::PendingAction;
use crate::context::use_app_context;
use crate::lifecycle::can_cancel;
use crate::models::Reservation;
use crate::page::Page;

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_app_context();
    let user = ctx.session.watch();

    let (reservations, set_reservations) = signal(Vec::<Reservation>::new());
    let (room_count, set_room_count) = signal(0usize);
    let (equipment_count, set_equipment_count) = signal(0usize);
    let (is_loading, set_is_loading) = signal(true);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let Some(user_id) = user.get_untracked().map(|u| u.user_id) else { return };
        let api = ctx.api();
        spawn_local(async move {
            match api.user_active_reservations(user_id).await {
                Ok(loaded) => set_reservations.set(loaded),
                Err(e) => log::warn!("active reservations not loaded: {}", e),
            }
            match api.list_rooms().await {
                Ok(rooms) => set_room_count.set(rooms.len()),
                Err(e) => log::warn!("rooms not loaded: {}", e),
            }
            match api.list_equipment().await {
                Ok(equipment) => set_equipment_count.set(equipment.len()),
                Err(e) => log::warn!("equipment not loaded: {}", e),
            }
            set_is_loading.set(false);
        });
    });

    view! {
        <div class="dashboard">
            <h1>{move || format!("Hoş geldiniz, {}!", user.get().map(|u| u.name).unwrap_or_default())}</h1>

            <div class="stats-grid">
                <div class="stat-card" on:click=move |_| ctx.navigate(Page::Rooms)>
                    <span class="stat-value">{move || room_count.get()}</span>
                    <span class="stat-label">"Toplam Oda"</span>
                </div>
                <div class="stat-card" on:click=move |_| ctx.navigate(Page::Rooms)>
                    <span class="stat-value">{move || equipment_count.get()}</span>
                    <span class="stat-label">"Toplam Ekipman"</span>
                </div>
                <div class="stat-card" on:click=move |_| ctx.navigate(Page::Reservations)>
                    <span class="stat-value">{move || reservations.get().len()}</span>
                    <span class="stat-label">"Aktif Rezervasyon"</span>
                </div>
            </div>

            <h2>"Aktif Rezervasyonlarım"</h2>
            <Show
                when=move || !reservations.get().is_empty()
                fallback=move || view! {
                    <p class="empty-state">
                        {move || if is_loading.get() { "Yükleniyor..." } else { "Aktif rezervasyonunuz yok." }}
                    </p>
                }
            >
                <table class="data-table">
                    <tbody>
                        <For
                            each=move || reservations.get()
                            key=|r| (r.reservation_id, r.status)
                            children=move |r| {
                                let id = r.reservation_id;
                                let row = r.clone();
                                let cancellable = move || can_cancel(&row, ctx.now.get().date());
                                view! {
                                    <ReservationRow reservation=r>
                                        {move || cancellable().then(|| view! {
                                            <button
                                                class="btn-danger small"
                                                on:click=move |_| ctx.request_confirmation(PendingAction::CancelReservation(id))
                                            >
                                                "İptal Et"
                                            </button>
                                        })}
                                    </ReservationRow>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
