//! Reservations Page
//!
//! The user's reservations split into all / active / past tabs. The split is
//! recomputed from the wall-clock signal, so a reservation moves to "past"
//! once its slot ends without a reload.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ReservationRow;
use crate::confirm::PendingAction;
use crate::context::use_app_context;
use crate::lifecycle::{can_cancel, filter_tab, partition, ReservationTab};
use crate::models::Reservation;

#[component]
pub fn ReservationsPage() -> impl IntoView {
    let ctx = use_app_context();

    let (reservations, set_reservations) = signal(Vec::<Reservation>::new());
    let (tab, set_tab) = signal(ReservationTab::default());
    let (is_loading, set_is_loading) = signal(true);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let Some(user_id) = ctx.session.watch().get_untracked().map(|u| u.user_id) else { return };
        let api = ctx.api();
        set_is_loading.set(true);
        spawn_local(async move {
            match api.user_reservations(user_id).await {
                Ok(loaded) => set_reservations.set(loaded),
                Err(e) => {
                    ctx.notifications.report(&e, "Rezervasyonlar yüklenemedi!");
                }
            }
            set_is_loading.set(false);
        });
    });

    let visible = Memo::new(move |_| {
        reservations.with(|list| filter_tab(list, tab.get(), ctx.now.get()))
    });

    let counts = Memo::new(move |_| {
        reservations.with(|list| {
            let (active, past) = partition(list, ctx.now.get());
            (list.len(), active.len(), past.len())
        })
    });

    let tab_count = move |t: ReservationTab| {
        let (all, active, past) = counts.get();
        match t {
            ReservationTab::All => all,
            ReservationTab::Active => active,
            ReservationTab::Past => past,
        }
    };

    view! {
        <div class="reservations-page">
            <h1>"Rezervasyonlarım"</h1>

            <div class="tab-bar">
                {ReservationTab::ALL.into_iter().map(|t| view! {
                    <button
                        class=move || if tab.get() == t { "tab active" } else { "tab" }
                        on:click=move |_| set_tab.set(t)
                    >
                        {move || format!("{} ({})", t.label(), tab_count(t))}
                    </button>
                }).collect_view()}
            </div>

            <Show
                when=move || !visible.get().is_empty()
                fallback=move || view! {
                    <p class="empty-state">
                        {move || if is_loading.get() { "Yükleniyor..." } else { "Bu sekmede rezervasyon yok." }}
                    </p>
                }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"No"</th>
                            <th>"Kaynak"</th>
                            <th>"Tarih"</th>
                            <th>"Saat"</th>
                            <th>"Durum"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible.get()
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
