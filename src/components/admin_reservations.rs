//! Admin Reservations Tab
//!
//! Pending approvals and the full reservation list share one component.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ReservationRow;
use crate::confirm::PendingAction;
use crate::context::use_app_context;
use crate::models::{Reservation, ReservationStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationScope {
    Pending,
    All,
}

#[component]
pub fn AdminReservations(scope: ReservationScope, set_error: WriteSignal<Option<String>>) -> impl IntoView {
    let ctx = use_app_context();

    let (reservations, set_reservations) = signal(Vec::<Reservation>::new());

    let load = move || {
        let api = ctx.api();
        spawn_local(async move {
            let result = match scope {
                ReservationScope::Pending => api.pending_reservations().await,
                ReservationScope::All => api.admin_list_reservations().await,
            };
            match result {
                Ok(loaded) => set_reservations.set(loaded),
                Err(e) => {
                    log::warn!("{:?} reservations not loaded: {}", scope, e);
                    set_error.set(Some("Rezervasyonlar yüklenemedi".to_string()));
                }
            }
        });
    };

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        load();
    });

    let confirm = move |reservation_id: u32| {
        let api = ctx.api();
        spawn_local(async move {
            match api.confirm_reservation(reservation_id).await {
                Ok(()) => {
                    ctx.notifications.success("Rezervasyon onaylandı");
                    ctx.reload();
                }
                Err(e) => {
                    ctx.notifications.report(&e, "Rezervasyon onaylanamadı");
                }
            }
        });
    };

    let empty_text = match scope {
        ReservationScope::Pending => "Onay bekleyen rezervasyon yok.",
        ReservationScope::All => "Henüz rezervasyon yok.",
    };

    view! {
        <div class="admin-section">
            <Show
                when=move || !reservations.get().is_empty()
                fallback=move || view! { <p class="empty-state">{empty_text}</p> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"No"</th>
                            <th>"Kullanıcı"</th>
                            <th>"Kaynak"</th>
                            <th>"Tarih"</th>
                            <th>"Saat"</th>
                            <th>"Durum"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || reservations.get()
                            key=|r| (r.reservation_id, r.status)
                            children=move |r| {
                                let id = r.reservation_id;
                                let pending = r.status == ReservationStatus::Pending;
                                let cancellable = r.status != ReservationStatus::Cancelled;
                                view! {
                                    <ReservationRow reservation=r show_user=true>
                                        {pending.then(|| view! {
                                            <button class="btn-success small" on:click=move |_| confirm(id)>
                                                "Onayla"
                                            </button>
                                        })}
                                        {cancellable.then(|| view! {
                                            <button
                                                class="btn-danger small"
                                                on:click=move |_| ctx.request_confirmation(PendingAction::AdminCancelReservation(id))
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
