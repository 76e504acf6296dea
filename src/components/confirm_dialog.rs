//! Confirm Dialog Component
//!
//! Modal yes/no prompt for the pending destructive action. Accepting runs the
//! action against the backend; declining just closes the dialog.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::confirm::PendingAction;
use crate::context::use_app_context;
use crate::store::{store_remove_equipment, store_remove_room, store_remove_time_slot, use_app_store};

#[component]
pub fn ConfirmDialog() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let on_accept = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let mut accepted = None;
        ctx.confirm.update(|state| accepted = state.accept());
        let Some(action) = accepted else { return };

        let api = ctx.api();
        spawn_local(async move {
            match action.execute(&api).await {
                Ok(()) => {
                    match action {
                        PendingAction::DeleteRoom(id) => store_remove_room(&store, id),
                        PendingAction::DeleteEquipment(id) => store_remove_equipment(&store, id),
                        PendingAction::DeleteTimeSlot(id) => store_remove_time_slot(&store, id),
                        _ => {}
                    }
                    ctx.notifications.success(action.success_message());
                }
                Err(e) => {
                    ctx.notifications.report(&e, action.failure_message());
                }
            }
            ctx.confirm.update(|state| state.finish());
            ctx.reload();
        });
    };

    let on_decline = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        ctx.confirm.update(|state| state.decline());
    };

    let prompt = move || ctx.confirm.with(|state| state.pending().map(|a| a.prompt()));
    let in_flight = move || ctx.confirm.with(|state| state.is_in_flight());

    view! {
        <Show when=move || prompt().is_some()>
            <div class="modal-overlay" on:click=on_decline>
                <div class="modal confirm-modal" on:click=|ev| ev.stop_propagation()>
                    <p class="confirm-text">{move || prompt().unwrap_or_default()}</p>
                    <div class="modal-actions">
                        <button class="confirm-btn" on:click=on_accept disabled=in_flight>
                            {move || if in_flight() { "İşleniyor..." } else { "Evet" }}
                        </button>
                        <button class="cancel-btn" on:click=on_decline disabled=in_flight>"Hayır"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
