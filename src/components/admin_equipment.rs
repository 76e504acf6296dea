//! Admin Equipment Tab

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{EquipmentStatusBadge, EquipmentTypeSelect};
use crate::confirm::PendingAction;
use crate::context::use_app_context;
use crate::models::{equipment_icon, Equipment, EquipmentRequest, EquipmentStatus};
use crate::store::{store_set_equipment, use_app_store, AppStateStoreFields};

#[component]
pub fn AdminEquipment(set_error: WriteSignal<Option<String>>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (show_modal, set_show_modal) = signal(false);
    let (editing, set_editing) = signal::<Option<u32>>(None);
    let (name, set_name) = signal(String::new());
    let (kind, set_kind) = signal(String::new());
    let (status, set_status) = signal(EquipmentStatus::Available);

    let load = move || {
        let api = ctx.api();
        spawn_local(async move {
            match api.admin_list_equipment().await {
                Ok(equipment) => store_set_equipment(&store, equipment),
                Err(e) => {
                    log::warn!("equipment not loaded: {}", e);
                    set_error.set(Some("Ekipmanlar yüklenemedi".to_string()));
                }
            }
        });
    };

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        load();
    });

    let open_modal = move |equipment: Option<Equipment>| {
        let request = equipment.as_ref().map(EquipmentRequest::from).unwrap_or_default();
        set_editing.set(equipment.map(|e| e.equipment_id));
        set_name.set(request.name);
        set_kind.set(request.kind);
        set_status.set(request.status);
        set_show_modal.set(true);
    };

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = EquipmentRequest { name: name.get(), kind: kind.get(), status: status.get() };
        if request.name.trim().is_empty() || request.kind.is_empty() {
            set_error.set(Some("Tüm alanları doldurun".to_string()));
            return;
        }
        let editing = editing.get();
        let api = ctx.api();
        spawn_local(async move {
            let (result, done, failed) = match editing {
                Some(id) => (api.update_equipment(id, &request).await, "Ekipman güncellendi", "Ekipman güncellenemedi"),
                None => (api.create_equipment(&request).await, "Ekipman eklendi", "Ekipman eklenemedi"),
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

    let change_status = move |equipment_id: u32, value: String| {
        let Some(new_status) = EquipmentStatus::parse(&value) else { return };
        let api = ctx.api();
        spawn_local(async move {
            match api.update_equipment_status(equipment_id, new_status).await {
                Ok(()) => {
                    ctx.notifications.success("Ekipman durumu güncellendi");
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
                <button class="btn-primary" on:click=move |_| open_modal(None)>"+ Ekipman Ekle"</button>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Ad"</th>
                        <th>"Tür"</th>
                        <th>"Durum"</th>
                        <th>"Durum Değiştir"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || store.equipment().get()
                        key=|e| (e.equipment_id, e.status, e.name.clone(), e.kind.clone())
                        children=move |equipment| {
                            let id = equipment.equipment_id;
                            let current = equipment.status;
                            let editable = equipment.clone();
                            view! {
                                <tr>
                                    <td>{id}</td>
                                    <td>{equipment.name.clone()}</td>
                                    <td>{format!("{} {}", equipment_icon(&equipment.kind), equipment.kind)}</td>
                                    <td><EquipmentStatusBadge status=current /></td>
                                    <td>
                                        <select on:change=move |ev| change_status(id, event_target_value(&ev))>
                                            {EquipmentStatus::ALL.into_iter().map(|s| view! {
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
                                            on:click=move |_| ctx.request_confirmation(PendingAction::DeleteEquipment(id))
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
                        <h2>{move || if editing.get().is_some() { "Ekipmanı Düzenle" } else { "Yeni Ekipman" }}</h2>
                        <input
                            type="text"
                            placeholder="Ekipman adı"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                        <EquipmentTypeSelect current=kind on_change=move |k| set_kind.set(k) />
                        <select on:change=move |ev| {
                            if let Some(s) = EquipmentStatus::parse(&event_target_value(&ev)) {
                                set_status.set(s);
                            }
                        }>
                            {EquipmentStatus::ALL.into_iter().map(|s| view! {
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
