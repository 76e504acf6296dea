//! Type Selector Components
//!
//! Room/equipment toggle for the search form and the equipment category
//! picker used by the admin equipment form.

use leptos::prelude::*;

use crate::models::{ResourceKind, EQUIPMENT_TYPES, equipment_icon};

const RESOURCE_KINDS: &[(ResourceKind, &str)] = &[
    (ResourceKind::Room, "🚪 Odalar"),
    (ResourceKind::Equipment, "💻 Ekipmanlar"),
];

/// Toggle buttons between rooms and equipment
#[component]
pub fn ResourceKindSelector(
    current: ReadSignal<ResourceKind>,
    on_change: impl Fn(ResourceKind) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="type-selector">
            {RESOURCE_KINDS.iter().map(|(kind, label)| {
                let kind = *kind;
                let is_selected = move || current.get() == kind;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "type-btn active" } else { "type-btn" }
                        on:click=move |_| on_change(kind)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Equipment category dropdown
#[component]
pub fn EquipmentTypeSelect(
    current: ReadSignal<String>,
    on_change: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            class="form-select"
            prop:value=move || current.get()
            on:change=move |ev| on_change(event_target_value(&ev))
        >
            <option value="">"Tür seçiniz"</option>
            {EQUIPMENT_TYPES.iter().map(|kind| view! {
                <option value=*kind>{format!("{} {}", equipment_icon(kind), kind)}</option>
            }).collect_view()}
        </select>
    }
}
