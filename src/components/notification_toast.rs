//! Notification Toast Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::notification::NotificationKind;

fn icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "✅",
        NotificationKind::Error => "❌",
        NotificationKind::Info => "ℹ️",
        NotificationKind::Warning => "⚠️",
    }
}

/// Renders the notification center's single slot
#[component]
pub fn NotificationToast() -> impl IntoView {
    let ctx = use_app_context();
    let current = ctx.notifications.current();

    view! {
        {move || current.get().map(|n| {
            let class = format!("notification {}", n.kind.css_class());
            view! {
                <div class=class role="alert">
                    <span class="notification-icon">{icon(n.kind)}</span>
                    <span class="notification-message">{n.message.clone()}</span>
                    <button class="notification-close" on:click=move |_| ctx.notifications.hide()>
                        "×"
                    </button>
                </div>
            }
        })}
    }
}
