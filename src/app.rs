//! Library Reservation Frontend App
//!
//! Root component: builds the shared context, runs the wall clock, and
//! switches between pages.

use std::time::Duration;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::{
    AdminPanel, ConfirmDialog, Dashboard, LoginForm, NavBar, NotificationToast, RegisterForm,
    ReservationsPage, RoomsPage,
};
use crate::config::Config;
use crate::context::AppContext;
use crate::notification::NotificationCenter;
use crate::page::Page;
use crate::session::{BrowserStorage, Session};
use crate::store::AppState;

#[component]
pub fn App(config: Config) -> impl IntoView {
    let session = Session::rehydrate(BrowserStorage);
    let notifications = NotificationCenter::new(config.notifications);
    let api = ApiClient::new(config.api_base());

    let ctx = AppContext::new(session, notifications, api);
    provide_context(ctx);
    provide_context(Store::new(AppState::default()));

    // Wall clock for active/past classification
    let refresh = Duration::from_secs(u64::from(config.clock.refresh_secs));
    match set_interval_with_handle(move || ctx.tick(), refresh) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => log::error!("clock timer not started: {:?}", e),
    }

    // Session dropped elsewhere (e.g. storage cleared): leave guarded pages
    Effect::new(move |_| {
        let user = ctx.session.watch().get();
        let page = ctx.page();
        let resolved = page.resolve(user.as_ref());
        if resolved != page {
            ctx.navigate(resolved);
        }
    });

    view! {
        <div class="app-layout">
            <Show when=move || ctx.session.is_logged_in()>
                <NavBar />
            </Show>

            <main class="main-content">
                {move || match ctx.page() {
                    Page::Login => view! { <LoginForm /> }.into_any(),
                    Page::Register => view! { <RegisterForm /> }.into_any(),
                    Page::Dashboard => view! { <Dashboard /> }.into_any(),
                    Page::Rooms => view! { <RoomsPage /> }.into_any(),
                    Page::Reservations => view! { <ReservationsPage /> }.into_any(),
                    Page::Admin => view! { <AdminPanel /> }.into_any(),
                }}
            </main>

            <NotificationToast />
            <ConfirmDialog />
        </div>
    }
}
