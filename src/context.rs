//! Application Context
//!
//! Shared state provided via Leptos Context API.

use chrono::{Local, NaiveDateTime};
use leptos::prelude::*;

use crate::api::ApiClient;
use crate::confirm::{ConfirmState, PendingAction};
use crate::notification::NotificationCenter;
use crate::page::Page;
use crate::session::{BrowserStorage, Session};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub session: Session<BrowserStorage>,
    pub notifications: NotificationCenter,
    api: StoredValue<ApiClient, LocalStorage>,
    /// Destructive action waiting for the confirm dialog
    pub confirm: RwSignal<ConfirmState<PendingAction>>,
    page: RwSignal<Page>,
    /// Bumped after a confirmed action so lists reload - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped after a confirmed action so lists reload - write
    set_reload_trigger: WriteSignal<u32>,
    /// Wall clock, refreshed periodically by the app shell
    pub now: RwSignal<NaiveDateTime>,
}

impl AppContext {
    pub fn new(session: Session<BrowserStorage>, notifications: NotificationCenter, api: ApiClient) -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        let start = Page::Dashboard.resolve(session.current_user().as_ref());
        Self {
            session,
            notifications,
            api: StoredValue::new_local(api),
            confirm: RwSignal::new(ConfirmState::Idle),
            page: RwSignal::new(start),
            reload_trigger,
            set_reload_trigger,
            now: RwSignal::new(Local::now().naive_local()),
        }
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn page(&self) -> Page {
        self.page.get()
    }

    /// Switch pages through the session guard
    pub fn navigate(&self, requested: Page) {
        let target = requested.resolve(self.session.current_user().as_ref());
        if target != requested {
            log::debug!("navigation to {:?} redirected to {:?}", requested, target);
        }
        self.page.set(target);
    }

    /// Trigger a reload of lists
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn tick(&self) {
        self.now.set(Local::now().naive_local());
    }

    pub fn logout(&self) {
        self.session.logout();
        self.navigate(Page::Login);
        self.notifications.info("Çıkış yapıldı");
    }

    /// Open the confirm dialog for a destructive action
    pub fn request_confirmation(&self, action: PendingAction) {
        let mut accepted = false;
        self.confirm.update(|state| accepted = state.request(action));
        if !accepted {
            self.notifications.warning("Önceki işlem devam ediyor, lütfen bekleyin");
        }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
