//! Notification Center
//!
//! One toast slot shared by every page.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::NotificationConfig;
use crate::error::{ApiError, ClientError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
    Warning,
}

impl NotificationKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "notification-success",
            NotificationKind::Error => "notification-error",
            NotificationKind::Info => "notification-info",
            NotificationKind::Warning => "notification-warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Generation this toast was shown under
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
}

#[derive(Debug, Clone, Copy)]
pub struct NotificationCenter {
    current: RwSignal<Option<Notification>>,
    generation: RwSignal<u64>,
    durations: NotificationConfig,
}

impl NotificationCenter {
    pub fn new(durations: NotificationConfig) -> Self {
        Self {
            current: RwSignal::new(None),
            generation: RwSignal::new(0),
            durations,
        }
    }

    pub fn current(&self) -> ReadSignal<Option<Notification>> {
        self.current.read_only()
    }

    /// Replace the current toast. Returns its id; `duration_ms == 0` keeps it until closed.
    pub fn show(&self, message: impl Into<String>, kind: NotificationKind, duration_ms: u32) -> u64 {
        let id = self.publish(message.into(), kind);
        if duration_ms > 0 {
            let center = *self;
            spawn_local(async move {
                TimeoutFuture::new(duration_ms).await;
                center.dismiss(id);
            });
        }
        id
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.show(message, NotificationKind::Success, self.durations.success_ms)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.show(message, NotificationKind::Error, self.durations.error_ms)
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.show(message, NotificationKind::Info, self.durations.info_ms)
    }

    pub fn warning(&self, message: impl Into<String>) -> u64 {
        self.show(message, NotificationKind::Warning, self.durations.warning_ms)
    }

    /// Failure policy: backend message if any, else the fallback
    pub fn report(&self, error: &ApiError, fallback: &str) -> u64 {
        log::warn!("{}: {}", fallback, error);
        self.error(error.user_message(fallback))
    }

    pub fn report_client(&self, error: &ClientError, fallback: &str) -> u64 {
        log::warn!("{}: {}", fallback, error);
        self.error(error.user_message(fallback))
    }

    /// Hide the toast with this id, if it is still the one showing
    pub fn dismiss(&self, id: u64) {
        if self.current.with_untracked(|n| n.as_ref().is_some_and(|n| n.id == id)) {
            self.current.set(None);
        }
    }

    pub fn hide(&self) {
        self.current.set(None);
    }

    fn publish(&self, message: String, kind: NotificationKind) -> u64 {
        self.generation.update(|g| *g += 1);
        let id = self.generation.get_untracked();
        self.current.set(Some(Notification { id, message, kind }));
        id
    }
}
