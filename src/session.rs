//! Session Holder
//!
//! The client's cached copy of the signed-in user. Backed by a reactive
//! signal for the UI and by durable storage so it survives page reloads.
//! Used for UI gating only; the backend enforces authorization.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::error::ApiError;
use crate::models::{LoginRequest, RegisterRequest, User};

/// Durable storage key holding the JSON user record
pub const SESSION_KEY: &str = "currentUser";

/// Durable key-value slot for the serialized session
pub trait SessionStorage {
    fn load(&self) -> Option<String>;
    fn store(&self, value: &str) -> Result<(), String>;
    fn remove(&self);
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStorage for BrowserStorage {
    fn load(&self) -> Option<String> {
        Self::local_storage()?.get_item(SESSION_KEY).ok().flatten()
    }

    fn store(&self, value: &str) -> Result<(), String> {
        let storage = Self::local_storage().ok_or_else(|| "localStorage unavailable".to_string())?;
        storage
            .set_item(SESSION_KEY, value)
            .map_err(|e| format!("localStorage write failed: {:?}", e))
    }

    fn remove(&self) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}

/// In-process storage, for tests and non-browser hosts
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStorage {
    pub fn with_value(value: &str) -> Self {
        Self { slot: Rc::new(RefCell::new(Some(value.to_string()))) }
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn store(&self, value: &str) -> Result<(), String> {
        *self.slot.borrow_mut() = Some(value.to_string());
        Ok(())
    }

    fn remove(&self) {
        *self.slot.borrow_mut() = None;
    }
}

/// Remote authentication calls
pub trait AuthBackend {
    async fn login(&self, request: &LoginRequest) -> Result<User, ApiError>;
    async fn register(&self, request: &RegisterRequest) -> Result<User, ApiError>;
}

/// Current user plus the storage it is persisted in
#[derive(Debug, Clone, Copy)]
pub struct Session<S> {
    user: RwSignal<Option<User>>,
    storage: S,
}

impl<S: SessionStorage + Clone> Session<S> {
    /// Build the session, restoring a previously stored user if there is one.
    /// Unreadable stored values are dropped.
    pub fn rehydrate(storage: S) -> Self {
        let restored = storage.load().and_then(|raw| match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("discarding unreadable stored session: {}", e);
                storage.remove();
                None
            }
        });

        if let Some(user) = &restored {
            log::info!("restored session for user {}", user.user_id);
        }

        Self { user: RwSignal::new(restored), storage }
    }

    /// Last known user; no network call
    pub fn current_user(&self) -> Option<User> {
        self.user.get()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.with(|u| u.is_some())
    }

    pub fn is_admin(&self) -> bool {
        self.user.with(|u| u.as_ref().is_some_and(User::is_admin))
    }

    /// Read-only view for components
    pub fn watch(&self) -> ReadSignal<Option<User>> {
        self.user.read_only()
    }

    /// Authenticate and, on success, persist and publish the returned user.
    /// On failure the session is left as it was.
    pub async fn login<B: AuthBackend>(&self, backend: &B, request: &LoginRequest) -> Result<User, ApiError> {
        match backend.login(request).await {
            Ok(user) => {
                self.establish(user.clone());
                log::info!("user {} logged in as {:?}", user.user_id, user.role);
                Ok(user)
            }
            Err(e) => {
                log::warn!("login failed: {}", e);
                Err(e)
            }
        }
    }

    /// Create an account. Does not sign in.
    pub async fn register<B: AuthBackend>(&self, backend: &B, request: &RegisterRequest) -> Result<User, ApiError> {
        let user = backend.register(request).await?;
        log::info!("registered user {}", user.user_id);
        Ok(user)
    }

    /// Forget the session, unconditionally
    pub fn logout(&self) {
        self.storage.remove();
        self.user.set(None);
        log::info!("logged out");
    }

    fn establish(&self, user: User) {
        match serde_json::to_string(&user) {
            Ok(raw) => {
                if let Err(e) = self.storage.store(&raw) {
                    log::warn!("session not persisted: {}", e);
                }
            }
            Err(e) => log::warn!("session not serialized: {}", e),
        }
        self.user.set(Some(user));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use std::cell::Cell;

    fn user(id: u32, role: Role) -> User {
        User { user_id: id, name: "Deniz".to_string(), email: "deniz@example.com".to_string(), role }
    }

    struct FakeAuth {
        result: Result<User, ApiError>,
        calls: Cell<u32>,
    }

    impl FakeAuth {
        fn returning(result: Result<User, ApiError>) -> Self {
            Self { result, calls: Cell::new(0) }
        }
    }

    impl AuthBackend for FakeAuth {
        async fn login(&self, _request: &LoginRequest) -> Result<User, ApiError> {
            self.calls.set(self.calls.get() + 1);
            self.result.clone()
        }

        async fn register(&self, _request: &RegisterRequest) -> Result<User, ApiError> {
            self.calls.set(self.calls.get() + 1);
            self.result.clone()
        }
    }

    fn credentials() -> LoginRequest {
        LoginRequest { email: "deniz@example.com".to_string(), password: "secret".to_string() }
    }

    #[tokio::test]
    async fn test_login_stores_and_publishes_user() {
        let storage = MemoryStorage::default();
        let session = Session::rehydrate(storage.clone());
        let admin = user(1, Role::Admin);
        let backend = FakeAuth::returning(Ok(admin.clone()));

        let returned = session.login(&backend, &credentials()).await.unwrap();

        assert_eq!(returned, admin);
        assert_eq!(session.current_user(), Some(admin.clone()));
        assert!(session.is_logged_in());
        assert!(session.is_admin());
        let stored: User = serde_json::from_str(&storage.load().unwrap()).unwrap();
        assert_eq!(stored, admin);
    }

    #[tokio::test]
    async fn test_regular_user_is_not_admin() {
        let session = Session::rehydrate(MemoryStorage::default());
        let backend = FakeAuth::returning(Ok(user(2, Role::User)));

        session.login(&backend, &credentials()).await.unwrap();

        assert!(session.is_logged_in());
        assert!(!session.is_admin());
    }

    #[tokio::test]
    async fn test_failed_login_leaves_session_untouched() {
        let storage = MemoryStorage::default();
        let session = Session::rehydrate(storage.clone());
        let backend = FakeAuth::returning(Err(ApiError::Status { status: 401, message: None }));

        let result = session.login(&backend, &credentials()).await;

        assert!(result.is_err());
        assert_eq!(backend.calls.get(), 1);
        assert_eq!(session.current_user(), None);
        assert_eq!(storage.load(), None);
    }

    #[tokio::test]
    async fn test_failed_login_keeps_previous_user() {
        let previous = user(5, Role::User);
        let storage = MemoryStorage::with_value(&serde_json::to_string(&previous).unwrap());
        let session = Session::rehydrate(storage);
        let backend = FakeAuth::returning(Err(ApiError::Network("offline".to_string())));

        let _ = session.login(&backend, &credentials()).await;

        assert_eq!(session.current_user(), Some(previous));
    }

    #[tokio::test]
    async fn test_logout_clears_storage_and_state() {
        let storage = MemoryStorage::default();
        let session = Session::rehydrate(storage.clone());
        session.login(&FakeAuth::returning(Ok(user(1, Role::Admin))), &credentials()).await.unwrap();

        session.logout();

        assert_eq!(session.current_user(), None);
        assert!(!session.is_admin());
        assert_eq!(storage.load(), None);

        // Logging out twice is fine
        session.logout();
        assert!(!session.is_logged_in());
    }

    #[tokio::test]
    async fn test_register_does_not_sign_in() {
        let storage = MemoryStorage::default();
        let session = Session::rehydrate(storage.clone());
        let backend = FakeAuth::returning(Ok(user(9, Role::User)));
        let request = RegisterRequest {
            name: "Deniz".to_string(),
            email: "deniz@example.com".to_string(),
            password: "secret".to_string(),
            role: Role::User,
        };

        let created = session.register(&backend, &request).await.unwrap();

        assert_eq!(created.user_id, 9);
        assert_eq!(session.current_user(), None);
        assert_eq!(storage.load(), None);
    }

    #[test]
    fn test_rehydrate_restores_stored_user() {
        let stored = user(3, Role::Admin);
        let storage = MemoryStorage::with_value(&serde_json::to_string(&stored).unwrap());

        let session = Session::rehydrate(storage);

        assert_eq!(session.current_user(), Some(stored));
        assert!(session.is_admin());
    }

    #[test]
    fn test_rehydrate_discards_garbage() {
        let storage = MemoryStorage::with_value("{not json");

        let session = Session::rehydrate(storage.clone());

        assert_eq!(session.current_user(), None);
        assert_eq!(storage.load(), None);
    }

    #[test]
    fn test_watch_reflects_logout() {
        let storage = MemoryStorage::with_value(&serde_json::to_string(&user(4, Role::User)).unwrap());
        let session = Session::rehydrate(storage);
        let watched = session.watch();

        assert!(watched.get_untracked().is_some());
        session.logout();
        assert!(watched.get_untracked().is_none());
    }
}
