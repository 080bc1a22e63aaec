//! Application state management

use std::sync::{Arc, Mutex};

use huddle_core::{Store, UserProfile};
use uuid::Uuid;

/// Main application state: the store plus the signed-in profile.
///
/// The store sits behind a mutex, so every participation operation runs
/// serialized; that is what keeps spots-left bookkeeping correct when
/// UI callbacks fire from different threads.
pub struct AppState {
    pub store: Arc<Mutex<Store>>,
    current_user: Arc<Mutex<Option<UserProfile>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: Arc::new(Mutex::new(Store::new())),
            current_user: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_current_user(&self, user: Option<UserProfile>) {
        *self.current_user.lock().unwrap() = user;
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.current_user.lock().unwrap().clone()
    }

    pub fn current_user_id(&self) -> Option<Uuid> {
        self.current_user.lock().unwrap().as_ref().map(|u| u.id)
    }

    /// Run a closure against the locked store
    pub fn with_store<R>(&self, f: impl FnOnce(&mut Store) -> R) -> R {
        let mut store = self.store.lock().unwrap();
        f(&mut store)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
