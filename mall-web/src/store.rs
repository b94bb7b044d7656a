//! Session persistence under a fixed `localStorage` key.

use gloo::storage::{LocalStorage, Storage};
use mall_core::Session;
use std::cell::RefCell;
use std::rc::Rc;

/// Storage key for the single persisted session blob.
pub const SESSION_KEY: &str = "meridian.mall.session";

/// Load the persisted session. Absent or corrupt blobs yield the
/// logged-out session, never an error.
#[must_use]
pub fn load() -> Session {
    LocalStorage::get(SESSION_KEY).unwrap_or_default()
}

/// Persist the full session object.
pub fn save(session: &Session) {
    let _ = LocalStorage::set(SESSION_KEY, session);
}

/// Remove the persisted session.
pub fn clear() {
    LocalStorage::delete(SESSION_KEY);
}

/// Process-wide session handle. Every mutation replaces the session
/// wholesale and writes it through to storage, so memory and the persisted
/// blob never diverge.
#[derive(Clone, Default)]
pub struct SharedSession {
    inner: Rc<RefCell<Session>>,
}

impl SharedSession {
    /// Start from whatever the previous visit persisted.
    #[must_use]
    pub fn restore() -> Self {
        Self {
            inner: Rc::new(RefCell::new(load())),
        }
    }

    #[must_use]
    pub fn get(&self) -> Session {
        self.inner.borrow().clone()
    }

    /// Replace the session and persist the replacement.
    pub fn set(&self, session: Session) {
        save(&session);
        *self.inner.borrow_mut() = session;
    }

    /// Drop the credentials and the persisted blob.
    pub fn reset(&self) {
        clear();
        *self.inner.borrow_mut() = Session::default();
    }
}

impl PartialEq for SharedSession {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}
