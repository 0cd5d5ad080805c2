//! `window.localStorage` backed [`Store`]

use crate::persistence::{Store, StoreError};

/// Browser LocalStorage
///
/// Holds `None` when storage is blocked (private mode, sandboxed iframe);
/// every operation then reports [`StoreError::Unavailable`].
pub struct LocalStorage {
    inner: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let inner = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if inner.is_none() {
            log::warn!("LocalStorage unavailable - progress will not be saved");
        }
        Self { inner }
    }

    fn storage(&self) -> Result<&web_sys::Storage, StoreError> {
        self.inner.as_ref().ok_or(StoreError::Unavailable)
    }
}

impl Store for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(key)
            .map_err(|_| StoreError::Unavailable)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Rejected(format!("{e:?}")))
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.storage()?
            .remove_item(key)
            .map_err(|_| StoreError::Unavailable)
    }
}
