//! Durable storage for the theme preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session controller only needs string get/set on one key, so the store
//! is a small trait. The browser implementation wraps `localStorage`; outside
//! a hydrated browser it reports `StoreError::Unavailable` and callers fall
//! back to defaults.

#[cfg(test)]
#[path = "theme_store_test.rs"]
mod theme_store_test;

/// Failure reaching or using the durable store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("durable store unavailable")]
    Unavailable,
    #[error("durable store read failed: {0}")]
    Read(String),
    #[error("durable store write failed: {0}")]
    Write(String),
}

/// String key-value store surviving page reloads.
pub trait ThemeStore {
    /// Read the value under `key`. `Ok(None)` means the key is absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the store cannot be reached or read.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the store cannot be reached or written.
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// `window.localStorage`, looked up on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserThemeStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    let window = web_sys::window().ok_or(StoreError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StoreError::Unavailable),
        Err(e) => Err(StoreError::Read(format!("{e:?}"))),
    }
}

impl ThemeStore for BrowserThemeStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).map_err(|e| StoreError::Read(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StoreError::Unavailable)
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StoreError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StoreError::Unavailable)
        }
    }
}

impl<S: ThemeStore + ?Sized> ThemeStore for &S {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).save(key, value)
    }
}
