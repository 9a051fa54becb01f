//! Browser-local persistence for the site's preference flags.
//!
//! Values are stored as JSON booleans (`true`/`false`), so anything else
//! reading the same keys can parse them with a stock JSON parser.
//!
//! Off the browser the backend is an in-process map, which keeps the flag
//! logic exercisable by plain `cargo test`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// `window.localStorage` is missing or blocked (private mode, embed policy).
    #[error("browser storage unavailable")]
    Unavailable,
    /// The backend refused the write (quota, policy).
    #[error("storage write rejected for key {key:?}")]
    WriteRejected { key: String },
}

/// Read a boolean flag. Absent keys and unparseable payloads are `None`.
pub fn read_flag(key: &str) -> Result<Option<bool>, StorageError> {
    Ok(read_raw(key)?.and_then(|raw| serde_json::from_str::<bool>(&raw).ok()))
}

/// Write a boolean flag.
pub fn write_flag(key: &str, value: bool) -> Result<(), StorageError> {
    write_raw(key, if value { "true" } else { "false" })
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg(target_arch = "wasm32")]
fn read_raw(key: &str) -> Result<Option<String>, StorageError> {
    Ok(local_storage()?.get_item(key).ok().flatten())
}

#[cfg(target_arch = "wasm32")]
fn write_raw(key: &str, payload: &str) -> Result<(), StorageError> {
    local_storage()?
        .set_item(key, payload)
        .map_err(|_| StorageError::WriteRejected { key: key.to_string() })
}

#[cfg(not(target_arch = "wasm32"))]
fn read_raw(key: &str) -> Result<Option<String>, StorageError> {
    Ok(native::read(key))
}

#[cfg(not(target_arch = "wasm32"))]
fn write_raw(key: &str, payload: &str) -> Result<(), StorageError> {
    native::write(key, payload);
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        // Thread-local so parallel tests cannot see each other's flags.
        static FLAGS: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub(super) fn read(key: &str) -> Option<String> {
        FLAGS.with(|flags| flags.borrow().get(key).cloned())
    }

    pub(super) fn write(key: &str, payload: &str) {
        FLAGS.with(|flags| {
            flags.borrow_mut().insert(key.to_string(), payload.to_string());
        });
    }
}
