//! Browser `localStorage` helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Persistence is best-effort: private browsing and disabled storage behave
//! like an empty store. Without the `hydrate` feature both helpers no-op.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Load the raw string stored under `key`.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn load_string(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().unwrap_or_default())?;
        storage.get_item(key).unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Store `value` under `key`, logging when storage refuses the write.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn save_string(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().unwrap_or_default()) else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("localStorage write for {key} failed: {err:?}");
        }
    }
}
