//! LocalStorage access

use web_sys::Storage;

use crate::persistence::KeyValueStore;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

/// Returns false if storage is unavailable or the write was rejected
pub fn set(key: &str, value: &str) -> bool {
    match local_storage() {
        Some(storage) => storage.set_item(key, value).is_ok(),
        None => false,
    }
}

pub fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// `KeyValueStore` backed by `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> bool {
        set(key, value)
    }

    fn remove(&mut self, key: &str) {
        remove(key)
    }
}
