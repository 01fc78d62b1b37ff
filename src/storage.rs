use std::cell::RefCell;
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorageError;
use crate::types::{Plant, User};

const USER_KEY: &str = "leaf_user";
const PLANTS_KEY: &str = "leaf_plants";

/// Minimal string key-value store. `window.localStorage` in the browser,
/// `MemoryStore` when that is unavailable and in tests.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &'static str, value: &str) -> Result<(), StorageError>;
}

pub fn get_local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    pub fn open() -> Option<Self> {
        get_local_storage().map(|storage| Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn read(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn write(&self, key: &'static str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|_| StorageError::Write { key })
    }
}

#[derive(Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn write(&self, key: &'static str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store used by the page: local storage when the browser offers it,
/// otherwise an in-memory map that lasts until the page unloads.
pub enum PageStore {
    Local(LocalStore),
    Memory(MemoryStore),
}

impl PageStore {
    pub fn open() -> Self {
        match LocalStore::open() {
            Some(local) => PageStore::Local(local),
            None => {
                log::warn!("localStorage unavailable, changes will not survive a reload");
                PageStore::Memory(MemoryStore::default())
            }
        }
    }
}

impl KeyValueStore for PageStore {
    fn read(&self, key: &str) -> Option<String> {
        match self {
            PageStore::Local(s) => s.read(key),
            PageStore::Memory(s) => s.read(key),
        }
    }

    fn write(&self, key: &'static str, value: &str) -> Result<(), StorageError> {
        match self {
            PageStore::Local(s) => s.write(key, value),
            PageStore::Memory(s) => s.write(key, value),
        }
    }
}

// Anything unreadable counts as absent.
fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let json = store.read(key)?;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("ignoring malformed '{}' record: {}", key, e);
            None
        }
    }
}

fn save_json<T: Serialize + ?Sized>(
    store: &impl KeyValueStore,
    key: &'static str,
    value: &T,
) -> Result<(), StorageError> {
    let json =
        serde_json::to_string(value).map_err(|source| StorageError::Serialize { key, source })?;
    store.write(key, &json)
}

pub fn load_user(store: &impl KeyValueStore) -> User {
    load_json(store, USER_KEY).unwrap_or_default()
}

pub fn save_user(store: &impl KeyValueStore, user: &User) -> Result<(), StorageError> {
    save_json(store, USER_KEY, user)
}

pub fn load_plants(store: &impl KeyValueStore) -> Vec<Plant> {
    load_json(store, PLANTS_KEY).unwrap_or_default()
}

pub fn save_plants(store: &impl KeyValueStore, plants: &[Plant]) -> Result<(), StorageError> {
    save_json(store, PLANTS_KEY, plants)
}
