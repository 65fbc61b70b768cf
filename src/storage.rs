//! Local Storage Cache
//!
//! Keeps the card snapshot in `window.localStorage` so it survives reloads.

use today_cards_core::{decode_snapshot, encode_snapshot, CacheError, CacheStore, CardList};

/// Slot addressed by key; storage is looked up on every access
#[derive(Debug, Clone)]
pub struct LocalStorageCache {
    key: String,
}

impl LocalStorageCache {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl CacheStore for LocalStorageCache {
    fn read(&self) -> Option<CardList> {
        let raw = local_storage()?.get_item(&self.key).ok().flatten()?;
        decode_snapshot(&raw)
    }

    fn write(&self, cards: &CardList) -> Result<(), CacheError> {
        let raw = encode_snapshot(cards)?;
        let storage = local_storage().ok_or(CacheError::Unavailable)?;
        storage
            .set_item(&self.key, &raw)
            .map_err(|e| CacheError::Write(format!("{:?}", e)))
    }
}
