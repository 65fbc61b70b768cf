//! Local Cache Store
//!
//! One slot holding the last successfully fetched card list as JSON text.
//! Written on every successful fetch, read only when a fetch fails.

use crate::error::CacheError;
use crate::models::{Card, CardList, WireCard};

/// Injectable cache slot. Access is single-threaded, so a read always sees
/// the latest completed write.
pub trait CacheStore {
    /// Snapshot, or `None` when the slot is empty or unreadable
    fn read(&self) -> Option<CardList>;

    /// Overwrite the slot unconditionally
    fn write(&self, cards: &CardList) -> Result<(), CacheError>;
}

pub fn encode_snapshot(cards: &CardList) -> Result<String, CacheError> {
    serde_json::to_string(cards).map_err(|e| CacheError::Encode(e.to_string()))
}

/// Empty or undecodable text reads as an absent snapshot.
/// Snapshots made of bare titles are accepted too.
pub fn decode_snapshot(raw: &str) -> Option<CardList> {
    if raw.trim().is_empty() {
        return None;
    }
    let cards: Vec<WireCard> = serde_json::from_str(raw).ok()?;
    Some(cards.into_iter().map(Card::from).collect())
}
