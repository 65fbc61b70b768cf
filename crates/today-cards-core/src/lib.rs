//! Today Cards Core
//!
//! Target-independent logic of the today-cards client:
//! - models: cards and their wire shapes
//! - http: transport contract and the typed cards API
//! - cache: the single last-known-good snapshot slot
//! - render: card node-tree descriptions
//! - sync: the card list load/render/fallback state machine
//! - submit: new card creation

pub mod cache;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod render;
pub mod submit;
pub mod sync;

#[cfg(test)]
mod test_support;

pub use cache::{decode_snapshot, encode_snapshot, CacheStore};
pub use config::{ClientConfig, FallbackPolicy};
pub use error::{CacheError, FetchError, FetchOutcome};
pub use http::{CardsApi, HttpResponse, HttpTransport, JSON_CONTENT_TYPE};
pub use models::{Card, CardList};
pub use render::{render_card, render_error, Node, NodeTag};
pub use submit::{NewCardSubmitter, Notice, NoticeKind, SubmitOutcome};
pub use sync::{CardContainer, CardListSynchronizer, CardSource, CycleOutcome, SyncState, LOAD_ERROR_MESSAGE};
