//! Today Cards State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store doubles
//! as the synchronizer's render target.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use today_cards_core::{CardContainer, Node, Notice, SyncState};

#[derive(Clone, Debug, Default, Store)]
pub struct TodayState {
    /// Nodes of the current cycle, in render order
    pub nodes: Vec<Node>,
    pub sync_state: SyncState,
    /// Result of the last card submission
    pub notice: Option<Notice>,
    /// Bumped per notice so an old timeout never hides a newer one
    pub notice_seq: u32,
}

pub type TodayStore = Store<TodayState>;

pub fn use_today_store() -> TodayStore {
    expect_context::<TodayStore>()
}

/// Container backed by the store's node list
#[derive(Clone, Copy)]
pub struct StoreContainer {
    store: TodayStore,
}

impl StoreContainer {
    pub fn new(store: TodayStore) -> Self {
        Self { store }
    }
}

impl CardContainer for StoreContainer {
    fn clear(&self) {
        self.store.nodes().write().clear();
    }

    fn append(&self, node: Node) {
        self.store.nodes().write().push(node);
    }

    fn show_state(&self, state: SyncState) {
        *self.store.sync_state().write() = state;
    }
}

// ========================
// Store Helper Functions
// ========================

/// Show a notice and hide it again after `timeout_ms`
pub fn store_show_notice(store: TodayStore, notice: Notice, timeout_ms: u32) {
    let seq = {
        let field = store.notice_seq();
        let mut seq = field.write();
        *seq += 1;
        *seq
    };
    *store.notice().write() = Some(notice);

    spawn_local(async move {
        TimeoutFuture::new(timeout_ms).await;
        if store.notice_seq().get_untracked() == seq {
            *store.notice().write() = None;
        }
    });
}

pub fn store_dismiss_notice(store: TodayStore) {
    *store.notice().write() = None;
}
