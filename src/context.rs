//! Application Context
//!
//! Wires the core collaborators together and shares them via Leptos Context.

use std::sync::Arc;

use leptos::prelude::*;
use today_cards_core::{CardListSynchronizer, CardsApi, ClientConfig, NewCardSubmitter};

use crate::api::GlooTransport;
use crate::storage::LocalStorageCache;
use crate::store::{StoreContainer, TodayStore};

pub type TodaySync = CardListSynchronizer<GlooTransport, LocalStorageCache, StoreContainer>;
pub type TodaySubmitter = NewCardSubmitter<GlooTransport>;

#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<ClientConfig>,
    pub sync: Arc<TodaySync>,
    pub submitter: Arc<TodaySubmitter>,
    /// Bumped on every user-requested update - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped on every user-requested update - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        config: ClientConfig,
        store: TodayStore,
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        let api = CardsApi::new(GlooTransport, &config);
        let cache = LocalStorageCache::new(config.cache_key.clone());
        let sync = CardListSynchronizer::new(api.clone(), cache, StoreContainer::new(store), &config);
        let submitter = NewCardSubmitter::new(api, &config);

        Self {
            config: Arc::new(config),
            sync: Arc::new(sync),
            submitter: Arc::new(submitter),
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Start a new cards cycle
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}
