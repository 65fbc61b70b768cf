//! Card List Synchronizer
//!
//! Drives one container through `Idle -> Loading -> {Rendered, Error}`.
//! Every cycle clears the container, fetches the list, and either caches and
//! renders it or falls back to the cached snapshot / an error node. The only
//! way back to `Loading` is an explicit update.
//!
//! Cycles may overlap when updates are triggered quickly. Each cycle takes a
//! token from a monotonically increasing counter; a completion whose token is
//! no longer the latest is dropped without touching the cache or container.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use log::{debug, info, warn};

use crate::cache::CacheStore;
use crate::config::{ClientConfig, FallbackPolicy};
use crate::error::{FetchError, FetchOutcome};
use crate::http::{CardsApi, HttpTransport};
use crate::models::CardList;
use crate::render::{render_card, render_error, Node};

pub const LOAD_ERROR_MESSAGE: &str = "Error! Cards for today were not loaded...";

/// Where the rendered cards came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSource {
    Network,
    Cache,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncState {
    #[default]
    Idle,
    Loading,
    Rendered { source: CardSource, cards: usize },
    Error,
}

impl SyncState {
    /// Short hint shown above the list, if the state calls for one.
    /// Cached cards may follow any failure, so the hint names no cause.
    pub fn status_hint(&self) -> Option<&'static str> {
        match self {
            SyncState::Loading => Some("Loading cards for today..."),
            SyncState::Rendered { source: CardSource::Cache, .. } => Some("Showing saved cards."),
            _ => None,
        }
    }
}

/// Result of one `load` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// This cycle was the latest and its result is on screen
    Applied(SyncState),
    /// A newer cycle started while this one was in flight
    Superseded,
}

/// Target the synchronizer renders into
pub trait CardContainer {
    /// Detach every node of the previous cycle; no-op when already empty
    fn clear(&self);

    fn append(&self, node: Node);

    /// Notified on every state transition
    fn show_state(&self, _state: SyncState) {}
}

pub struct CardListSynchronizer<T, S, C> {
    api: CardsApi<T>,
    cache: S,
    container: C,
    fallback: FallbackPolicy,
    placeholder: String,
    cycle: AtomicU64,
    state: Mutex<SyncState>,
}

impl<T, S, C> CardListSynchronizer<T, S, C>
where
    T: HttpTransport,
    S: CacheStore,
    C: CardContainer,
{
    pub fn new(api: CardsApi<T>, cache: S, container: C, config: &ClientConfig) -> Self {
        Self {
            api,
            cache,
            container,
            fallback: config.fallback,
            placeholder: config.description_placeholder.clone(),
            cycle: AtomicU64::new(0),
            state: Mutex::new(SyncState::Idle),
        }
    }

    pub fn state(&self) -> SyncState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run one full cycle: clear, fetch, then render or fall back
    pub async fn load(&self) -> CycleOutcome {
        let cycle = self.begin_cycle();
        let outcome = self.api.today_cards().await;

        if !self.is_current(cycle) {
            debug!("cycle {} superseded, dropping its result", cycle);
            return CycleOutcome::Superseded;
        }

        let state = self.resolve(outcome);
        self.set_state(state);
        CycleOutcome::Applied(state)
    }

    /// User-triggered refresh
    pub async fn update(&self) -> CycleOutcome {
        info!("update of today cards requested");
        self.load().await
    }

    fn begin_cycle(&self) -> u64 {
        let cycle = self.cycle.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("starting cards cycle {}", cycle);
        self.container.clear();
        self.set_state(SyncState::Loading);
        cycle
    }

    fn is_current(&self, cycle: u64) -> bool {
        self.cycle.load(Ordering::SeqCst) == cycle
    }

    fn resolve(&self, outcome: FetchOutcome<CardList>) -> SyncState {
        match outcome {
            Ok(cards) => {
                if let Err(e) = self.cache.write(&cards) {
                    warn!("could not cache today cards: {}", e);
                }
                self.render(&cards);
                info!("rendered {} cards for today", cards.len());
                SyncState::Rendered { source: CardSource::Network, cards: cards.len() }
            }
            Err(err) => self.fall_back(err),
        }
    }

    fn fall_back(&self, err: FetchError) -> SyncState {
        warn!("loading today cards failed: {}", err);

        if self.fallback.uses_cache(&err) {
            if let Some(cached) = self.cache.read().filter(|c| !c.is_empty()) {
                info!("showing {} cached cards", cached.len());
                self.render(&cached);
                return SyncState::Rendered { source: CardSource::Cache, cards: cached.len() };
            }
            debug!("no cached cards to fall back to");
        }

        self.container.append(render_error(LOAD_ERROR_MESSAGE));
        SyncState::Error
    }

    fn render(&self, cards: &CardList) {
        for card in cards {
            self.container.append(render_card(card, &self.placeholder));
        }
    }

    fn set_state(&self, state: SyncState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = state;
        self.container.show_state(state);
    }
}
