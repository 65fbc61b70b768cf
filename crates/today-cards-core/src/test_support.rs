//! Test Fakes
//!
//! In-memory stand-ins for the transport, cache slot and container.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::cache::{decode_snapshot, encode_snapshot, CacheStore};
use crate::error::{CacheError, FetchError};
use crate::http::{HttpResponse, HttpTransport};
use crate::models::CardList;
use crate::render::Node;
use crate::sync::{CardContainer, SyncState};

type Reply = Result<HttpResponse, FetchError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub body: Option<String>,
}

/// Answers requests from a queue, in order
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    replies: Rc<RefCell<VecDeque<Reply>>>,
    requests: Rc<RefCell<Vec<RecordedRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, reply: Reply) {
        self.replies.borrow_mut().push_back(reply);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }

    fn answer(&self, request: RecordedRequest) -> Reply {
        self.requests.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Network("no scripted reply".into())))
    }
}

#[async_trait(?Send)]
impl HttpTransport for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        self.answer(RecordedRequest { method: "GET", url: url.to_string(), body: None })
    }

    async fn post_json(&self, url: &str, body: String) -> Result<HttpResponse, FetchError> {
        self.answer(RecordedRequest { method: "POST", url: url.to_string(), body: Some(body) })
    }
}

/// Each request waits until the test resolves its channel, so completions
/// can be ordered independently of initiation.
#[derive(Clone, Default)]
pub struct ChannelTransport {
    pending: Rc<RefCell<VecDeque<oneshot::Receiver<Reply>>>>,
}

impl ChannelTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a request slot; the returned sender resolves it
    pub fn expect_request(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.pending.borrow_mut().push_back(rx);
        tx
    }

    async fn wait(&self) -> Reply {
        let next = self.pending.borrow_mut().pop_front();
        match next {
            Some(rx) => rx.await.unwrap_or_else(|_| Err(FetchError::Network("request dropped".into()))),
            None => Err(FetchError::Network("unexpected request".into())),
        }
    }
}

#[async_trait(?Send)]
impl HttpTransport for ChannelTransport {
    async fn get(&self, _url: &str) -> Result<HttpResponse, FetchError> {
        self.wait().await
    }

    async fn post_json(&self, _url: &str, _body: String) -> Result<HttpResponse, FetchError> {
        self.wait().await
    }
}

/// Cache slot kept as text, like browser storage
#[derive(Clone, Default)]
pub struct MemoryCache {
    raw: Rc<RefCell<Option<String>>>,
    writes: Rc<RefCell<usize>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(cards: &CardList) -> Self {
        let cache = Self::new();
        *cache.raw.borrow_mut() = encode_snapshot(cards).ok();
        cache
    }

    pub fn with_raw(raw: &str) -> Self {
        let cache = Self::new();
        *cache.raw.borrow_mut() = Some(raw.to_string());
        cache
    }

    pub fn writes(&self) -> usize {
        *self.writes.borrow()
    }
}

impl CacheStore for MemoryCache {
    fn read(&self) -> Option<CardList> {
        self.raw.borrow().as_deref().and_then(decode_snapshot)
    }

    fn write(&self, cards: &CardList) -> Result<(), CacheError> {
        *self.raw.borrow_mut() = Some(encode_snapshot(cards)?);
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}

/// Container that records what was appended
#[derive(Clone, Default)]
pub struct RecordingContainer {
    nodes: Rc<RefCell<Vec<Node>>>,
    states: Rc<RefCell<Vec<SyncState>>>,
    clears: Rc<RefCell<usize>>,
}

impl RecordingContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> Vec<Node> {
        self.nodes.borrow().clone()
    }

    pub fn states(&self) -> Vec<SyncState> {
        self.states.borrow().clone()
    }

    pub fn clears(&self) -> usize {
        *self.clears.borrow()
    }
}

impl CardContainer for RecordingContainer {
    fn clear(&self) {
        self.nodes.borrow_mut().clear();
        *self.clears.borrow_mut() += 1;
    }

    fn append(&self, node: Node) {
        self.nodes.borrow_mut().push(node);
    }

    fn show_state(&self, state: SyncState) {
        self.states.borrow_mut().push(state);
    }
}

/// Cache slot whose writes always fail
#[derive(Clone, Default)]
pub struct FailingCache;

impl CacheStore for FailingCache {
    fn read(&self) -> Option<CardList> {
        None
    }

    fn write(&self, _cards: &CardList) -> Result<(), CacheError> {
        Err(CacheError::Unavailable)
    }
}

/// Records the cache contents seen at each append
#[derive(Clone)]
pub struct SnapshotContainer {
    inner: RecordingContainer,
    cache: MemoryCache,
    seen: Rc<RefCell<Vec<Option<CardList>>>>,
}

impl SnapshotContainer {
    pub fn new(cache: MemoryCache) -> Self {
        Self {
            inner: RecordingContainer::new(),
            cache,
            seen: Rc::default(),
        }
    }

    /// Snapshot read at each `append`, in order
    pub fn seen(&self) -> Vec<Option<CardList>> {
        self.seen.borrow().clone()
    }
}

impl CardContainer for SnapshotContainer {
    fn clear(&self) {
        self.inner.clear();
    }

    fn append(&self, node: Node) {
        self.seen.borrow_mut().push(self.cache.read());
        self.inner.append(node);
    }
}
