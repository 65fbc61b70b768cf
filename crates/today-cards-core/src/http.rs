//! HTTP Client
//!
//! Transport contract plus the typed API over the two backend routes.
//! No retries happen here; callers own the retry/fallback policy.

use async_trait::async_trait;
use log::debug;

use crate::config::ClientConfig;
use crate::error::{FetchError, FetchOutcome};
use crate::models::{Card, CardList, ErrorBody, NewCardBody, TodayCardsBody};

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Status code and body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Option<String>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: Some(body.into()),
        }
    }

    pub fn empty(status: u16) -> Self {
        Self { status, body: None }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// `details` of the backend error body, if it sent one
    fn error_details(&self) -> Option<String> {
        let body = self.body.as_deref()?;
        serde_json::from_str::<ErrorBody>(body).ok().map(|e| e.details)
    }
}

/// Raw request issuing. Implementations must report every transport failure
/// as `FetchError::Network` instead of swallowing it.
///
/// Browser futures are not `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait HttpTransport {
    /// GET with no body
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;

    /// POST `body` (already JSON text) with `JSON_CONTENT_TYPE`
    async fn post_json(&self, url: &str, body: String) -> Result<HttpResponse, FetchError>;
}

/// Typed access to the cards backend
#[derive(Debug, Clone)]
pub struct CardsApi<T> {
    transport: T,
    today_cards_url: String,
    new_card_url: String,
}

impl<T: HttpTransport> CardsApi<T> {
    pub fn new(transport: T, config: &ClientConfig) -> Self {
        Self {
            transport,
            today_cards_url: config.today_cards_url(),
            new_card_url: config.new_card_url(),
        }
    }

    /// `GET /today/cards`
    pub async fn today_cards(&self) -> FetchOutcome<CardList> {
        debug!("GET {}", self.today_cards_url);
        let response = self.transport.get(&self.today_cards_url).await?;
        decode_today_cards(response)
    }

    /// `POST /card`; resolves to the status code whenever the backend answered
    pub async fn create_card(&self, title: &str) -> FetchOutcome<u16> {
        let body = serde_json::to_string(&NewCardBody { title })
            .map_err(|e| FetchError::Encode(e.to_string()))?;
        debug!("POST {} {}", self.new_card_url, body);
        let response = self.transport.post_json(&self.new_card_url, body).await?;
        Ok(response.status)
    }
}

/// Classify a list response: non-2xx is an HTTP error, a 2xx without a
/// decodable `{ "cards": [...] }` body is malformed (never an empty list).
pub fn decode_today_cards(response: HttpResponse) -> FetchOutcome<CardList> {
    if !response.is_success() {
        return Err(FetchError::Http {
            status: response.status,
            details: response.error_details(),
        });
    }

    let body = response
        .body
        .filter(|b| !b.trim().is_empty())
        .ok_or_else(|| FetchError::Malformed(format!("empty body with status {}", response.status)))?;

    let parsed: TodayCardsBody =
        serde_json::from_str(&body).map_err(|e| FetchError::Malformed(e.to_string()))?;
    Ok(parsed.cards.into_iter().map(Card::from).collect())
}
