//! Client Configuration
//!
//! Fixed settings of the client. The backend base URL can only be changed
//! at build time through `TODAY_CARDS_API_BASE`.

use crate::error::FetchError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8081";
pub const TODAY_CARDS_PATH: &str = "/today/cards";
pub const NEW_CARD_PATH: &str = "/card";
pub const CACHE_KEY: &str = "todayCards";
pub const DESCRIPTION_PLACEHOLDER: &str = "Click to add description";

/// Which failed loads may fall back to the cached snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Only transport failures use the cache; HTTP and decoding errors show the error node
    #[default]
    NetworkFailureOnly,
    /// Every failure uses the cache when it holds cards
    AnyFailure,
}

impl FallbackPolicy {
    pub fn uses_cache(self, err: &FetchError) -> bool {
        match self {
            FallbackPolicy::NetworkFailureOnly => err.is_network(),
            FallbackPolicy::AnyFailure => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub today_cards_path: String,
    pub new_card_path: String,
    /// Name of the local storage slot holding the last fetched list
    pub cache_key: String,
    pub description_placeholder: String,
    pub fallback: FallbackPolicy,
    /// Reject blank titles before posting (off: titles pass through as typed)
    pub validate_titles: bool,
    /// Re-run the list cycle after a card was created
    pub refresh_after_create: bool,
    pub notice_timeout_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            today_cards_path: TODAY_CARDS_PATH.to_string(),
            new_card_path: NEW_CARD_PATH.to_string(),
            cache_key: CACHE_KEY.to_string(),
            description_placeholder: DESCRIPTION_PLACEHOLDER.to_string(),
            fallback: FallbackPolicy::default(),
            validate_titles: false,
            refresh_after_create: true,
            notice_timeout_ms: 4000,
        }
    }
}

impl ClientConfig {
    /// Defaults, with the base URL baked in at compile time when provided
    pub fn from_build_env() -> Self {
        let mut config = Self::default();
        if let Some(base) = option_env!("TODAY_CARDS_API_BASE").filter(|b| !b.trim().is_empty()) {
            config.base_url = base.trim().to_string();
        }
        config
    }

    pub fn today_cards_url(&self) -> String {
        join_url(&self.base_url, &self.today_cards_path)
    }

    pub fn new_card_url(&self) -> String {
        join_url(&self.base_url, &self.new_card_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_routes() {
        let config = ClientConfig::default();
        assert_eq!(config.today_cards_url(), "http://localhost:8081/today/cards");
        assert_eq!(config.new_card_url(), "http://localhost:8081/card");
        assert_eq!(config.cache_key, "todayCards");
        assert!(!config.validate_titles);
    }

    #[test]
    fn test_join_does_not_double_slashes() {
        let config = ClientConfig {
            base_url: "https://cards.example/api/".to_string(),
            today_cards_path: "today/cards".to_string(),
            ..ClientConfig::default()
        };
        assert_eq!(config.today_cards_url(), "https://cards.example/api/today/cards");
    }

    #[test]
    fn test_fallback_policy() {
        let network = FetchError::Network("refused".into());
        let http = FetchError::Http { status: 500, details: None };
        let malformed = FetchError::Malformed("no cards".into());

        assert!(FallbackPolicy::NetworkFailureOnly.uses_cache(&network));
        assert!(!FallbackPolicy::NetworkFailureOnly.uses_cache(&http));
        assert!(!FallbackPolicy::NetworkFailureOnly.uses_cache(&malformed));

        assert!(FallbackPolicy::AnyFailure.uses_cache(&http));
        assert!(FallbackPolicy::AnyFailure.uses_cache(&malformed));
    }
}
