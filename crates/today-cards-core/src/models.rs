//! Card Models
//!
//! Cards and the JSON shapes exchanged with the backend.

use serde::{Deserialize, Serialize};

/// One item for today. Identity is its position in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl Card {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
        }
    }

    pub fn with_description(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Cards in server response order
pub type CardList = Vec<Card>;

/// A card as it appears on the wire: the backend sends bare titles,
/// richer payloads (and cached snapshots) carry objects.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum WireCard {
    Title(String),
    Full {
        title: String,
        #[serde(default)]
        description: Option<String>,
    },
}

impl From<WireCard> for Card {
    fn from(wire: WireCard) -> Self {
        match wire {
            WireCard::Title(title) => Card::new(title),
            WireCard::Full { title, description } => Card {
                title,
                description: description.unwrap_or_default(),
            },
        }
    }
}

/// `GET /today/cards` response body
#[derive(Debug, Deserialize)]
pub(crate) struct TodayCardsBody {
    pub cards: Vec<WireCard>,
}

/// `POST /card` request body
#[derive(Debug, Serialize)]
pub(crate) struct NewCardBody<'a> {
    pub title: &'a str,
}

/// Error body the backend attaches to failed requests
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub details: String,
}
