//! New Card Submitter
//!
//! Posts a new card and turns the result into a user notice. It does not
//! refresh the list or the cache; the integration layer decides that.

use log::{info, warn};

use crate::config::ClientConfig;
use crate::error::FetchError;
use crate::http::{CardsApi, HttpTransport};

pub const CREATED_MESSAGE: &str = "New card was created!";
pub const NOT_CREATED_MESSAGE: &str = "Error! New card was not created...";
pub const EMPTY_TITLE_MESSAGE: &str = "Error! New card was not created: title is empty.";

const CREATED_STATUS: u16 = 201;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    /// Backend answered with something other than 201
    Rejected { status: u16 },
    /// Request never produced a status
    Failed(FetchError),
    /// Blank title caught locally; nothing was sent
    InvalidTitle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// Message shown to the user after a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Failure, message: message.into() }
    }
}

impl SubmitOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, SubmitOutcome::Created)
    }

    pub fn notice(&self) -> Notice {
        match self {
            SubmitOutcome::Created => Notice::success(CREATED_MESSAGE),
            SubmitOutcome::InvalidTitle => Notice::failure(EMPTY_TITLE_MESSAGE),
            SubmitOutcome::Rejected { .. } | SubmitOutcome::Failed(_) => Notice::failure(NOT_CREATED_MESSAGE),
        }
    }
}

pub struct NewCardSubmitter<T> {
    api: CardsApi<T>,
    validate_titles: bool,
}

impl<T: HttpTransport> NewCardSubmitter<T> {
    pub fn new(api: CardsApi<T>, config: &ClientConfig) -> Self {
        Self {
            api,
            validate_titles: config.validate_titles,
        }
    }

    /// Post `title` as typed. With validation on, blank titles are refused
    /// locally using the backend's own rule (non-blank after trimming).
    pub async fn submit(&self, title: &str) -> SubmitOutcome {
        if self.validate_titles && title.trim().is_empty() {
            warn!("refusing to submit a card with a blank title");
            return SubmitOutcome::InvalidTitle;
        }

        match self.api.create_card(title).await {
            Ok(CREATED_STATUS) => {
                info!("card {:?} created", title);
                SubmitOutcome::Created
            }
            Ok(status) => {
                warn!("card {:?} was not created, backend answered {}", title, status);
                SubmitOutcome::Rejected { status }
            }
            Err(e) => {
                warn!("card {:?} was not created: {}", title, e);
                SubmitOutcome::Failed(e)
            }
        }
    }
}
