//! # Command Layer
//!
//! This module contains the **core business logic** of copycat. Each operation
//! lives in its own submodule as a plain function over a [`CardStore`].
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Enforce the column invariants (every card in exactly one place)
//! - Decide whether an operation changed anything, and persist only then
//! - Return a structured [`CmdResult`] describing what happened
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: no stdout, stderr, colors or prompts
//! - **Selector parsing**: that is the API facade's job
//! - **Fail on stale ids**: an id that is no longer in the store is a no-op,
//!   not an error. The UI may hold references to cards that are already gone.
//!
//! ## Persistence Failures
//!
//! A failed save never undoes the in-memory change. It is logged, recorded as
//! [`SaveStatus::Failed`] and turned into a warning message. The next mutating
//! command tries to save again.
//!
//! ## Command Modules
//!
//! - [`add`]: Create a card, auto-balanced or in a chosen column
//! - [`delete`]: Remove a card
//! - [`reorder`]: Move a card up or down within its column
//! - [`switch`]: Move a card to the top of the other column
//! - [`edit`]: Apply a committed edit session

use crate::index::{CardIndex, DisplayCard};
use crate::model::CardId;
use crate::store::{CardStore, StorageBackend};
use log::error;
use serde::Serialize;

pub mod add;
pub mod delete;
pub mod edit;
pub mod reorder;
pub mod switch;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Whether an operation wrote the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SaveStatus {
    /// Nothing changed, nothing was written.
    #[default]
    NotNeeded,
    Saved,
    /// The change stands in memory but is not on disk.
    Failed,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Cards touched by the operation, with their post-operation index.
    pub affected_cards: Vec<DisplayCard>,
    pub messages: Vec<CmdMessage>,
    pub save: SaveStatus,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    /// True when the operation changed the collection.
    pub fn changed(&self) -> bool {
        self.save != SaveStatus::NotNeeded
    }

    /// Id of the first affected card. For `add` this is the new card.
    pub fn card_id(&self) -> Option<CardId> {
        self.affected_cards.first().map(|dc| dc.card.id)
    }

    /// Merges the outcome of a follow-up operation into this one.
    pub fn absorb(&mut self, other: CmdResult) {
        self.affected_cards.extend(other.affected_cards);
        self.messages.extend(other.messages);
        self.save = match (self.save, other.save) {
            (SaveStatus::Failed, _) | (_, SaveStatus::Failed) => SaveStatus::Failed,
            (SaveStatus::Saved, _) | (_, SaveStatus::Saved) => SaveStatus::Saved,
            _ => SaveStatus::NotNeeded,
        };
    }
}

/// Writes the store and records the outcome on `result`.
pub(crate) fn persist<B: StorageBackend>(store: &CardStore<B>, result: &mut CmdResult) {
    match store.save() {
        Ok(()) => result.save = SaveStatus::Saved,
        Err(e) => {
            error!("Error saving data to {}: {}", store.location().display(), e);
            result.save = SaveStatus::Failed;
            result.add_message(CmdMessage::warning(format!(
                "Changes kept in memory but not saved: {}",
                e
            )));
        }
    }
}

/// Builds the display entry for a card that is known to be in the store.
pub(crate) fn display_card<B: StorageBackend>(
    store: &CardStore<B>,
    id: CardId,
) -> Option<DisplayCard> {
    let position = store.find(id)?;
    let card = store.card(id)?.clone();
    Some(DisplayCard::new(card, CardIndex::from(position)))
}
