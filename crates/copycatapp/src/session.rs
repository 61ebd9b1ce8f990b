//! # Edit Sessions
//!
//! Edit mode buffers text changes and applies them as one unit on save, or drops
//! them on cancel.
//!
//! ```text
//!            open                 commit
//!  Viewing ─────────▶ Editing ─────────────▶ Viewing   (texts written, store saved)
//!                        │
//!                        └──────────────────▶ Viewing   (buffer dropped)
//!                             cancel
//! ```
//!
//! ## What Is Buffered
//!
//! Only text. Reordering while a session is open (`move_up`, `move_down`,
//! `switch_column`) goes straight to the store and is saved immediately; neither
//! commit nor cancel touches positions. Buffered texts are matched back to cards
//! by id, so a card moved during the session still receives its edit.
//!
//! ## Lifetime
//!
//! A session is a plain value that does not borrow the store, which leaves the
//! store free for reorders while it is open. [`EditSession::commit`] and
//! [`EditSession::cancel`] take `self`, so a session cannot be used after it ends.
//! Opening a second session while one is active is the caller's problem: the core
//! does not track edit mode.

use crate::commands::{self, CmdResult};
use crate::model::CardId;
use crate::store::{CardStore, StorageBackend};
use log::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    /// Buffered text per card, in the display order at open time.
    entries: Vec<(CardId, String)>,
}

impl EditSession {
    /// Snapshots the current text of every card. Does not touch the store.
    pub fn open<B: StorageBackend>(store: &CardStore<B>) -> Self {
        let entries: Vec<(CardId, String)> =
            store.cards().map(|c| (c.id, c.text.clone())).collect();
        debug!("Edit session opened with {} cards", entries.len());
        Self { entries }
    }

    /// Replaces the buffered text of a card.
    /// Returns false, and buffers nothing, when the card was not in the snapshot.
    pub fn set_buffered_text(&mut self, id: CardId, text: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|(entry_id, _)| *entry_id == id) {
            Some((_, buffered)) => {
                *buffered = text.into();
                true
            }
            None => false,
        }
    }

    pub fn buffered_text(&self, id: CardId) -> Option<&str> {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, text)| text.as_str())
    }

    /// Buffered entries in snapshot order.
    pub fn entries(&self) -> impl Iterator<Item = (CardId, &str)> {
        self.entries.iter().map(|(id, text)| (*id, text.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of buffered texts that differ from what the store currently holds.
    /// Cards that no longer exist are not counted.
    pub fn pending_changes<B: StorageBackend>(&self, store: &CardStore<B>) -> usize {
        self.entries
            .iter()
            .filter(|(id, text)| store.card(*id).is_some_and(|c| &c.text != text))
            .count()
    }

    /// Writes every buffered text into its card, if the card still exists, and saves.
    pub fn commit<B: StorageBackend>(self, store: &mut CardStore<B>) -> CmdResult {
        debug!("Committing edit session ({} entries)", self.entries.len());
        commands::edit::run(store, self.entries)
    }

    /// Drops the buffer. The store is left as it is.
    pub fn cancel(self) {
        debug!("Edit session cancelled ({} entries dropped)", self.entries.len());
    }
}
