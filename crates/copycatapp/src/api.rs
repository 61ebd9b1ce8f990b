//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every copycat operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (display selectors such as `a1` are resolved to ids)
//! - **Returns structured types** (`CmdResult`, or `Result<CmdResult>` when the
//!   input itself can be wrong)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or file formatting
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Ids and Selectors
//!
//! The id-based methods (`delete_card`, `move_up`, ...) are what a UI holding card
//! references calls; a stale id is a silent no-op. The selector-based methods
//! (`resolve`, `delete_cards`) serve the command line, where a selector pointing
//! past the end of a column is a user error and comes back as
//! [`CopyCatError::Api`].
//!
//! ## Generic Over StorageBackend
//!
//! `CopyCatApi<B: StorageBackend>` runs on `FsBackend` in production and on
//! `MemBackend` in tests.

use crate::commands;
use crate::error::{CopyCatError, Result};
use crate::index::{index_cards, CardIndex, DisplayCard};
use crate::model::{Card, CardId, CardPosition, Column, Placement};
use crate::session::EditSession;
use crate::store::{CardStore, StorageBackend};
use std::path::PathBuf;

/// The main API facade for copycat operations.
pub struct CopyCatApi<B: StorageBackend> {
    store: CardStore<B>,
}

impl<B: StorageBackend> CopyCatApi<B> {
    pub fn new(store: CardStore<B>) -> Self {
        Self { store }
    }

    /// Loads whatever the backend holds. See [`CardStore::load`].
    pub fn load(backend: B) -> Self {
        Self::new(CardStore::load(backend))
    }

    pub fn add_card(&mut self, text: impl Into<String>, placement: Placement) -> CmdResult {
        commands::add::run(&mut self.store, text.into(), placement)
    }

    pub fn delete_card(&mut self, id: CardId) -> CmdResult {
        commands::delete::run(&mut self.store, id)
    }

    pub fn move_up(&mut self, id: CardId) -> CmdResult {
        commands::reorder::move_up(&mut self.store, id)
    }

    pub fn move_down(&mut self, id: CardId) -> CmdResult {
        commands::reorder::move_down(&mut self.store, id)
    }

    pub fn switch_column(&mut self, id: CardId) -> CmdResult {
        commands::switch::run(&mut self.store, id)
    }

    /// Every card, left column first, each column top to bottom.
    pub fn all_cards(&self) -> Vec<&Card> {
        self.store.cards().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn column(&self, column: Column) -> &[Card] {
        self.store.column(column)
    }

    /// Both columns, for rendering.
    pub fn columns(&self) -> (&[Card], &[Card]) {
        (
            self.store.column(Column::Left),
            self.store.column(Column::Right),
        )
    }

    pub fn column_height(&self, column: Column) -> usize {
        self.store.column_height(column)
    }

    pub fn find(&self, id: CardId) -> Option<CardPosition> {
        self.store.find(id)
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.store.card(id)
    }

    /// Where the collection is persisted.
    pub fn location(&self) -> PathBuf {
        self.store.location()
    }

    /// Every card paired with its display selector.
    pub fn indexed_cards(&self) -> Vec<DisplayCard> {
        let (left, right) = self.columns();
        index_cards(left, right)
    }

    /// Resolves a display selector against the current layout.
    pub fn resolve(&self, index: &CardIndex) -> Result<CardId> {
        let column = self.store.column(index.column);
        index
            .position
            .checked_sub(1)
            .and_then(|offset| column.get(offset))
            .map(|card| card.id)
            .ok_or_else(|| CopyCatError::Api(format!("No card at {}", index)))
    }

    /// Parses and resolves a textual selector such as `a1`.
    pub fn resolve_str(&self, selector: &str) -> Result<CardId> {
        let index: CardIndex = selector.parse().map_err(CopyCatError::Api)?;
        self.resolve(&index)
    }

    /// Deletes the cards behind several selectors.
    ///
    /// All selectors are resolved against the layout as it was before the first
    /// deletion, so `delete a1 a2` removes the two cards the user saw there.
    /// Nothing is deleted if any selector is invalid.
    pub fn delete_cards<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let ids = self.resolve_all(selectors)?;
        let mut result = CmdResult::default();
        for id in ids {
            result.absorb(commands::delete::run(&mut self.store, id));
        }
        Ok(result)
    }

    fn resolve_all<I: AsRef<str>>(&self, selectors: &[I]) -> Result<Vec<CardId>> {
        let mut ids: Vec<CardId> = Vec::with_capacity(selectors.len());
        for selector in selectors {
            let id = self.resolve_str(selector.as_ref())?;
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Ok(ids)
    }

    /// Starts buffering text edits. See [`EditSession`].
    pub fn open_edit_session(&self) -> EditSession {
        EditSession::open(&self.store)
    }

    pub fn commit_edits(&mut self, session: EditSession) -> CmdResult {
        session.commit(&mut self.store)
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, SaveStatus};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use crate::test_utils::TestEnv;

    fn api_with(texts: &[&str]) -> CopyCatApi<MemBackend> {
        let mut api = CopyCatApi::load(MemBackend::new());
        for text in texts {
            api.add_card(*text, Placement::Auto);
        }
        api
    }

    fn texts(api: &CopyCatApi<MemBackend>, column: Column) -> Vec<&str> {
        api.column(column).iter().map(|c| c.text.as_str()).collect()
    }

    #[test]
    fn milk_and_mom_scenario() {
        let mut api = CopyCatApi::load(MemBackend::new());
        assert!(api.is_empty());

        let milk = api.add_card("buy milk", Placement::Auto).card_id().unwrap();
        let mom = api.add_card("call mom", Placement::Auto).card_id().unwrap();
        assert_eq!(api.find(milk).unwrap().column, Column::Left);
        assert_eq!(api.find(mom).unwrap().column, Column::Right);

        let result = api.switch_column(mom);
        assert_eq!(result.save, SaveStatus::Saved);
        assert_eq!(texts(&api, Column::Left), vec!["call mom", "buy milk"]);
        assert!(api.column(Column::Right).is_empty());
    }

    #[test]
    fn all_cards_holds_every_added_card_once() {
        let api = api_with(&["1", "2", "3", "4", "5"]);
        let all: Vec<&str> = api.all_cards().iter().map(|c| c.text.as_str()).collect();
        assert_eq!(all, vec!["1", "3", "5", "2", "4"]);
        assert_eq!(
            api.column_height(Column::Left) + api.column_height(Column::Right),
            5
        );
    }

    #[test]
    fn explicit_placement_ignores_balance() {
        let mut api = api_with(&[]);
        api.add_card("r1", Placement::Column(Column::Right));
        api.add_card("r2", Placement::Column(Column::Right));
        assert_eq!(texts(&api, Column::Right), vec!["r1", "r2"]);
        // Left is now shorter, so auto goes there.
        api.add_card("auto", Placement::Auto);
        assert_eq!(texts(&api, Column::Left), vec!["auto"]);
    }

    #[test]
    fn resolve_maps_selectors_to_ids() {
        let api = api_with(&["a", "b", "c"]);
        let id = api.resolve_str("A2").unwrap();
        assert_eq!(api.card(id).unwrap().text, "c");
        let id = api.resolve(&CardIndex::new(Column::Right, 1)).unwrap();
        assert_eq!(api.card(id).unwrap().text, "b");
    }

    #[test]
    fn resolve_rejects_out_of_range_and_malformed() {
        let api = api_with(&["a"]);
        let err = api.resolve_str("b4").unwrap_err();
        assert_eq!(err.to_string(), "Api Error: No card at b4");
        assert!(matches!(api.resolve_str("z9"), Err(CopyCatError::Api(_))));
        assert!(api.resolve(&CardIndex::new(Column::Left, 0)).is_err());
    }

    #[test]
    fn delete_cards_resolves_before_deleting() {
        // Left: a, c, e  Right: b, d
        let mut api = api_with(&["a", "b", "c", "d", "e"]);

        let result = api.delete_cards(&["a1", "a2"]).unwrap();

        assert_eq!(result.affected_cards.len(), 2);
        assert_eq!(result.save, SaveStatus::Saved);
        assert_eq!(texts(&api, Column::Left), vec!["e"]);
        assert_eq!(texts(&api, Column::Right), vec!["b", "d"]);
    }

    #[test]
    fn delete_cards_with_a_bad_selector_deletes_nothing() {
        let mut api = api_with(&["a", "b"]);
        assert!(api.delete_cards(&["a1", "a5"]).is_err());
        assert_eq!(api.all_cards().len(), 2);
    }

    #[test]
    fn delete_cards_ignores_repeated_selectors() {
        let mut api = api_with(&["a", "b"]);
        let result = api.delete_cards(&["a1", "A1"]).unwrap();
        assert_eq!(result.affected_cards.len(), 1);
        assert_eq!(api.all_cards().len(), 1);
    }

    #[test]
    fn indexed_cards_labels_both_columns() {
        let api = api_with(&["a", "b", "c"]);
        let labels: Vec<String> = api
            .indexed_cards()
            .iter()
            .map(|dc| format!("{}={}", dc.index, dc.card.text))
            .collect();
        assert_eq!(labels, vec!["a1=a", "a2=c", "b1=b"]);
    }

    #[test]
    fn edit_session_round_trip_through_api() {
        let mut api = api_with(&["a", "b"]);
        let a = api.resolve_str("a1").unwrap();

        let mut session = api.open_edit_session();
        session.set_buffered_text(a, "alpha");
        api.move_down(a); // single card in its column: no-op
        let result = api.commit_edits(session);

        assert_eq!(result.save, SaveStatus::Saved);
        assert_eq!(api.card(a).unwrap().text, "alpha");
    }

    #[test]
    fn unknown_ids_are_silent_no_ops() {
        let mut api = api_with(&["a"]);
        let ghost = CardId::new();
        for result in [
            api.delete_card(ghost),
            api.move_up(ghost),
            api.move_down(ghost),
            api.switch_column(ghost),
        ] {
            assert!(!result.changed());
            assert!(result.messages.is_empty());
        }
        assert_eq!(api.all_cards().len(), 1);
    }

    #[test]
    fn reload_sees_the_same_layout() {
        let env = TestEnv::new();
        let mut api = env.api();
        api.add_card("one", Placement::Auto);
        api.add_card("two", Placement::Auto);
        api.add_card("three", Placement::Column(Column::Right));
        let c = api.resolve_str("b2").unwrap();
        api.move_up(c);

        let reloaded = env.api();
        let layout = |api: &CopyCatApi<_>| -> Vec<String> {
            api.indexed_cards()
                .iter()
                .map(|dc| format!("{}={}", dc.index, dc.card.text))
                .collect()
        };
        assert_eq!(layout(&reloaded), vec!["a1=one", "b1=three", "b2=two"]);
        assert_eq!(layout(&reloaded), layout(&api));
    }

    #[test]
    fn reload_mints_fresh_ids() {
        let env = TestEnv::new();
        let mut api = env.api();
        let id = api.add_card("same text", Placement::Auto).card_id().unwrap();

        let reloaded = env.api();
        assert_eq!(reloaded.all_cards()[0].text, "same text");
        assert!(reloaded.card(id).is_none());
    }

    #[test]
    fn location_comes_from_the_backend() {
        let api = api_with(&[]);
        assert_eq!(api.location(), PathBuf::from("memory://sentences.json"));
    }
}
