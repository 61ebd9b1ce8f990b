use crate::commands::{persist, CmdMessage, CmdResult};
use crate::index::{CardIndex, DisplayCard};
use crate::model::{Card, Placement};
use crate::store::{CardStore, StorageBackend};

/// Creates a card and persists.
///
/// `Placement::Auto` picks the shorter column as it is right now, left on ties.
/// Existing cards are never rebalanced, so a run of deletes can leave the columns
/// uneven for good. The text is stored as given, empty included.
pub fn run<B: StorageBackend>(
    store: &mut CardStore<B>,
    text: String,
    placement: Placement,
) -> CmdResult {
    let column = match placement {
        Placement::Auto => store.balanced_column(),
        Placement::Column(column) => column,
    };

    let card = Card::new(text);
    let position = store.push(column, card.clone());
    let index = CardIndex::from(position);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Card added ({}): {}",
        index, card.text
    )));
    result.affected_cards.push(DisplayCard::new(card, index));
    persist(store, &mut result);
    result
}
