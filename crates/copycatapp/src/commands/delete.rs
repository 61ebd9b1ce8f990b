use crate::commands::{persist, CmdMessage, CmdResult};
use crate::index::{CardIndex, DisplayCard};
use crate::model::CardId;
use crate::store::{CardStore, StorageBackend};

/// Removes a card from whichever column holds it.
///
/// An unknown id is a silent no-op and nothing is written.
pub fn run<B: StorageBackend>(store: &mut CardStore<B>, id: CardId) -> CmdResult {
    let mut result = CmdResult::default();

    let Some((position, card)) = store.remove(id) else {
        return result;
    };

    let index = CardIndex::from(position);
    result.add_message(CmdMessage::success(format!(
        "Card deleted ({}): {}",
        index, card.text
    )));
    result.affected_cards.push(DisplayCard::new(card, index));
    persist(store, &mut result);
    result
}
