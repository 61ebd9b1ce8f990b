use crate::commands::{display_card, persist, CmdMessage, CmdResult};
use crate::model::CardId;
use crate::store::{CardStore, StorageBackend};

/// Writes buffered texts back into their cards, matched by id, then persists.
///
/// Cards deleted since the buffer was taken are skipped, never recreated. The
/// store is saved even when no text changed, so a commit always leaves the file
/// in step with memory.
pub fn run<B: StorageBackend>(
    store: &mut CardStore<B>,
    edits: Vec<(CardId, String)>,
) -> CmdResult {
    let mut result = CmdResult::default();
    let mut skipped = 0;

    for (id, text) in edits {
        let Some(card) = store.card_mut(id) else {
            skipped += 1;
            continue;
        };
        if card.text == text {
            continue;
        }
        card.text = text;
        if let Some(edited) = display_card(store, id) {
            result.affected_cards.push(edited);
        }
    }

    match result.affected_cards.len() {
        0 => result.add_message(CmdMessage::info("No text changes")),
        1 => result.add_message(CmdMessage::success("1 card edited")),
        n => result.add_message(CmdMessage::success(format!("{} cards edited", n))),
    }
    if skipped > 0 {
        result.add_message(CmdMessage::info(format!(
            "{} edited card(s) were deleted in the meantime",
            skipped
        )));
    }

    persist(store, &mut result);
    result
}
