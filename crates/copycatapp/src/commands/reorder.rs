use crate::commands::{display_card, persist, CmdMessage, CmdResult};
use crate::index::CardIndex;
use crate::model::CardId;
use crate::store::{CardStore, StorageBackend};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

/// Swaps the card with the one above it in the same column.
/// No-op at the top of the column or for an unknown id.
pub fn move_up<B: StorageBackend>(store: &mut CardStore<B>, id: CardId) -> CmdResult {
    shift(store, id, Direction::Up)
}

/// Swaps the card with the one below it in the same column.
/// No-op at the bottom of the column or for an unknown id.
pub fn move_down<B: StorageBackend>(store: &mut CardStore<B>, id: CardId) -> CmdResult {
    shift(store, id, Direction::Down)
}

fn shift<B: StorageBackend>(
    store: &mut CardStore<B>,
    id: CardId,
    direction: Direction,
) -> CmdResult {
    let mut result = CmdResult::default();

    let Some(position) = store.find(id) else {
        return result;
    };

    let target = match direction {
        Direction::Up => position.offset.checked_sub(1),
        Direction::Down => Some(position.offset + 1),
    };
    let Some(target) = target else {
        return result;
    };

    // Only persist when a swap actually happened.
    if !store.swap(position.column, position.offset, target) {
        return result;
    }

    if let Some(moved) = display_card(store, id) {
        let verb = match direction {
            Direction::Up => "up",
            Direction::Down => "down",
        };
        result.add_message(CmdMessage::success(format!(
            "Card moved {} ({} -> {}): {}",
            verb,
            CardIndex::from(position),
            moved.index,
            moved.card.text
        )));
        result.affected_cards.push(moved);
    }
    persist(store, &mut result);
    result
}
