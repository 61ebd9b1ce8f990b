use crate::commands::{persist, CmdMessage, CmdResult};
use crate::index::{CardIndex, DisplayCard};
use crate::model::CardId;
use crate::store::{CardStore, StorageBackend};

/// Moves a card to the **top** of the other column.
///
/// The card is promoted to position 0 of its destination rather than keeping
/// its old offset, so anything relying on relative order across a switch must
/// re-read the columns. Unknown ids are a no-op.
pub fn run<B: StorageBackend>(store: &mut CardStore<B>, id: CardId) -> CmdResult {
    let mut result = CmdResult::default();

    let Some((from, card)) = store.remove(id) else {
        return result;
    };

    let destination = from.column.other();
    let to = store.insert(destination, 0, card.clone());
    let index = CardIndex::from(to);

    result.add_message(CmdMessage::success(format!(
        "Card moved ({} -> {}): {}",
        CardIndex::from(from),
        index,
        card.text
    )));
    result.affected_cards.push(DisplayCard::new(card, index));
    persist(store, &mut result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, SaveStatus};
    use crate::model::{Column, Placement};
    use crate::store::mem_backend::MemBackend;

    fn texts(store: &CardStore<MemBackend>, column: Column) -> Vec<&str> {
        store.column(column).iter().map(|c| c.text.as_str()).collect()
    }

    #[test]
    fn lands_on_top_of_non_empty_column() {
        let mut store = CardStore::load(MemBackend::new());
        add::run(&mut store, "r1".into(), Placement::Column(Column::Right));
        add::run(&mut store, "r2".into(), Placement::Column(Column::Right));
        add::run(&mut store, "l1".into(), Placement::Column(Column::Left));
        let mover = add::run(&mut store, "l2".into(), Placement::Column(Column::Left))
            .card_id()
            .unwrap();

        let result = run(&mut store, mover);

        assert_eq!(result.save, SaveStatus::Saved);
        assert_eq!(texts(&store, Column::Right), vec!["l2", "r1", "r2"]);
        assert_eq!(texts(&store, Column::Left), vec!["l1"]);
        assert_eq!(result.affected_cards[0].index, CardIndex::new(Column::Right, 1));
    }

    #[test]
    fn switches_back_and_forth() {
        let mut store = CardStore::load(MemBackend::new());
        let id = add::run(&mut store, "x".into(), Placement::Auto)
            .card_id()
            .unwrap();

        run(&mut store, id);
        assert_eq!(store.find(id).unwrap().column, Column::Right);
        run(&mut store, id);
        assert_eq!(store.find(id).unwrap().column, Column::Left);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn keeps_the_same_id_and_text() {
        let mut store = CardStore::load(MemBackend::new());
        let id = add::run(&mut store, "same".into(), Placement::Auto)
            .card_id()
            .unwrap();
        let result = run(&mut store, id);
        assert_eq!(result.card_id(), Some(id));
        assert_eq!(store.card(id).unwrap().text, "same");
    }

    #[test]
    fn milk_and_mom() {
        let mut store = CardStore::load(MemBackend::new());
        let milk = add::run(&mut store, "buy milk".into(), Placement::Auto);
        assert_eq!(milk.affected_cards[0].index.column, Column::Left);
        let mom = add::run(&mut store, "call mom".into(), Placement::Auto);
        assert_eq!(mom.affected_cards[0].index.column, Column::Right);

        run(&mut store, mom.card_id().unwrap());

        assert_eq!(texts(&store, Column::Left), vec!["call mom", "buy milk"]);
        assert!(store.column(Column::Right).is_empty());
    }

    #[test]
    fn unknown_id_is_noop() {
        let mut store = CardStore::load(MemBackend::new());
        add::run(&mut store, "a".into(), Placement::Auto);
        let writes = store.backend().write_count();
        assert!(!run(&mut store, CardId::new()).changed());
        assert_eq!(store.backend().write_count(), writes);
    }

    #[test]
    fn write_failure_keeps_switch_in_memory() {
        let mut store = CardStore::load(MemBackend::new());
        let id = add::run(&mut store, "mover".into(), Placement::Column(Column::Left))
            .card_id()
            .unwrap();
        store.backend().set_simulate_write_error(true);

        let result = run(&mut store, id);

        assert_eq!(result.save, SaveStatus::Failed);
        assert_eq!(texts(&store, Column::Right), vec!["mover"]);
        assert!(texts(&store, Column::Left).is_empty());
    }
}
