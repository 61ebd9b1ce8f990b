//! # Card Identifiers: Id vs Display Index
//!
//! Every card carries a [`CardId`](crate::model::CardId) for its whole in-memory
//! life. Ids are the right thing for code, but nobody wants to type a UUID, and
//! they are not persisted anyway.
//!
//! Users address cards by where they see them: a column letter and a 1-based
//! position. `a1` is the top of the left column, `b3` the third card of the right
//! column. Letters are case-insensitive.
//!
//! A display index is only meaningful against the layout it was read from. The API
//! resolves indexes to ids **before** acting, so a command touching several cards
//! (`copycat delete a1 a2`) targets the cards the user saw, even though each
//! deletion shifts the positions below it.
//!
//! - [`CardIndex`]: the user-facing address
//! - [`DisplayCard`]: a card paired with its current address
//! - [`index_cards`]: addresses for every card of a layout

use crate::model::{Card, CardPosition, Column};
use std::fmt;
use std::str::FromStr;

/// A user-facing card address: column letter plus 1-based position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardIndex {
    pub column: Column,
    pub position: usize,
}

impl CardIndex {
    pub fn new(column: Column, position: usize) -> Self {
        Self { column, position }
    }
}

impl From<CardPosition> for CardIndex {
    fn from(position: CardPosition) -> Self {
        Self {
            column: position.column,
            position: position.offset + 1,
        }
    }
}

impl fmt::Display for CardIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column.letter(), self.position)
    }
}

impl FromStr for CardIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let column = chars.next().and_then(Column::from_letter);
        let rest = chars.as_str();

        if let Some(column) = column {
            if let Ok(position) = rest.parse::<usize>() {
                if position > 0 {
                    return Ok(CardIndex { column, position });
                }
            }
        }
        Err(format!(
            "Invalid card index: {} (expected a column letter and a position, e.g. a1 or b2)",
            s
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayCard {
    pub card: Card,
    pub index: CardIndex,
}

impl DisplayCard {
    pub fn new(card: Card, index: CardIndex) -> Self {
        Self { card, index }
    }
}

/// Pairs every card with its display index, left column first.
pub fn index_cards(left: &[Card], right: &[Card]) -> Vec<DisplayCard> {
    let mut results = Vec::with_capacity(left.len() + right.len());
    for (column, cards) in [(Column::Left, left), (Column::Right, right)] {
        for (offset, card) in cards.iter().enumerate() {
            results.push(DisplayCard::new(
                card.clone(),
                CardIndex::from(CardPosition { column, offset }),
            ));
        }
    }
    results
}
