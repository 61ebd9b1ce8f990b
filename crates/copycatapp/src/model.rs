use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// In-memory identity of a card.
///
/// Ids are minted when a card is created or loaded and are never written to disk:
/// the persisted format identifies cards by position only, so a reload hands out
/// fresh ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(Uuid);

impl CardId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    pub text: String,
}

impl Card {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: CardId::new(),
            text: text.into(),
        }
    }
}

/// One of the two columns. `Left` is persisted as `col1`, `Right` as `col2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Left,
    Right,
}

impl Column {
    pub const ALL: [Column; 2] = [Column::Left, Column::Right];

    pub fn index(self) -> usize {
        match self {
            Column::Left => 0,
            Column::Right => 1,
        }
    }

    pub fn other(self) -> Column {
        match self {
            Column::Left => Column::Right,
            Column::Right => Column::Left,
        }
    }

    /// Letter used by display selectors (`a1`, `b2`).
    pub fn letter(self) -> char {
        match self {
            Column::Left => 'a',
            Column::Right => 'b',
        }
    }

    pub fn from_letter(c: char) -> Option<Column> {
        match c.to_ascii_lowercase() {
            'a' => Some(Column::Left),
            'b' => Some(Column::Right),
            _ => None,
        }
    }
}

/// Where a new card goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Whichever column is currently shorter; ties go left.
    #[default]
    Auto,
    /// End of the given column.
    Column(Column),
}

/// Zero-based location of a card inside the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardPosition {
    pub column: Column,
    pub offset: usize,
}
