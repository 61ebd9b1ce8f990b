use super::backend::StorageBackend;
use super::format::{self, ColumnsFile, Document};
use crate::error::Result;
use crate::model::{Card, CardId, CardPosition, Column};
use log::{debug, error, info, warn};
use std::path::PathBuf;

/// The two ordered columns of cards, plus the backend they persist to.
///
/// Every card sits in exactly one column at exactly one offset. The mutation
/// primitives here only move cards around; they never write. Deciding when to
/// persist is up to the command layer.
pub struct CardStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    columns: [Vec<Card>; 2],
}

impl<B: StorageBackend> CardStore<B> {
    /// A store with two empty columns that has not read anything yet.
    pub fn empty(backend: B) -> Self {
        Self {
            backend,
            columns: [Vec::new(), Vec::new()],
        }
    }

    /// Loads the persisted document.
    ///
    /// Never fails: a missing, unreadable or unparseable document is a cold
    /// start with two empty columns. A legacy single-list document is spread
    /// over both columns with the auto-balance rule and written straight back
    /// in the current shape.
    pub fn load(backend: B) -> Self {
        let mut store = Self::empty(backend);
        let location = store.backend.location();

        let raw = match store.backend.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No data file at {}, starting empty", location.display());
                return store;
            }
            Err(e) => {
                warn!("Could not read {}: {}. Starting empty", location.display(), e);
                return store;
            }
        };

        match format::parse_document(&raw) {
            Ok(Document::Columns(file)) => {
                store.columns = [
                    file.col1.into_iter().map(Card::new).collect(),
                    file.col2.into_iter().map(Card::new).collect(),
                ];
                debug!("Loaded {} cards from {}", store.len(), location.display());
            }
            Ok(Document::Legacy(entries)) => {
                info!(
                    "Migrating {} entries from the single-list format at {}",
                    entries.len(),
                    location.display()
                );
                for text in entries {
                    let column = store.balanced_column();
                    store.push(column, Card::new(text));
                }
                if let Err(e) = store.save() {
                    error!("Failed to rewrite migrated data: {}", e);
                }
            }
            Err(e) => {
                warn!(
                    "Ignoring unusable data in {}: {}. Starting empty",
                    location.display(),
                    e
                );
            }
        }

        store
    }

    /// Writes both columns in the current shape.
    pub fn save(&self) -> Result<()> {
        let document = format::render_document(&self.to_file())?;
        self.backend.write(&document)?;
        debug!("Saved {} cards to {}", self.len(), self.location().display());
        Ok(())
    }

    fn to_file(&self) -> ColumnsFile {
        let texts = |column: Column| -> Vec<String> {
            self.column(column).iter().map(|c| c.text.clone()).collect()
        };
        ColumnsFile {
            col1: texts(Column::Left),
            col2: texts(Column::Right),
        }
    }

    pub fn location(&self) -> PathBuf {
        self.backend.location()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// How full a column is. Card count stands in for rendered height.
    pub fn column_height(&self, column: Column) -> usize {
        self.columns[column.index()].len()
    }

    /// The column a new card would be auto-placed in: the shorter one, left on ties.
    pub fn balanced_column(&self) -> Column {
        if self.column_height(Column::Left) <= self.column_height(Column::Right) {
            Column::Left
        } else {
            Column::Right
        }
    }

    pub fn column(&self, column: Column) -> &[Card] {
        &self.columns[column.index()]
    }

    /// All cards, left column first, each column in display order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.columns.iter().flat_map(|column| column.iter())
    }

    pub fn len(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(Vec::is_empty)
    }

    pub fn find(&self, id: CardId) -> Option<CardPosition> {
        Column::ALL.into_iter().find_map(|column| {
            self.column(column)
                .iter()
                .position(|c| c.id == id)
                .map(|offset| CardPosition { column, offset })
        })
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards().find(|c| c.id == id)
    }

    pub fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.columns
            .iter_mut()
            .flat_map(|column| column.iter_mut())
            .find(|c| c.id == id)
    }

    /// Appends to the end of a column.
    pub fn push(&mut self, column: Column, card: Card) -> CardPosition {
        let cards = &mut self.columns[column.index()];
        cards.push(card);
        CardPosition {
            column,
            offset: cards.len() - 1,
        }
    }

    /// Inserts at `offset`, clamped to the end of the column.
    pub fn insert(&mut self, column: Column, offset: usize, card: Card) -> CardPosition {
        let cards = &mut self.columns[column.index()];
        let offset = offset.min(cards.len());
        cards.insert(offset, card);
        CardPosition { column, offset }
    }

    pub fn remove(&mut self, id: CardId) -> Option<(CardPosition, Card)> {
        let position = self.find(id)?;
        let card = self.columns[position.column.index()].remove(position.offset);
        Some((position, card))
    }

    /// Swaps two cards of the same column. Out-of-range offsets are ignored.
    pub fn swap(&mut self, column: Column, a: usize, b: usize) -> bool {
        let cards = &mut self.columns[column.index()];
        if a >= cards.len() || b >= cards.len() {
            return false;
        }
        cards.swap(a, b);
        true
    }
}
