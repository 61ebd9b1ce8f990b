//! # Storage Layer
//!
//! Cards live in two ordered columns that are persisted together as one JSON
//! document. The layer is split in two:
//!
//! 1. **Backends** ([`backend::StorageBackend`]): move the raw document in and out.
//!    They know nothing about cards.
//! 2. **Store** ([`card_store::CardStore`]): owns the columns, parses and renders the
//!    document, and migrates old formats.
//!
//! ## Loading Is Never Fatal
//!
//! A missing file is the normal first run. A corrupt or unreadable file is logged
//! and treated the same way: the store starts with two empty columns. The next
//! successful save replaces whatever was there.
//!
//! ## Legacy Migration
//!
//! Early versions stored a single bare list. When one is found, its entries are
//! placed one by one with the same auto-balance rule a new card gets, and the file
//! is rewritten in the two-column shape immediately.
//!
//! ## Write Safety
//!
//! The filesystem backend writes to a temp file beside the target and renames it
//! into place, so a crash mid-write leaves the previous file intact.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one JSON file at a configured path.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! └── sentences.json    # {"col1": [...], "col2": [...]}
//! ```

pub mod backend;
pub mod card_store;
pub mod format;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::StorageBackend;
pub use card_store::CardStore;
