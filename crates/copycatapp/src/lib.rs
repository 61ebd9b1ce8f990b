//! # Copycat Architecture
//!
//! Copycat keeps short text snippets ("cards") on a two-column board, each one a
//! single action away from the clipboard. This crate is the **UI-agnostic core**:
//! the board, its placement rules, bulk editing and persistence. It never prints
//! and never touches the clipboard. The `copycat` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (the copycat CLI, or any other UI)                  │
//! │  - Renders columns, forwards intents, owns the clipboard    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs, session.rs)                             │
//! │  - Thin facade over commands                                │
//! │  - Resolves selectors (a1, b2) to card ids                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Placement, reordering and edit rules                     │
//! │  - Decides when to persist                                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - CardStore: two ordered columns, JSON load/save           │
//! │  - StorageBackend: FsBackend (production), MemBackend (test)│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust arguments and returns Rust types. Problems
//! are reported through [`commands::CmdResult`] messages, [`error::CopyCatError`]
//! and the `log` facade; installing a logger is the client's business.
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: unit tests over `MemBackend`. Most of the testing lives here.
//! 2. **API**: dispatch and selector resolution.
//! 3. **Storage**: format parsing in `store/format.rs`, files in `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade clients talk to
//! - [`commands`]: Business logic per operation
//! - [`session`]: Buffered text editing with commit and cancel
//! - [`store`]: Columns, persistence format and backends
//! - [`model`]: Cards, ids and columns
//! - [`index`]: Display selectors (`a1`, `b2`)
//! - [`config`], [`init`]: Settings and context wiring

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod init;
pub mod model;
pub mod session;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
