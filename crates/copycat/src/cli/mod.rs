//! # CLI Behavior
//!
//! This is **one possible UI client** for copycat, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, the
//! clipboard and the editor.
//!
//! For the overall architecture, see the `copycatapp` crate documentation.
//!
//! ## Naked Execution (`copycat`)
//!
//! Running `copycat` with no arguments shows the board, like `copycat list`.
//! Looking is most of the usage, so it takes the fewest keystrokes.
//!
//! ## Selectors
//!
//! Commands that act on a card take a selector: the column letter and the card's
//! position, as printed by `list`. `a1` is the top of the left column. Selectors
//! are resolved before anything changes, so `copycat delete a1 a2` deletes the
//! two cards that were listed there.
//!
//! ## Editing
//!
//! - `copycat edit a2 new text` replaces one card's text.
//! - `copycat edit` opens every card in `$EDITOR`, one line each. Saving applies
//!   all changes at once. Quitting without saving, or adding or removing lines,
//!   leaves every card as it was.
//!
//! ## Module Structure
//!
//! - `commands`: Startup and per-command handlers that call the API
//! - `editor`: The bulk edit buffer and `$EDITOR` launching
//! - `render`: Board layout and messages
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styles

mod commands;
mod editor;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
