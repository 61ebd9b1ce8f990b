//! Terminal styles for the board.
//!
//! Styles are `console::Style` values registered once through `once_cell::sync::Lazy`.
//! `console` drops the escape codes by itself when stdout is not a terminal or when
//! `NO_COLOR` is set, so rendering code never checks.

use console::Style;
use once_cell::sync::Lazy;

/// Column headers ("A", "B").
pub static HEADER: Lazy<Style> = Lazy::new(|| Style::new().bold().underlined());

/// Card selectors (`a1.`).
pub static INDEX: Lazy<Style> = Lazy::new(|| Style::new().yellow());

/// Separators and hints.
pub static FAINT: Lazy<Style> = Lazy::new(|| Style::new().dim());

/// Empty cards, shown as a placeholder.
pub static EMPTY_CARD: Lazy<Style> = Lazy::new(|| Style::new().dim().italic());
