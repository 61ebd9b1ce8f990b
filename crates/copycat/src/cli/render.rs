//! # Rendering Module
//!
//! Turns core data into terminal text. Every function here returns a `String` and
//! leaves printing to the handlers, which keeps layout testable.
//!
//! ## Board Layout
//!
//! The two columns sit side by side, left column first:
//!
//! ```text
//! A                                  │ B
//! a1. buy milk                       │ b1. call mom
//! a2. water the plants               │
//! ```
//!
//! - Each side gets half of the terminal width minus the gutter.
//! - Line breaks inside a card are shown as spaces.
//! - Text wider than its side is cut with `…`. Widths are measured with
//!   `unicode-width`, so wide characters do not break alignment.

use super::styles::{EMPTY_CARD, FAINT, HEADER, INDEX};
use colored::Colorize;
use copycatapp::api::{CmdMessage, MessageLevel};
use copycatapp::index::DisplayCard;
use copycatapp::model::Column;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Used when the terminal size cannot be read (output piped to a file, tests).
pub const LINE_WIDTH: usize = 100;
/// Narrowest board we lay out. Below this each side would be unreadable.
pub const MIN_WIDTH: usize = 40;
pub const GUTTER: &str = " │ ";
pub const EMPTY_MESSAGE: &str = "Nothing here yet. Run `copycat add <text>` to get started!";
const EMPTY_CARD_TEXT: &str = "(empty)";

/// The current terminal width, or [`LINE_WIDTH`] when there is no terminal.
pub fn terminal_width() -> usize {
    console::Term::stdout()
        .size_checked()
        .map(|(_rows, cols)| cols as usize)
        .unwrap_or(LINE_WIDTH)
        .max(MIN_WIDTH)
}

/// Renders both columns side by side.
pub fn render_board(cards: &[DisplayCard], width: usize) -> String {
    if cards.is_empty() {
        return format!("{}\n", EMPTY_MESSAGE);
    }

    let side = width.max(MIN_WIDTH).saturating_sub(GUTTER.width()) / 2;
    let column_cells = |column: Column| -> Vec<String> {
        cards
            .iter()
            .filter(|dc| dc.index.column == column)
            .map(|dc| render_cell(dc, side))
            .collect()
    };
    let left = column_cells(Column::Left);
    let right = column_cells(Column::Right);

    let mut out = String::new();
    out.push_str(&join_row(
        &pad_cell(&HEADER.apply_to("A").to_string(), 1, side),
        &HEADER.apply_to("B").to_string(),
    ));

    let blank = " ".repeat(side);
    for row in 0..left.len().max(right.len()) {
        let l = left.get(row).unwrap_or(&blank);
        let r = right.get(row).map(String::as_str).unwrap_or("");
        out.push_str(&join_row(l, r));
    }
    out
}

fn join_row(left: &str, right: &str) -> String {
    let line = format!("{}{}{}", left, FAINT.apply_to(GUTTER), right);
    format!("{}\n", line.trim_end())
}

/// One card, padded to exactly `width` visible columns.
fn render_cell(dc: &DisplayCard, width: usize) -> String {
    let label = format!("{}. ", dc.index);
    let available = width.saturating_sub(label.width());

    let (text, text_width) = if dc.card.text.is_empty() {
        let text = truncate_to_width(EMPTY_CARD_TEXT, available);
        let w = text.width();
        (EMPTY_CARD.apply_to(text).to_string(), w)
    } else {
        let text = truncate_to_width(&single_line(&dc.card.text), available);
        let w = text.width();
        (text, w)
    };

    pad_cell(
        &format!("{}{}", INDEX.apply_to(&label), text),
        label.width() + text_width,
        width,
    )
}

/// Pads already-styled text, whose visible width is `visible`, to `width`.
fn pad_cell(styled: &str, visible: usize, width: usize) -> String {
    format!("{}{}", styled, " ".repeat(width.saturating_sub(visible)))
}

fn single_line(text: &str) -> String {
    text.chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    if max_width > 0 {
        result.push('…');
    }
    result
}

pub fn render_message(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => message.content.dimmed().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Warning => message.content.yellow().to_string(),
        MessageLevel::Error => message.content.red().to_string(),
    }
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", render_message(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use copycatapp::index::{index_cards, CardIndex};
    use copycatapp::model::Card;

    fn plain() {
        console::set_colors_enabled(false);
        colored::control::set_override(false);
    }

    fn board(left: &[&str], right: &[&str], width: usize) -> String {
        plain();
        let left: Vec<Card> = left.iter().map(|t| Card::new(*t)).collect();
        let right: Vec<Card> = right.iter().map(|t| Card::new(*t)).collect();
        render_board(&index_cards(&left, &right), width)
    }

    #[test]
    fn empty_board_shows_placeholder() {
        plain();
        assert_eq!(
            render_board(&[], 80),
            "Nothing here yet. Run `copycat add <text>` to get started!\n"
        );
    }

    #[test]
    fn columns_render_side_by_side() {
        let out = board(&["buy milk", "water plants"], &["call mom"], 43);
        let lines: Vec<&str> = out.lines().collect();
        // (43 - 3) / 2 = 20 columns per side
        assert_eq!(lines[0], format!("A{}{}B", " ".repeat(19), GUTTER));
        assert_eq!(lines[1], format!("a1. buy milk{}{}b1. call mom", " ".repeat(8), GUTTER));
        assert_eq!(lines[2], format!("a2. water plants{}{}", " ".repeat(4), GUTTER.trim_end()));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn right_column_can_be_longer() {
        let out = board(&[], &["one", "two"], 43);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[2].starts_with(&" ".repeat(20)));
        assert!(lines[2].ends_with("b2. two"));
    }

    #[test]
    fn long_text_is_truncated() {
        let out = board(&["a very long sentence that will not fit"], &[], 43);
        let row = out.lines().nth(1).unwrap();
        assert!(row.starts_with("a1. a very long sen…"));
    }

    #[test]
    fn multi_line_text_renders_on_one_line() {
        let out = board(&["first\nsecond"], &[], 80);
        assert!(out.contains("a1. first second"));
    }

    #[test]
    fn empty_card_gets_placeholder() {
        let out = board(&[""], &[], 80);
        assert!(out.contains("a1. (empty)"));
    }

    #[test]
    fn truncate_respects_wide_chars() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
        // Each CJK character is two columns wide.
        assert_eq!(truncate_to_width("日本語テキスト", 7), "日本語…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn messages_render_their_content() {
        plain();
        let message = CmdMessage::success("Card added (a1): buy milk");
        assert_eq!(render_message(&message), "Card added (a1): buy milk");
    }

    #[test]
    fn selectors_in_labels_match_core_indexes() {
        plain();
        let dc = DisplayCard::new(Card::new("x"), CardIndex::new(Column::Right, 12));
        assert_eq!(render_cell(&dc, 10), "b12. x    ");
    }
}
