//! Bulk edit through `$EDITOR`.
//!
//! Every card becomes one line of a temporary file, grouped under a header per
//! column:
//!
//! ```text
//! # Edit the card texts below: one line per card.
//! # Lines starting with '#' are ignored. Do not add or remove lines.
//! # Column A
//! buy milk
//! # Column B
//! call mom
//! ```
//!
//! Line breaks and backslashes inside a card are written as `\n` and `\\`, and a
//! card starting with `#` gets a leading backslash, so any text survives the trip.
//! Escapes are only read back for cards that were written with them: a plain
//! card keeps whatever backslashes the user types. Lines are matched back to
//! cards by their order; a buffer whose line count no longer matches is rejected.

use copycatapp::error::{CopyCatError, Result};
use copycatapp::index::DisplayCard;
use copycatapp::model::{CardId, Column};
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

const HELP_LINES: [&str; 2] = [
    "# Edit the card texts below: one line per card.",
    "# Lines starting with '#' are ignored. Do not add or remove lines.",
];

fn column_header(column: Column) -> String {
    format!("# Column {}", column.letter().to_ascii_uppercase())
}

/// Builds the buffer for a list of cards in display order.
pub fn to_buffer(cards: &[DisplayCard]) -> String {
    let mut lines: Vec<String> = HELP_LINES.iter().map(|l| l.to_string()).collect();
    for column in Column::ALL {
        lines.push(column_header(column));
        lines.extend(
            cards
                .iter()
                .filter(|dc| dc.index.column == column)
                .map(|dc| escape_line(&dc.card.text)),
        );
    }
    let mut buffer = lines.join("\n");
    buffer.push('\n');
    buffer
}

/// Reads the card lines of an edited buffer, still escaped, in buffer order.
pub fn from_buffer(buffer: &str) -> Vec<String> {
    buffer
        .lines()
        .filter(|line| !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Pairs edited lines with the cards they were written for and decodes them.
/// Fails when lines were added or removed.
pub fn match_edits(cards: &[DisplayCard], lines: Vec<String>) -> Result<Vec<(CardId, String)>> {
    if lines.len() != cards.len() {
        return Err(CopyCatError::Api(format!(
            "Expected {} lines but found {}. Nothing was changed.",
            cards.len(),
            lines.len()
        )));
    }
    let ordered = Column::ALL
        .into_iter()
        .flat_map(|column| cards.iter().filter(move |dc| dc.index.column == column));
    Ok(ordered
        .zip(lines)
        .map(|(dc, line)| (dc.card.id, decode_line(&dc.card.text, &line)))
        .collect())
}

fn decode_line(original: &str, line: &str) -> String {
    if line == escape_line(original) {
        original.to_string()
    } else if needs_escapes(original) {
        unescape_line(line)
    } else {
        match line.strip_prefix("\\#") {
            Some(rest) => format!("#{}", rest),
            None => line.to_string(),
        }
    }
}

fn needs_escapes(text: &str) -> bool {
    text.contains(['\\', '\n', '\r'])
}

fn escape_line(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    if text.starts_with('#') {
        out.push('\\');
    }
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out
}

fn unescape_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let line = match line.strip_prefix("\\#") {
        Some(rest) => {
            out.push('#');
            rest
        }
        None => line,
    };
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Gets the editor command from environment.
/// Checks $EDITOR, then $VISUAL, then falls back to common editors.
pub fn get_editor() -> Result<String> {
    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = env::var(var) {
            if !editor.trim().is_empty() {
                return Ok(editor);
            }
        }
    }

    for fallback in ["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok(fallback.to_string());
        }
    }

    Err(CopyCatError::Api(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

/// Opens a file in the user's editor and waits for it to close.
/// Returns the contents of the file after editing.
pub fn open_in_editor(path: &Path) -> Result<String> {
    let editor = get_editor()?;
    // Allow "code --wait" style commands.
    let mut parts = editor.split_whitespace();
    let program = parts.next().unwrap_or("vi");

    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|e| CopyCatError::Api(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(CopyCatError::Api(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    fs::read_to_string(path).map_err(CopyCatError::Io)
}

/// Writes `initial` to a temporary file, lets the user edit it and returns the
/// result. `None` means the buffer came back unchanged.
pub fn edit_buffer(initial: &str) -> Result<Option<String>> {
    let temp_file = env::temp_dir().join(format!("copycat_edit_{}.txt", std::process::id()));
    fs::write(&temp_file, initial).map_err(CopyCatError::Io)?;

    let result = open_in_editor(&temp_file);
    let _ = fs::remove_file(&temp_file);

    let edited = result?;
    if edited == initial {
        Ok(None)
    } else {
        Ok(Some(edited))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use copycatapp::index::index_cards;
    use copycatapp::model::Card;

    fn cards(left: &[&str], right: &[&str]) -> Vec<DisplayCard> {
        let left: Vec<Card> = left.iter().map(|t| Card::new(*t)).collect();
        let right: Vec<Card> = right.iter().map(|t| Card::new(*t)).collect();
        index_cards(&left, &right)
    }

    #[test]
    fn buffer_groups_cards_by_column() {
        let buffer = to_buffer(&cards(&["buy milk"], &["call mom", "pay rent"]));
        let body: Vec<&str> = buffer.lines().skip(HELP_LINES.len()).collect();
        assert_eq!(
            body,
            vec!["# Column A", "buy milk", "# Column B", "call mom", "pay rent"]
        );
        assert!(buffer.ends_with('\n'));
    }

    fn edited_texts(cards: &[DisplayCard], buffer: &str) -> Vec<String> {
        match_edits(cards, from_buffer(buffer))
            .unwrap()
            .into_iter()
            .map(|(_, text)| text)
            .collect()
    }

    #[test]
    fn unedited_buffer_reads_back_unchanged() {
        let texts = ["plain", "", "two\nlines", "#hashtag", "back\\slash", "tab\there"];
        let cards = cards(&texts[..3], &texts[3..]);
        let read = edited_texts(&cards, &to_buffer(&cards));
        assert_eq!(read, texts.iter().map(|t| t.to_string()).collect::<Vec<_>>());
    }

    #[test]
    fn typed_backslashes_in_plain_cards_are_kept() {
        let cards = cards(&["old path"], &["#tag"]);
        let read = edited_texts(
            &cards,
            "# Column A\nC:\\data\\new folder\n# Column B\n\\#tag\\n\n",
        );
        assert_eq!(read, vec!["C:\\data\\new folder", "#tag\\n"]);
    }

    #[test]
    fn escaped_cards_keep_unknown_escapes() {
        let cards = cards(&["two\nlines"], &[]);
        let read = edited_texts(&cards, "# Column A\nthree\\nlines \\d\n");
        assert_eq!(read, vec!["three\nlines \\d"]);
    }

    #[test]
    fn comment_lines_are_ignored() {
        let read = from_buffer("# header\nfirst\n# Column B\nsecond\n");
        assert_eq!(read, vec!["first", "second"]);
    }

    #[test]
    fn match_edits_pairs_by_display_order() {
        let cards = cards(&["a", "c"], &["b"]);
        let edits = match_edits(&cards, vec!["A".into(), "C".into(), "B".into()]).unwrap();
        let by_text: Vec<(&str, &str)> = edits
            .iter()
            .map(|(id, text)| {
                let card = cards.iter().find(|dc| dc.card.id == *id).unwrap();
                (card.card.text.as_str(), text.as_str())
            })
            .collect();
        assert_eq!(by_text, vec![("a", "A"), ("c", "C"), ("b", "B")]);
    }

    #[test]
    fn match_edits_rejects_changed_line_count() {
        let cards = cards(&["a"], &["b"]);
        let err = match_edits(&cards, vec!["only one".into()]).unwrap_err();
        assert!(err.to_string().contains("Expected 2 lines but found 1"));
    }

    #[test]
    fn trailing_backslash_is_kept() {
        assert_eq!(unescape_line("ends with \\"), "ends with \\");
        assert_eq!(unescape_line("\\#x \\q"), "#x \\q");
    }
}
