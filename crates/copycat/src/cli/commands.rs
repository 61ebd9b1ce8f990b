//! # CLI Layer
//!
//! This module is **one possible UI client** for copycat. It is not the application
//! itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs a logger
//! - Talks to the clipboard and the editor
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Directories, config, logging, then the cards
//! 3. **Dispatch**: Route commands to handlers that call the API
//! 4. **Error Handling**: Errors bubble up to `main`, which prints them and exits 1

use super::editor;
use super::render::{self, print_messages};
use super::setup::{placement, Cli, Commands};
use crate::clipboard;
use clap::Parser;
use copycatapp::api::{CmdMessage, CmdResult, CopyCatApi};
use copycatapp::config::CopyCatConfig;
use copycatapp::error::{CopyCatError, Result};
use copycatapp::init::{initialize, CopyCatDirs};
use copycatapp::model::Placement;
use copycatapp::store::fs_backend::FsBackend;
use flexi_logger::{Logger, LoggerHandle};
use log::debug;

type Api = CopyCatApi<FsBackend>;

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let dirs = CopyCatDirs::resolve()?;
    let config = CopyCatConfig::load(&dirs.config_dir)?;
    let _logger = init_logging(&log_level(cli.verbose, &config))?;
    debug!("Config dir {}", dirs.config_dir.display());

    let mut ctx = initialize(&dirs, config, cli.data.clone());
    let api = &mut ctx.api;

    match cli.command.unwrap_or(Commands::List) {
        Commands::List => handle_list(api),
        Commands::Add { column, text } => handle_add(api, text.join(" "), placement(column)),
        Commands::Copy { selector } => handle_copy(api, &selector),
        Commands::Delete { selectors } => handle_delete(api, &selectors),
        Commands::Up { selector } => {
            let id = api.resolve_str(&selector)?;
            report(api.move_up(id), "Already at the top of its column");
            Ok(())
        }
        Commands::Down { selector } => {
            let id = api.resolve_str(&selector)?;
            report(api.move_down(id), "Already at the bottom of its column");
            Ok(())
        }
        Commands::Switch { selector } => {
            let id = api.resolve_str(&selector)?;
            print_messages(&api.switch_column(id).messages);
            Ok(())
        }
        Commands::Edit {
            selector: Some(selector),
            text,
        } => handle_edit_one(api, &selector, text),
        Commands::Edit { selector: None, .. } => handle_edit_all(api),
        Commands::ClearClipboard => {
            clipboard::clear_clipboard()?;
            print_messages(&[CmdMessage::success("Clipboard cleared")]);
            Ok(())
        }
        Commands::Path => {
            println!("{}", api.location().display());
            Ok(())
        }
    }
}

/// `-v` wins, then `COPYCAT_LOG` or the config file (already merged by confique).
fn log_level(verbose: bool, config: &CopyCatConfig) -> String {
    if verbose {
        "debug".to_string()
    } else {
        config.log_level()
    }
}

/// Logs go to stderr so they never mix with command output.
fn init_logging(level: &str) -> Result<LoggerHandle> {
    Logger::try_with_str(level)
        .map_err(|e| CopyCatError::Api(format!("Invalid log level '{}': {}", level, e)))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .map_err(|e| CopyCatError::Api(format!("Failed to start logger: {}", e)))
}

/// Prints the command's messages, or `unchanged` when it changed nothing.
fn report(result: CmdResult, unchanged: &str) {
    if result.changed() {
        print_messages(&result.messages);
    } else {
        print_messages(&[CmdMessage::info(unchanged)]);
    }
}

fn handle_list(api: &Api) -> Result<()> {
    print!(
        "{}",
        render::render_board(&api.indexed_cards(), render::terminal_width())
    );
    Ok(())
}

fn handle_add(api: &mut Api, text: String, placement: Placement) -> Result<()> {
    if text.trim().is_empty() {
        return Err(CopyCatError::Api("Card text cannot be empty".to_string()));
    }
    print_messages(&api.add_card(text, placement).messages);
    Ok(())
}

fn handle_copy(api: &Api, selector: &str) -> Result<()> {
    let id = api.resolve_str(selector)?;
    let text = api
        .card(id)
        .map(|card| card.text.clone())
        .ok_or_else(|| CopyCatError::Api(format!("No card at {}", selector)))?;

    clipboard::copy_to_clipboard(&text)?;
    print_messages(&[CmdMessage::success(format!(
        "Copied {}: {}",
        selector.trim().to_ascii_lowercase(),
        clipboard::preview(&text, 60)
    ))]);
    Ok(())
}

fn handle_delete(api: &mut Api, selectors: &[String]) -> Result<()> {
    let result = api.delete_cards(selectors)?;
    print_messages(&result.messages);
    Ok(())
}

/// `copycat edit a1 new text`: a one-card edit session.
fn handle_edit_one(api: &mut Api, selector: &str, text: Vec<String>) -> Result<()> {
    if text.is_empty() {
        return Err(CopyCatError::Api(format!(
            "Give the new text after the selector: copycat edit {} <text>",
            selector
        )));
    }
    let id = api.resolve_str(selector)?;

    let mut session = api.open_edit_session();
    session.set_buffered_text(id, text.join(" "));
    print_messages(&api.commit_edits(session).messages);
    Ok(())
}

/// `copycat edit`: every card in $EDITOR, committed as one session.
fn handle_edit_all(api: &mut Api) -> Result<()> {
    if api.is_empty() {
        print_messages(&[CmdMessage::info(render::EMPTY_MESSAGE)]);
        return Ok(());
    }

    let cards = api.indexed_cards();
    let mut session = api.open_edit_session();
    let initial = editor::to_buffer(&cards);

    let edited = match editor::edit_buffer(&initial) {
        Ok(Some(edited)) => edited,
        Ok(None) => {
            session.cancel();
            print_messages(&[CmdMessage::info("No changes, edit cancelled")]);
            return Ok(());
        }
        Err(e) => {
            session.cancel();
            return Err(e);
        }
    };

    let edits = match editor::match_edits(&cards, editor::from_buffer(&edited)) {
        Ok(edits) => edits,
        Err(e) => {
            session.cancel();
            return Err(e);
        }
    };
    for (id, text) in edits {
        session.set_buffered_text(id, text);
    }

    print_messages(&api.commit_edits(session).messages);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_forces_debug() {
        let config = CopyCatConfig::default();
        assert_eq!(log_level(true, &config), "debug");
        assert_eq!(log_level(false, &config), "warn");
    }

    #[test]
    fn configured_level_is_used() {
        let config = CopyCatConfig {
            log_level: "Info".to_string(),
            ..Default::default()
        };
        assert_eq!(log_level(false, &config), "info");
    }
}
