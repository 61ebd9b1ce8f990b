//! # Copycat CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/copycatapp/`: Core library with UI-agnostic logic (cards, columns,
//!   edit sessions, persistence)
//! - `crates/copycat/`: This CLI tool, depends on `copycatapp`
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/copycat/src/cli/)                        │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Startup + dispatch (commands.rs)                         │
//! │  - Two-column rendering (render.rs)                         │
//! │  - Clipboard (clipboard.rs) and $EDITOR (editor.rs)         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/copycatapp/src/api.rs)                   │
//! │  - Resolves selectors (a1, b2) to card ids                  │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Approach
//!
//! - Argument parsing and rendering have unit tests next to the code.
//! - `tests/cli_e2e.rs` runs the real binary against a throwaway `COPYCAT_HOME`.

mod cli;
mod clipboard;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
