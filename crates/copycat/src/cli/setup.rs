use clap::{Parser, Subcommand, ValueEnum};
use copycatapp::model::{Column, Placement};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format for releases: "v0.3.0"
/// Format for dev builds: "v0.3.0\ndev: abc1234 2024-01-15 14:30"
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "copycat",
    bin_name = "copycat",
    version = get_version(),
    disable_help_subcommand = true,
    after_help = "Cards are addressed by column letter and position: a1 is the top of the left column, b2 the second card on the right."
)]
#[command(about = "Two columns of snippets, each one command away from the clipboard", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this data file instead of the configured one
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColumnArg {
    /// Left column
    A,
    /// Right column
    B,
}

impl From<ColumnArg> for Column {
    fn from(arg: ColumnArg) -> Self {
        match arg {
            ColumnArg::A => Column::Left,
            ColumnArg::B => Column::Right,
        }
    }
}

/// Auto-balance unless a column was asked for.
pub fn placement(column: Option<ColumnArg>) -> Placement {
    column.map_or(Placement::Auto, |c| Placement::Column(c.into()))
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show both columns (default)
    #[command(alias = "ls", display_order = 1)]
    List,

    /// Add a card, to the shorter column unless --column is given
    #[command(alias = "n", display_order = 2)]
    Add {
        /// Put the card at the bottom of this column
        #[arg(short, long, value_enum)]
        column: Option<ColumnArg>,

        /// Card text (words are joined with spaces)
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Copy a card's text to the clipboard
    #[command(alias = "c", display_order = 3)]
    Copy {
        /// Card selector (e.g. a1)
        selector: String,
    },

    /// Delete one or more cards
    #[command(alias = "rm", display_order = 4)]
    Delete {
        /// Card selectors (e.g. a1 b2)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Move a card one place up in its column
    #[command(display_order = 5)]
    Up {
        /// Card selector (e.g. a2)
        selector: String,
    },

    /// Move a card one place down in its column
    #[command(display_order = 6)]
    Down {
        /// Card selector (e.g. a1)
        selector: String,
    },

    /// Move a card to the top of the other column
    #[command(display_order = 7)]
    Switch {
        /// Card selector (e.g. b3)
        selector: String,
    },

    /// Edit all cards in $EDITOR, or one card from the command line
    #[command(alias = "e", display_order = 8)]
    Edit {
        /// Card to edit. Without it every card opens in the editor
        selector: Option<String>,

        /// New text for the selected card
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Empty the clipboard
    #[command(display_order = 9)]
    ClearClipboard,

    /// Print the data file location
    #[command(display_order = 10)]
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_command_means_list() {
        assert!(parse(&["copycat"]).command.is_none());
    }

    #[test]
    fn add_joins_words_and_takes_a_column() {
        let cli = parse(&["copycat", "add", "-c", "b", "call", "mom"]);
        match cli.command {
            Some(Commands::Add { column, text }) => {
                assert_eq!(column, Some(ColumnArg::B));
                assert_eq!(text.join(" "), "call mom");
                assert_eq!(placement(column), Placement::Column(Column::Right));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn text_may_start_with_a_hyphen() {
        match parse(&["copycat", "add", "-5", "degrees", "outside"]).command {
            Some(Commands::Add { column, text }) => {
                assert_eq!(column, None);
                assert_eq!(text.join(" "), "-5 degrees outside");
            }
            other => panic!("unexpected {:?}", other),
        }
        match parse(&["copycat", "add", "-c", "a", "--", "-x"]).command {
            Some(Commands::Add { column, text }) => {
                assert_eq!(column, Some(ColumnArg::A));
                assert_eq!(text, vec!["-x"]);
            }
            other => panic!("unexpected {:?}", other),
        }
        match parse(&["copycat", "edit", "a1", "-1", "left"]).command {
            Some(Commands::Edit { selector, text }) => {
                assert_eq!(selector.as_deref(), Some("a1"));
                assert_eq!(text, vec!["-1", "left"]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn add_without_column_is_auto() {
        assert_eq!(placement(None), Placement::Auto);
    }

    #[test]
    fn aliases_resolve() {
        assert!(matches!(
            parse(&["copycat", "ls"]).command,
            Some(Commands::List)
        ));
        assert!(matches!(
            parse(&["copycat", "rm", "a1", "b1"]).command,
            Some(Commands::Delete { selectors }) if selectors == ["a1", "b1"]
        ));
        assert!(matches!(
            parse(&["copycat", "c", "a1"]).command,
            Some(Commands::Copy { selector }) if selector == "a1"
        ));
    }

    #[test]
    fn edit_with_and_without_selector() {
        assert!(matches!(
            parse(&["copycat", "edit"]).command,
            Some(Commands::Edit { selector: None, ref text }) if text.is_empty()
        ));
        match parse(&["copycat", "edit", "a1", "new", "words"]).command {
            Some(Commands::Edit { selector, text }) => {
                assert_eq!(selector.as_deref(), Some("a1"));
                assert_eq!(text, vec!["new", "words"]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn global_flags_work_after_the_command() {
        let cli = parse(&["copycat", "path", "--data", "/tmp/x.json", "-v"]);
        assert_eq!(cli.data, Some(PathBuf::from("/tmp/x.json")));
        assert!(cli.verbose);
    }

    #[test]
    fn add_requires_text() {
        assert!(Cli::try_parse_from(["copycat", "add"]).is_err());
    }
}
