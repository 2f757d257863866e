//! Command-line argument parsing.
//!
//! Every option here also has an environment variable fallback; the actual
//! precedence handling (flag > env > default) lives in
//! `recall_core::config::resolve_app_options`.

use clap::Parser;

/// Command-line arguments for the recall CLI tool.
#[derive(Parser, Debug)]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the memories YAML file.
    ///
    /// If not provided, falls back to `RECALL_MEMORIES_FILE`, then to
    /// `~/.config/recall/memories.yml`.
    #[arg(long, short = 'm')]
    pub memories_file: Option<String>,

    /// How many characters of each command to print in the selection list.
    ///
    /// If not provided, falls back to `RECALL_COMMAND_PRINT_LENGTH`, then
    /// to 75.
    #[arg(long, short = 'w')]
    pub command_print_length: Option<usize>,

    /// Enable interactive editing of `{{name}}` placeholders after selection.
    ///
    /// Also enabled when `RECALL_EDIT_PLACEHOLDERS` is `1` or `true`.
    #[arg(long, short = 'e', action)]
    pub edit_placeholders: bool,
}
