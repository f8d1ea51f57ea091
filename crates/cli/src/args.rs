// crates/cli/src/args.rs
use clap::{Parser, ValueHint};
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "text_stats",
    about = "Simple text statistics",
    long_about = "Simple text statistics.\n\n\
                  Prints lines, words, characters and the top 5 most common words.\n\
                  If no file is provided, reads from standard input.",
    disable_version_flag = true
)]
pub struct Args {
    /// Path to text file. If omitted, read from stdin.
    #[arg(value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub path: Option<PathBuf>,
}
