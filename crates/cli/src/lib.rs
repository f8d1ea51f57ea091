// crates/cli/src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod presentation;

use crate::args::Args;
use crate::error::Result;
use text_stats_engine::config::Config;

/// Run one invocation: prompt if needed, aggregate, then print the report.
///
/// # Errors
///
/// Returns an error if the input cannot be read or stdout cannot be written.
pub fn run(args: Args) -> Result<()> {
    let config = Config::from(args);

    if config.input.is_interactive() {
        presentation::print_prompt()?;
    }

    let stats = text_stats_engine::run(&config)?;
    presentation::print_report(&stats)?;
    Ok(())
}
