// crates/engine/src/lib.rs
pub mod config;
pub mod error;
pub mod source;
pub mod stats;
pub mod tokenizer;

use crate::config::Config;
use crate::error::Result;
use crate::stats::TextStats;

/// Read the configured input to the end and aggregate its statistics.
///
/// Nothing is returned until the whole input has been consumed, so a read
/// failure never yields partial statistics.
///
/// # Errors
///
/// Returns an error if the input cannot be opened or a read fails.
pub fn run(config: &Config) -> Result<TextStats> {
    log::debug!("reading from {}", config.input);
    let lines = config.input.open()?;
    let stats = TextStats::from_lines(lines)?;
    log::debug!(
        "aggregated {} lines, {} words, {} distinct",
        stats.lines,
        stats.words,
        stats.frequencies.len()
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigBuilder;
    use crate::source::InputSource;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn run_reads_configured_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "One two\r\ntwo THREE three three").unwrap();

        let config = ConfigBuilder::default()
            .input(InputSource::File(file.path().to_path_buf()))
            .build()
            .unwrap();
        let stats = run(&config).unwrap();

        assert_eq!(stats.lines, 2);
        assert_eq!(stats.words, 6);
        assert_eq!(stats.chars, 29);
        assert_eq!(stats.top_words()[0].word, "three");
    }

    #[test]
    fn run_fails_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            input: InputSource::File(dir.path().join("nope.txt")),
        };
        let err = run(&config).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn run_fails_on_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            input: InputSource::File(dir.path().to_path_buf()),
        };
        assert!(run(&config).is_err());
    }
}
