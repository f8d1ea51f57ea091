// crates/cli/src/presentation.rs
use std::fmt::Write as _;
use std::io::{self, Write};
use text_stats_engine::stats::TextStats;

pub const STDIN_PROMPT: &str =
    "Reading from stdin. Type/paste text and press Ctrl-D (Unix) or Ctrl-Z (Windows) to end.";

/// Print the end-of-input hint and flush it so it shows before blocking on stdin.
pub fn print_prompt() -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{STDIN_PROMPT}")?;
    out.flush()
}

pub fn print_report(stats: &TextStats) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_report(&mut out, stats)?;
    out.flush()
}

/// Write the fixed report layout: three totals, then the top-5 ranking.
pub fn write_report<W: Write>(out: &mut W, stats: &TextStats) -> io::Result<()> {
    writeln!(out, "Lines: {}", stats.lines)?;
    writeln!(out, "Words: {}", stats.words)?;
    writeln!(out, "Characters: {}", stats.chars)?;
    writeln!(out, "Top 5 words:")?;
    for entry in stats.top_words() {
        writeln!(out, "  {}: {}", quote(&entry.word), entry.count)?;
    }
    Ok(())
}

/// Quote a token the way Python's `repr` shows a string.
///
/// Single quotes unless the token contains `'` and no `"`. Backslashes, the
/// chosen quote and non-printable characters are escaped.
#[must_use]
pub fn quote(word: &str) -> String {
    let delim = if word.contains('\'') && !word.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut quoted = String::with_capacity(word.len() + 2);
    quoted.push(delim);
    for c in word.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\t' => quoted.push_str("\\t"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            c if c == delim => {
                quoted.push('\\');
                quoted.push(c);
            }
            c if !is_printable(c) => {
                let code = u32::from(c);
                // Writing to a String cannot fail.
                let _ = match code {
                    0..=0xff => write!(quoted, "\\x{code:02x}"),
                    0x100..=0xffff => write!(quoted, "\\u{code:04x}"),
                    _ => write!(quoted, "\\U{code:08x}"),
                };
            }
            c => quoted.push(c),
        }
    }
    quoted.push(delim);
    quoted
}

/// False for control characters and the common invisible format characters
/// (soft hyphen, zero-width and bidi marks, word joiners, BOM).
fn is_printable(c: char) -> bool {
    !(c.is_control()
        || matches!(
            c,
            '\u{ad}'
                | '\u{200b}'..='\u{200f}'
                | '\u{202a}'..='\u{202e}'
                | '\u{2060}'..='\u{2064}'
                | '\u{feff}'
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(text: &str) -> String {
        let mut stats = TextStats::new();
        for line in text.split_inclusive('\n') {
            stats.record_line(line);
        }
        let mut out = Vec::new();
        write_report(&mut out, &stats).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn report_layout() {
        assert_eq!(
            report("the cat sat on the mat\nthe cat ran\n"),
            "Lines: 2\n\
             Words: 9\n\
             Characters: 35\n\
             Top 5 words:\n  \
             'the': 3\n  \
             'cat': 2\n  \
             'sat': 1\n  \
             'on': 1\n  \
             'mat': 1\n"
        );
    }

    #[test]
    fn empty_report_has_header_only() {
        assert_eq!(
            report(""),
            "Lines: 0\nWords: 0\nCharacters: 0\nTop 5 words:\n"
        );
    }

    #[test]
    fn report_is_capped_at_five_entries() {
        let out = report("a b c d e f g\n");
        assert_eq!(out.lines().filter(|l| l.starts_with("  ")).count(), 5);
        assert!(out.ends_with("  'e': 1\n"));
    }

    #[test]
    fn quote_prefers_single_quotes() {
        assert_eq!(quote("word"), "'word'");
        assert_eq!(quote("café"), "'café'");
    }

    #[test]
    fn quote_switches_to_double_quotes_for_apostrophes() {
        assert_eq!(quote("don't"), "\"don't\"");
        assert_eq!(quote("it's\"x"), "'it\\'s\"x'");
    }

    #[test]
    fn quote_escapes_backslash_and_controls() {
        assert_eq!(quote("a\\b"), "'a\\\\b'");
        assert_eq!(quote("a\u{0}b"), "'a\\x00b'");
        assert_eq!(quote("\u{85}"), "'\\x85'");
    }

    #[test]
    fn quote_escapes_invisible_format_characters() {
        assert_eq!(quote("a\u{200b}b"), "'a\\u200bb'");
        assert_eq!(quote("\u{feff}x"), "'\\ufeffx'");
        assert_eq!(quote("soft\u{ad}"), "'soft\\xad'");
    }
}
