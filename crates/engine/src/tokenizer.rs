// crates/engine/src/tokenizer.rs
//! Naive word tokenizer: whitespace split, edge punctuation strip, lowercase.
//!
//! Only [`PUNCTUATION`] is stripped from the edges. A piece left with nothing
//! but ASCII punctuation (`---`, `...`, `#`) is not a word and is dropped.

/// Characters stripped from both ends of every whitespace-separated piece.
pub const PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ':', ';', '"', '\'', '(', ')', '[', ']', '{', '}', '<', '>',
];

/// Lazily yield the tokens of `line` in left-to-right order.
pub fn tokens(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split(is_separator)
        .map(|piece| piece.trim_matches(PUNCTUATION))
        .filter(|word| !is_punctuation_only(word))
        .map(str::to_lowercase)
}

/// Unicode whitespace plus the ASCII file, group, record and unit separators.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Also true for the empty string.
fn is_punctuation_only(word: &str) -> bool {
    word.chars().all(|c| c.is_ascii_punctuation())
}

#[must_use]
pub fn tokenize(line: &str) -> Vec<String> {
    tokens(line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_edge_punctuation_and_lowercases() {
        assert_eq!(tokenize("Hello, world!!"), vec!["hello", "world"]);
    }

    #[test]
    fn punctuation_only_piece_yields_nothing() {
        assert!(tokenize("---!!!").is_empty());
        assert!(tokenize("--- * #").is_empty());
        assert!(tokenize("!!! ?? ...").is_empty());
        assert!(tokenize("\"()\"").is_empty());
    }

    #[test]
    fn inner_punctuation_is_kept() {
        assert_eq!(tokenize("don't e.g. (a.b)"), vec!["don't", "e.g", "a.b"]);
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(tokenize("  a\t\tb \u{3000} c\n"), vec!["a", "b", "c"]);
        assert!(tokenize(" \t \n").is_empty());
    }

    #[test]
    fn information_separators_split_words() {
        assert_eq!(tokenize("a\u{1c}b\u{1d}c\u{1e}d\u{1f}e"), vec!["a", "b", "c", "d", "e"]);
        assert_eq!(tokenize("x\u{1f}\u{1f}y"), vec!["x", "y"]);
    }

    #[test]
    fn characters_outside_the_set_survive() {
        assert_eq!(tokenize("--flag *bold* #tag"), vec!["--flag", "*bold*", "#tag"]);
    }

    #[test]
    fn unicode_case_folding() {
        assert_eq!(tokenize("ÉCOLE Straße"), vec!["école", "straße"]);
    }
}
