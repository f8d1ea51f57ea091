// crates/engine/src/stats.rs
use crate::error::Result;
use crate::tokenizer;
use hashbrown::HashMap;
use std::cmp::Reverse;

/// Number of entries shown in the frequency ranking.
pub const TOP_WORDS: usize = 5;

/// One ranked entry of the frequency table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    count: usize,
    first_seen: usize,
}

/// Token → occurrence count, remembering the order tokens first appeared in.
#[derive(Debug, Clone, Default)]
pub struct WordFrequencies {
    entries: HashMap<String, Entry>,
}

impl WordFrequencies {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, word: String) {
        let next = self.entries.len();
        self.entries
            .entry(word)
            .or_insert(Entry {
                count: 0,
                first_seen: next,
            })
            .count += 1;
    }

    #[must_use]
    pub fn get(&self, word: &str) -> usize {
        self.entries.get(word).map_or(0, |e| e.count)
    }

    /// Distinct tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.values().map(|e| e.count).sum()
    }

    /// The `n` most frequent tokens, count descending.
    ///
    /// Equal counts are ordered by first occurrence in the input, so the
    /// ranking is fully deterministic.
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<WordCount> {
        let mut ranked: Vec<_> = self.entries.iter().collect();
        ranked.sort_unstable_by_key(|(_, e)| (Reverse(e.count), e.first_seen));
        ranked
            .into_iter()
            .take(n)
            .map(|(word, e)| WordCount {
                word: word.clone(),
                count: e.count,
            })
            .collect()
    }
}

/// Statistics Snapshot handed from the aggregator to the reporter.
#[derive(Debug, Clone, Default)]
pub struct TextStats {
    pub lines: usize,
    pub words: usize,
    pub chars: usize,
    pub frequencies: WordFrequencies,
}

impl TextStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one line (terminator included) into the running totals.
    pub fn record_line(&mut self, line: &str) {
        self.lines += 1;
        self.chars += bytecount::num_chars(line.as_bytes());
        for token in tokenizer::tokens(line) {
            self.words += 1;
            self.frequencies.record(token);
        }
    }

    /// Consume a line sequence in one pass.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error produced by `lines`.
    pub fn from_lines<I>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<String>>,
    {
        lines.into_iter().try_fold(Self::new(), |mut stats, line| {
            stats.record_line(&line?);
            Ok(stats)
        })
    }

    #[must_use]
    pub fn top_words(&self) -> Vec<WordCount> {
        self.frequencies.top(TOP_WORDS)
    }
}
