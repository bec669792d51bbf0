use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use fst::automaton::Str;
use fst::{Automaton, IntoStreamer, Set, Streamer};
use tracing::info;

use super::Error;

/// Ordered, duplicate-free set of uppercase words backed by an FST. Built
/// once and never mutated, so any number of searches can share it.
#[derive(Debug)]
pub struct Lexicon {
    set: Set<Vec<u8>>,
}

impl Lexicon {
    /// Reads a line-oriented word list. The first whitespace-separated token
    /// of each line is taken as the word (common list formats carry counts or
    /// definitions after it), uppercased and inserted.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if let Some(token) = line.split_whitespace().next() {
                words.push(token.to_uppercase());
            }
        }
        let lexicon = Self::from_words(words)?;
        info!(words = lexicon.len(), "lexicon loaded");
        Ok(lexicon)
    }

    /// Builds a lexicon from an in-memory word collection. Words are
    /// uppercased; duplicates collapse.
    pub fn from_words<I, S>(words: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // The fst builder wants sorted unique input
        let entries: BTreeSet<String> = words
            .into_iter()
            .map(|word| word.as_ref().to_uppercase())
            .filter(|word| !word.is_empty())
            .collect();
        let set = Set::from_iter(&entries)?;
        Ok(Self { set })
    }

    /// Exact membership of the uppercased word
    pub fn contains(&self, word: &str) -> bool {
        self.set.contains(word.to_uppercase())
    }

    /// True iff some lexicon word starts with the uppercased prefix. This is
    /// the pruning primitive: once it returns false for a partial string, no
    /// extension of that string can ever match.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        let prefix = prefix.to_uppercase();
        let matcher = Str::new(&prefix).starts_with();
        self.set.search(matcher).into_stream().next().is_some()
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}
