use std::collections::BTreeSet;
use std::path::Path;

use tracing::debug;

use super::board::Board;
use super::lexicon::Lexicon;
use super::search::{enumerate_words, locate_path};
use super::Error;

/// Ties a board and a lexicon together behind the game operations. Starts
/// with the stock board; every query validates its preconditions before
/// doing any work, so a failed call changes nothing.
pub struct WordSearchGame {
    board: Board,
    lexicon: Option<Lexicon>,
}

impl WordSearchGame {
    pub fn new() -> Self {
        Self {
            board: Board::default(),
            lexicon: None,
        }
    }

    /// Loads the lexicon from a line-oriented word list file.
    pub fn load_lexicon<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Error> {
        self.lexicon = Some(Lexicon::from_file(path)?);
        Ok(())
    }

    /// Installs an already-built lexicon.
    pub fn set_lexicon(&mut self, lexicon: Lexicon) {
        self.lexicon = Some(lexicon);
    }

    /// Replaces the board with a square grid given as a flat row-major array.
    pub fn set_board(&mut self, tiles: &[String]) -> Result<(), Error> {
        self.board = Board::from_flat(tiles)?;
        Ok(())
    }

    /// Replaces the board with one loaded from a JSON grid file.
    pub fn load_board<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Error> {
        self.board = Board::from_file(path)?;
        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    fn lexicon(&self) -> Result<&Lexicon, Error> {
        self.lexicon.as_ref().ok_or(Error::LexiconNotLoaded)
    }

    /// All lexicon words of at least `min_length` characters that appear on
    /// the board, in lexicographic order.
    pub fn all_valid_words(&self, min_length: usize) -> Result<BTreeSet<String>, Error> {
        if min_length < 1 {
            return Err(Error::InvalidArgument(
                "minimum word length must be at least 1",
            ));
        }
        let lexicon = self.lexicon()?;
        let words = enumerate_words(&self.board, lexicon, min_length);
        debug!(count = words.len(), min_length, "enumerated valid words");
        Ok(words)
    }

    /// The path realizing `word` on the board as linear row-major indices,
    /// or an empty vec when the word does not appear. The word itself does
    /// not have to be in the lexicon, but one must be loaded.
    pub fn is_on_board(&self, word: &str) -> Result<Vec<usize>, Error> {
        self.lexicon()?;
        Ok(locate_path(&self.board, word))
    }

    /// Cumulative score of the scorable words in the collection. The input
    /// is treated as a set: repeated entries count once, regardless of case.
    /// A word is scorable iff it has at least `min_length` characters, is a
    /// lexicon member and appears on the board; it is then worth one point
    /// for the minimum length plus one per extra character.
    pub fn score_words<I, S>(&self, words: I, min_length: usize) -> Result<i32, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if min_length < 1 {
            return Err(Error::InvalidArgument(
                "minimum word length must be at least 1",
            ));
        }
        let lexicon = self.lexicon()?;
        let words: BTreeSet<String> = words
            .into_iter()
            .map(|word| word.as_ref().to_uppercase())
            .collect();
        let mut score = 0;
        for word in &words {
            let length = word.chars().count();
            if length >= min_length
                && lexicon.contains(word)
                && !locate_path(&self.board, word).is_empty()
            {
                score += (length - min_length) as i32 + 1;
            }
        }
        Ok(score)
    }

    /// Whether the word is a lexicon member (case-insensitive).
    pub fn is_valid_word(&self, word: &str) -> Result<bool, Error> {
        Ok(self.lexicon()?.contains(word))
    }

    /// Whether any lexicon word starts with the prefix (case-insensitive).
    pub fn is_valid_prefix(&self, prefix: &str) -> Result<bool, Error> {
        Ok(self.lexicon()?.has_prefix(prefix))
    }
}

impl Default for WordSearchGame {
    fn default() -> Self {
        Self::new()
    }
}
