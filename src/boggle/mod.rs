pub mod board;
pub mod game;
pub mod lexicon;
mod search;
pub mod util;

pub use self::board::Board;
pub use self::game::WordSearchGame;
pub use self::lexicon::Lexicon;
pub use self::util::Position;

use thiserror::Error;

/// Errors reported by the solver. Preconditions are checked before any state
/// changes, so a failed call leaves the game untouched.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The flat tile array cannot form a square board, or the rows of a
    /// board file are ragged.
    #[error("invalid board shape: {0}")]
    InvalidShape(String),

    /// A query method was called before any lexicon was loaded.
    #[error("no lexicon has been loaded")]
    LexiconNotLoaded,

    #[error("could not read input source")]
    InvalidInput(#[from] std::io::Error),

    #[error("malformed JSON document")]
    Json(#[from] serde_json::Error),

    #[error("could not build lexicon set")]
    LexiconBuild(#[from] fst::Error),
}
