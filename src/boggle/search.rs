use std::collections::BTreeSet;

use super::board::Board;
use super::lexicon::Lexicon;
use super::util::Position;

/// Visitation bitmap plus the ordered path of the current recursive descent.
/// One is built per top-level start cell and discarded when that search
/// returns, so independent searches can never contaminate each other.
struct SearchState {
    visited: Vec<bool>,
    path: Vec<Position>,
    cols: usize,
}

impl SearchState {
    fn new(board: &Board) -> Self {
        Self {
            visited: vec![false; board.rows() * board.cols()],
            path: Vec::new(),
            cols: board.cols(),
        }
    }

    fn is_visited(&self, pos: Position) -> bool {
        self.visited[pos.as_index(self.cols)]
    }

    /// Marks the cell visited and appends it to the path
    fn enter(&mut self, pos: Position) {
        self.visited[pos.as_index(self.cols)] = true;
        self.path.push(pos);
    }

    /// Backtracks out of the cell so sibling branches can use it again
    fn leave(&mut self, pos: Position) {
        self.visited[pos.as_index(self.cols)] = false;
        let popped = self.path.pop();
        debug_assert_eq!(popped, Some(pos));
    }

    fn linearized(&self) -> Vec<usize> {
        self.path.iter().map(|pos| pos.as_index(self.cols)).collect()
    }
}

/// Collects every lexicon word of at least `min_length` characters that can
/// be spelled by an 8-directional path of non-repeating cells. The result is
/// lexicographically ordered and duplicate-free: two paths spelling the same
/// word contribute one entry.
pub fn enumerate_words(board: &Board, lexicon: &Lexicon, min_length: usize) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    for start in board.positions() {
        let mut partial = board.tile(start).to_string();
        if partial.chars().count() >= min_length && lexicon.contains(&partial) {
            found.insert(partial.clone());
        }
        if !lexicon.has_prefix(&partial) {
            continue;
        }
        let mut state = SearchState::new(board);
        state.enter(start);
        extend(board, lexicon, &mut state, start, &mut partial, min_length, &mut found);
        state.leave(start);
    }
    found
}

fn extend(
    board: &Board,
    lexicon: &Lexicon,
    state: &mut SearchState,
    pos: Position,
    partial: &mut String,
    min_length: usize,
    found: &mut BTreeSet<String>,
) {
    for next in board.neighbors(pos) {
        if state.is_visited(next) {
            continue;
        }
        let base_len = partial.len();
        partial.push_str(board.tile(next));
        // Cut the branch as soon as no lexicon word starts with the partial
        // string; no extension can ever recover.
        if lexicon.has_prefix(partial) {
            state.enter(next);
            if partial.chars().count() >= min_length && lexicon.contains(partial) {
                found.insert(partial.clone());
            }
            extend(board, lexicon, state, next, partial, min_length, found);
            state.leave(next);
        }
        partial.truncate(base_len);
    }
}

/// Finds one cell path spelling `word`, as linear row-major indices. Start
/// cells are scanned in row-major order and neighbors in the board's fixed
/// order, so the first path found is deterministic (and not necessarily the
/// shortest). Returns an empty vec when the word is not on the board.
pub fn locate_path(board: &Board, word: &str) -> Vec<usize> {
    let word = word.to_uppercase();
    if word.is_empty() {
        return Vec::new();
    }
    for start in board.positions() {
        let tile = board.tile(start);
        if tile == word {
            return vec![start.as_index(board.cols())];
        }
        if !word.starts_with(tile) {
            continue;
        }
        let mut state = SearchState::new(board);
        state.enter(start);
        if follow(board, &mut state, start, &word, tile.len()) {
            return state.linearized();
        }
    }
    Vec::new()
}

/// Extends the current path until `matched` bytes cover the whole word.
/// `matched` always lands on a tile boundary within `word`.
fn follow(
    board: &Board,
    state: &mut SearchState,
    pos: Position,
    word: &str,
    matched: usize,
) -> bool {
    if matched == word.len() {
        return true;
    }
    for next in board.neighbors(pos) {
        if state.is_visited(next) {
            continue;
        }
        let tile = board.tile(next);
        if word[matched..].starts_with(tile) {
            state.enter(next);
            if follow(board, state, next, word, matched + tile.len()) {
                return true;
            }
            state.leave(next);
        }
    }
    false
}
