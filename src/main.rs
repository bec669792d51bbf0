use std::env;

use serde::Serialize;
use tracing::info;
#[macro_use]
extern crate text_io;

use crate::boggle::{Error, WordSearchGame};

mod boggle;

const DEFAULT_MIN_LENGTH: usize = 3;

#[derive(Debug, Serialize)]
struct FoundWord {
    word: String,
    path: Vec<usize>,
}

#[derive(Debug, Serialize)]
struct Solution {
    words: Vec<FoundWord>,
    total_score: i32,
}

/// Dumps every valid word, its path and the total score as JSON.
fn solve_to_json(game: &WordSearchGame, min_length: usize) -> Result<String, Error> {
    let words = game.all_valid_words(min_length)?;
    let total_score = game.score_words(&words, min_length)?;
    let words = words
        .into_iter()
        .map(|word| {
            let path = game.is_on_board(&word)?;
            Ok(FoundWord { word, path })
        })
        .collect::<Result<Vec<_>, Error>>()?;
    Ok(serde_json::to_string_pretty(&Solution { words, total_score })?)
}

fn interact(game: &WordSearchGame) -> Result<(), Error> {
    loop {
        println!("Enter a word to check (empty line to quit):");
        let input: String = read!("{}\n");
        let word = input.trim();
        if word.is_empty() {
            return Ok(());
        }
        if !game.is_valid_word(word)? {
            println!("{} is not in the lexicon", word);
            continue;
        }
        let path = game.is_on_board(word)?;
        if path.is_empty() {
            println!("{} is in the lexicon but not on the board", word);
        } else {
            let score = game.score_words([word], DEFAULT_MIN_LENGTH)?;
            println!("{} is on the board at {:?} ({} points)", word, path, score);
        }
    }
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let mut lexicon_path = None;
    let mut board_path = None;
    let mut json = false;
    for arg in env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else if lexicon_path.is_none() {
            lexicon_path = Some(arg);
        } else {
            board_path = Some(arg);
        }
    }
    let lexicon_path = lexicon_path.unwrap_or_else(|| "words_small.txt".to_string());

    let mut game = WordSearchGame::new();
    info!(path = %lexicon_path, "loading lexicon");
    game.load_lexicon(&lexicon_path)?;
    if let Some(path) = board_path {
        game.load_board(&path)?;
    }

    if json {
        println!("{}", solve_to_json(&game, DEFAULT_MIN_LENGTH)?);
        return Ok(());
    }

    println!("{}", game.board());
    let words = game.all_valid_words(DEFAULT_MIN_LENGTH)?;
    let score = game.score_words(&words, DEFAULT_MIN_LENGTH)?;
    println!("Found {} words worth {} points total:", words.len(), score);
    for word in &words {
        println!("  {}", word);
    }

    interact(&game)
}
