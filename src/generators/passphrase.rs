// src/generators/passphrase.rs
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::models::PassphraseOptions;

// Symbols eligible for the special-character suffix
const SPECIAL_CHARS: &[char] = &['#', '!'];

#[derive(Debug, Error)]
pub enum PassphraseError {
    #[error("need at least 2 words to build a passphrase, got {0}")]
    InsufficientWords(usize),
}

/// Build a passphrase from the supplied word list.
///
/// Two words are used: with exactly two available they are taken in list
/// order, with more available a random pair is drawn (keeping list order).
/// Each word is capitalized and the words are joined with hyphens. Suffixes
/// are appended per `options`, the special character always last.
pub fn generate_passphrase(
    words: &[String],
    options: &PassphraseOptions,
) -> Result<String, PassphraseError> {
    if words.len() < 2 {
        return Err(PassphraseError::InsufficientWords(words.len()));
    }

    let mut rng = rand::thread_rng();

    let picked: Vec<&String> = if words.len() == 2 {
        words.iter().collect()
    } else {
        let mut indices = rand::seq::index::sample(&mut rng, words.len(), 2).into_vec();
        indices.sort_unstable();
        indices.into_iter().map(|i| &words[i]).collect()
    };

    let mut passphrase = picked
        .iter()
        .map(|word| capitalize(word))
        .collect::<Vec<String>>()
        .join("-")
        .replace(' ', "-");

    if options.add_number {
        passphrase.push_str(&format!("-{:02}", rng.gen_range(0..100)));
    }

    if options.add_special {
        let symbol = SPECIAL_CHARS.choose(&mut rng).copied().unwrap_or('#');
        passphrase.push('-');
        passphrase.push(symbol);
    }

    Ok(passphrase)
}

// Uppercase the first character, leave the rest alone
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
