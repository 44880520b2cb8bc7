use crate::parsers::stop_words::ENGLISH_STOP_WORDS;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"));

static STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ENGLISH_STOP_WORDS.iter().copied().collect());

/// Splits text into lowercase word tokens, dropping stop words.
///
/// A token is a run of two or more word characters. Tokens keep their source
/// order.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_REGEX
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|word| !is_stop_word(word))
        .map(str::to_string)
        .collect()
}

/// Returns true if the word is in the English stop-word list
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Counts tokens and orders them by descending count.
///
/// Terms with equal counts stay in the order they were first seen.
pub fn frequency_rank<S: AsRef<str>>(tokens: &[S]) -> Vec<(String, usize)> {
    let mut ranked: Vec<(String, usize)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for token in tokens {
        let token = token.as_ref();
        match positions.get(token) {
            Some(&index) => ranked[index].1 += 1,
            None => {
                positions.insert(token, ranked.len());
                ranked.push((token.to_string(), 1));
            }
        }
    }

    // stable: ties keep first-seen order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Terms whose count is strictly greater than `limit`
pub fn terms_above(text: &str, limit: usize) -> Vec<String> {
    frequency_rank(&tokenize(text))
        .into_iter()
        .filter(|(_, count)| *count > limit)
        .map(|(term, _)| term)
        .collect()
}
