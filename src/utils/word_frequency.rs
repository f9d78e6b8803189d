use crate::types::{Token, WordFrequencyMap};
use crate::utils::is_stop_word;

/// Counts occurrences per word, skipping stop words and tokens that are not purely
/// alphabetic (numbers, underscored identifiers).
pub fn word_frequencies(tokens: &[Token]) -> WordFrequencyMap {
    let mut frequencies = WordFrequencyMap::new();
    for token in tokens {
        if is_stop_word(token) || !token.chars().all(|c| c.is_alphabetic()) {
            continue;
        }
        *frequencies.entry(token.clone()).or_insert(0) += 1;
    }
    frequencies
}
