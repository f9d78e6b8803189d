use crate::constants::STOP_WORDS;

/// Case-insensitive membership test against the built-in stop-word list.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word.to_lowercase().as_str())
}
