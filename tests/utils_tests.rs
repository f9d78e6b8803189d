use classic_nlp::tokenize;
use classic_nlp::utils::{is_stop_word, word_frequencies};

#[cfg(test)]
mod utils_tests {
    use super::*;

    #[test]
    fn test_stop_words_are_case_insensitive() {
        assert!(is_stop_word("the"));
        assert!(is_stop_word("The"));
        assert!(is_stop_word("AND"));
        assert!(!is_stop_word("cat"));
    }

    #[test]
    fn test_word_frequencies_skip_stop_words() {
        let tokens = tokenize("the cat and the other cat");
        let frequencies = word_frequencies(&tokens);
        assert_eq!(frequencies.get("cat"), Some(&2));
        assert_eq!(frequencies.get("other"), Some(&1));
        assert!(!frequencies.contains_key("the"));
        assert!(!frequencies.contains_key("and"));
    }

    #[test]
    fn test_word_frequencies_skip_non_alphabetic_tokens() {
        let tokens = tokenize("version 42 of hello_world shipped");
        let frequencies = word_frequencies(&tokens);
        assert!(!frequencies.contains_key("42"));
        assert!(!frequencies.contains_key("hello_world"));
        assert_eq!(frequencies.get("version"), Some(&1));
        assert_eq!(frequencies.get("shipped"), Some(&1));
    }

    #[test]
    fn test_word_frequencies_empty_input() {
        assert!(word_frequencies(&[]).is_empty());
    }
}
