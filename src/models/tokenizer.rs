use crate::types::Token;

/// Normalizes raw text into lowercase word tokens.
///
/// Every downstream algorithm in this crate consumes the output of this tokenizer;
/// components never call each other directly otherwise.
#[derive(Copy, Clone, Debug, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Tokenizer
    }

    /// Tokenizer function to split the text into individual tokens.
    ///
    /// Lowercases the input, replaces every character that is not alphanumeric or an
    /// underscore with a space, splits on whitespace, and drops empty pieces. Total and
    /// deterministic: blank input yields an empty vector, never an error.
    ///
    /// Note: the output is idempotent under re-tokenization when joined by single spaces.
    pub fn tokenize(self, text: &str) -> Vec<Token> {
        text.to_lowercase()
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '_' {
                    c
                } else {
                    ' '
                }
            })
            .collect::<String>()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}
