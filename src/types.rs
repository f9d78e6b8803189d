use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are the basic units consumed by every
/// algorithm in this crate; the tokenizer produces them and everything else reads them.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// An n-gram key: `n` tokens joined by single spaces, e.g. `"the cat"` for a bigram.
pub type Gram = String;

/// A grammar symbol (nonterminal such as `"NP"`, or a terminal word in the general grammar).
pub type Symbol = String;

/// Mapping from an n-gram key to the number of times it occurred in training.
pub type GramCountMap = HashMap<Gram, usize>;

/// Counts-of-counts table: maps an observed count value `c` to the number of distinct
/// n-grams that occurred exactly `c` times in training. Used by the Good-Turing estimator.
pub type CountsOfCounts = HashMap<usize, usize>;

/// Mapping from a word to its occurrence count within a document.
pub type WordFrequencyMap = HashMap<Token, usize>;
