mod constants;
pub mod models;
pub use constants::STOP_WORDS;
pub use models::{
    evaluate_ngram, generate_ngrams, parse_cyk, parse_top_down, CnfGrammar, CykResult, Error,
    Estimator, EvaluationTrace, Grammar, NgramModel, ParseTree, PorterStemmer, SentimentAnalyzer,
    SentimentConfig, SentimentLabel, SentimentLexicon, SentimentResult, StemResult, StemStep,
    Tokenizer, TopDownResult,
};
pub mod config;
pub mod types;
pub mod utils;
pub use config::DEFAULT_SENTIMENT_CONFIG;
pub use types::{CountsOfCounts, Gram, Symbol, Token, WordFrequencyMap};

use types::TokenRef;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Normalizes raw text into lowercase word tokens. See [`Tokenizer::tokenize`].
pub fn tokenize(text: &str) -> Vec<Token> {
    Tokenizer::new().tokenize(text)
}

/// Stems a word with the Porter cascade, returning the stem and the per-step trace.
pub fn stem(word: &TokenRef) -> StemResult {
    PorterStemmer::new().stem(word)
}

/// Builds an unsmoothed n-gram frequency model over a training token sequence.
pub fn build_ngram_model(tokens: &[Token], n: usize) -> NgramModel {
    NgramModel::build(tokens, n)
}
