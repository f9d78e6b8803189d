pub mod error;
pub use error::Error;

pub mod tokenizer;
pub use tokenizer::Tokenizer;

pub mod porter_stemmer;
pub use porter_stemmer::{PorterStemmer, StemResult, StemStep};

pub mod ngram_model;
pub use ngram_model::{generate_ngrams, NgramModel};

pub mod ngram_evaluator;
pub use ngram_evaluator::{evaluate_ngram, Estimator, EvaluationTrace, GramTrace};

pub mod grammar;
pub use grammar::{CnfGrammar, Grammar, ParseTree};

pub mod cyk_parser;
pub use cyk_parser::{parse_cyk, Backpointer, CykCell, CykChart, CykResult};

pub mod top_down_parser;
pub use top_down_parser::{parse_top_down, TopDownResult};

pub mod sentiment;
pub use sentiment::{
    SentimentAnalyzer, SentimentConfig, SentimentLabel, SentimentLexicon, SentimentResult,
};
