use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// A grammar referenced an undefined symbol or was otherwise malformed.
    GrammarError(String),
    /// A sentiment lexicon file could not be read or contained invalid rows.
    LexiconError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::GrammarError(msg) => write!(f, "Grammar Error: {}", msg),
            Error::LexiconError(msg) => write!(f, "Lexicon Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::LexiconError(err.to_string())
    }
}
