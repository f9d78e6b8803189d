use crate::models::{Error, Tokenizer};
use crate::types::Token;
use csv::Reader;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

/// Positive/negative word lists driving sentiment classification.
///
/// Loaded once (typically from a CSV word list) and treated as immutable afterward;
/// analysis code never mutates it.
#[derive(Debug, Clone, Default)]
pub struct SentimentLexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl SentimentLexicon {
    pub fn new<P, N>(positive: P, negative: N) -> Self
    where
        P: IntoIterator<Item = String>,
        N: IntoIterator<Item = String>,
    {
        SentimentLexicon {
            positive: positive.into_iter().collect(),
            negative: negative.into_iter().collect(),
        }
    }

    /// Reads a lexicon from a CSV of `word,polarity` rows (with a header row), where
    /// polarity is `positive` or `negative`. Any other polarity value is a
    /// configuration error.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let mut reader = Reader::from_path(path.as_ref()).map_err(Error::from)?;
        let mut positive = HashSet::new();
        let mut negative = HashSet::new();

        for record in reader.records() {
            let record = record?;
            if record.len() != 2 {
                return Err(Error::LexiconError(format!(
                    "expected 'word,polarity' rows, got {:?}",
                    record
                )));
            }
            let word = record.get(0).unwrap_or("").trim().to_lowercase();
            let polarity = record.get(1).unwrap_or("").trim().to_lowercase();
            match polarity.as_str() {
                "positive" => {
                    positive.insert(word);
                }
                "negative" => {
                    negative.insert(word);
                }
                other => {
                    return Err(Error::LexiconError(format!(
                        "unknown polarity '{}' for word '{}'",
                        other, word
                    )));
                }
            }
        }

        Ok(SentimentLexicon { positive, negative })
    }

    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }
}

/// Tuning knobs for sentiment classification.
#[derive(Debug, Clone, Copy)]
pub struct SentimentConfig {
    /// Minimum fraction of emotional words before a document leaves `Neutral`.
    pub min_emotional_density: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    /// Signed polarity strength in `[-1, 1]`: (majority - minority) / emotional words.
    pub score: f64,
    /// `min(1, 2 * emotional density)`.
    pub confidence: f64,
    pub positive_matches: Vec<Token>,
    pub negative_matches: Vec<Token>,
}

/// Lexicon-driven sentiment classifier over tokenized text.
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    lexicon: SentimentLexicon,
    config: SentimentConfig,
}

impl SentimentAnalyzer {
    pub fn new(lexicon: SentimentLexicon, config: SentimentConfig) -> Self {
        SentimentAnalyzer { lexicon, config }
    }

    pub fn analyze(&self, text: &str) -> SentimentResult {
        let tokens = Tokenizer::new().tokenize(text);
        let total_words = tokens.len();

        let positive_matches: Vec<Token> = tokens
            .iter()
            .filter(|t| self.lexicon.is_positive(t))
            .cloned()
            .collect();
        let negative_matches: Vec<Token> = tokens
            .iter()
            .filter(|t| self.lexicon.is_negative(t))
            .cloned()
            .collect();

        let emotional = positive_matches.len() + negative_matches.len();
        let density = if total_words > 0 {
            emotional as f64 / total_words as f64
        } else {
            0.0
        };

        let mut label = SentimentLabel::Neutral;
        let mut score = 0.0;
        if density > self.config.min_emotional_density {
            let pos = positive_matches.len() as f64;
            let neg = negative_matches.len() as f64;
            if pos > neg {
                label = SentimentLabel::Positive;
                score = (pos - neg) / emotional as f64;
            } else if neg > pos {
                label = SentimentLabel::Negative;
                score = -((neg - pos) / emotional as f64);
            }
        }

        SentimentResult {
            label,
            score,
            confidence: (density * 2.0).min(1.0),
            positive_matches,
            negative_matches,
        }
    }
}
