use classic_nlp::{
    SentimentAnalyzer, SentimentLabel, SentimentLexicon, DEFAULT_SENTIMENT_CONFIG,
};
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn demo_lexicon() -> SentimentLexicon {
    SentimentLexicon::new(
        ["amazing", "outstanding", "incredible", "happy"]
            .map(String::from),
        ["terrible", "awful", "sad"].map(String::from),
    )
}

#[cfg(test)]
mod analyzer_tests {
    use super::*;

    #[test]
    fn test_positive_document() {
        let analyzer = SentimentAnalyzer::new(demo_lexicon(), DEFAULT_SENTIMENT_CONFIG);
        let result = analyzer.analyze("This phone is amazing and I am so happy with it!");
        assert_eq!(result.label, SentimentLabel::Positive);
        assert!((result.score - 1.0).abs() < 1e-12);
        assert_eq!(result.positive_matches, vec!["amazing", "happy"]);
        assert!(result.negative_matches.is_empty());
    }

    #[test]
    fn test_negative_document() {
        let analyzer = SentimentAnalyzer::new(demo_lexicon(), DEFAULT_SENTIMENT_CONFIG);
        let result = analyzer.analyze("What a terrible, awful day.");
        assert_eq!(result.label, SentimentLabel::Negative);
        assert!(result.score < 0.0);
    }

    #[test]
    fn test_low_emotional_density_stays_neutral() {
        let analyzer = SentimentAnalyzer::new(demo_lexicon(), DEFAULT_SENTIMENT_CONFIG);
        // One emotional word out of 25 is below the 5% density threshold.
        let filler = "word ".repeat(24);
        let result = analyzer.analyze(&format!("{}amazing", filler));
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.positive_matches.len(), 1);
    }

    #[test]
    fn test_balanced_polarity_stays_neutral() {
        let analyzer = SentimentAnalyzer::new(demo_lexicon(), DEFAULT_SENTIMENT_CONFIG);
        let result = analyzer.analyze("amazing but terrible");
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_empty_text_is_neutral_with_zero_confidence() {
        let analyzer = SentimentAnalyzer::new(demo_lexicon(), DEFAULT_SENTIMENT_CONFIG);
        let result = analyzer.analyze("");
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.confidence, 0.0);
    }
}

#[cfg(test)]
mod lexicon_tests {
    use super::*;

    #[test]
    fn test_load_from_csv() {
        let lexicon = SentimentLexicon::from_csv_path(fixture("sentiment_words.csv"))
            .expect("fixture lexicon loads");
        assert!(lexicon.is_positive("amazing"));
        assert!(lexicon.is_negative("sad"));
        assert!(!lexicon.is_positive("sad"));

        // Cross-check against the raw rows.
        let rows = test_utils::load_sentiment_rows(&fixture("sentiment_words.csv"))
            .expect("fixture rows load");
        assert_eq!(lexicon.len(), rows.len());
    }

    #[test]
    fn test_loaded_lexicon_classifies_demo_text() {
        let lexicon = SentimentLexicon::from_csv_path(fixture("sentiment_words.csv"))
            .expect("fixture lexicon loads");
        let analyzer = SentimentAnalyzer::new(lexicon, DEFAULT_SENTIMENT_CONFIG);
        let result = analyzer.analyze(
            "This new smartphone is absolutely amazing! The camera quality is outstanding \
             and the battery life is incredible. I'm so happy with this purchase!",
        );
        assert_eq!(result.label, SentimentLabel::Positive);
    }

    #[test]
    fn test_unknown_polarity_is_an_error() {
        let err = SentimentLexicon::from_csv_path(fixture("bad_sentiment_words.csv")).unwrap_err();
        assert!(err.to_string().contains("meh"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(SentimentLexicon::from_csv_path(fixture("does_not_exist.csv")).is_err());
    }
}
