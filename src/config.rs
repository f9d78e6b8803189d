use crate::models::SentimentConfig;

pub const DEFAULT_SENTIMENT_CONFIG: SentimentConfig = SentimentConfig {
    // A document needs at least 5% emotional words before it leaves "neutral".
    min_emotional_density: 0.05,
};
