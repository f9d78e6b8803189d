/// Common English function words that carry little topical content.
///
/// Word-frequency counting skips these so that the counts surface content words
/// rather than grammatical glue.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should",
];
