use crate::types::{CountsOfCounts, Gram, GramCountMap, Token};
use log::debug;
use std::collections::HashSet;

/// Frequency model over a training token sequence.
///
/// Built once per training corpus and read-only afterward. No smoothing happens here;
/// smoothing is a property of the evaluator, not the model.
///
/// Invariant for `n > 1`: the counts of all grams sharing an `(n-1)`-token prefix sum to
/// that prefix's entry in `prefix_counts`.
#[derive(Debug, Clone)]
pub struct NgramModel {
    /// Window width the model was built with.
    pub n: usize,
    /// Occurrence count per n-gram key (tokens joined by single spaces).
    pub counts: GramCountMap,
    /// Occurrence count per `(n-1)`-token prefix key. Empty when `n == 1`.
    pub prefix_counts: GramCountMap,
    /// Length of the training token sequence.
    pub total_tokens: usize,
    /// Distinct unigrams seen in training.
    pub vocabulary: HashSet<Token>,
}

impl NgramModel {
    /// Slides a window of width `n` across the training tokens and counts every n-gram
    /// and, for `n > 1`, its prefix. `n` is clamped to at least 1.
    pub fn build(tokens: &[Token], n: usize) -> Self {
        let n = n.max(1);
        let mut counts = GramCountMap::new();
        let mut prefix_counts = GramCountMap::new();

        for window in tokens.windows(n) {
            let gram = window.join(" ");
            *counts.entry(gram).or_insert(0) += 1;
            if n > 1 {
                let prefix = window[..n - 1].join(" ");
                *prefix_counts.entry(prefix).or_insert(0) += 1;
            }
        }

        let vocabulary: HashSet<Token> = tokens.iter().cloned().collect();
        debug!(
            "built {}-gram model: {} types over {} tokens, V = {}",
            n,
            counts.len(),
            tokens.len(),
            vocabulary.len()
        );

        NgramModel {
            n,
            counts,
            prefix_counts,
            total_tokens: tokens.len(),
            vocabulary,
        }
    }

    pub fn count(&self, gram: &str) -> usize {
        self.counts.get(gram).copied().unwrap_or(0)
    }

    pub fn prefix_count(&self, prefix: &str) -> usize {
        self.prefix_counts.get(prefix).copied().unwrap_or(0)
    }

    /// Total number of n-gram instances observed in training (the `N` of Good-Turing).
    pub fn total_ngrams(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct n-gram types observed in training.
    pub fn observed_types(&self) -> usize {
        self.counts.len()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Derives the counts-of-counts table `N_c` from the model's counts.
    pub fn counts_of_counts(&self) -> CountsOfCounts {
        let mut table = CountsOfCounts::new();
        for &c in self.counts.values() {
            *table.entry(c).or_insert(0) += 1;
        }
        table
    }

    /// The `k` most frequent n-grams, count-descending then key-ascending, so the
    /// listing is deterministic across runs.
    pub fn top_ngrams(&self, k: usize) -> Vec<(Gram, usize)> {
        let mut entries: Vec<(Gram, usize)> = self
            .counts
            .iter()
            .map(|(gram, &count)| (gram.clone(), count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(k);
        entries
    }
}

/// All width-`n` windows of the token sequence, joined by single spaces.
///
/// Returns an empty vector when the sequence is shorter than `n`.
pub fn generate_ngrams(tokens: &[Token], n: usize) -> Vec<Gram> {
    let n = n.max(1);
    tokens.windows(n).map(|w| w.join(" ")).collect()
}
