use crate::models::ngram_model::{generate_ngrams, NgramModel};
use crate::types::{Gram, Token};
use log::debug;

/// Probability-estimation policy applied when scoring a test sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Estimator {
    /// Unsmoothed maximum likelihood: unseen events get probability 0.
    Mle,
    /// Add-one smoothing: every event gets a strictly positive probability.
    Laplace,
    /// Global Good-Turing discounting via the counts-of-counts table.
    GoodTuring,
}

impl Estimator {
    pub fn name(self) -> &'static str {
        match self {
            Estimator::Mle => "mle",
            Estimator::Laplace => "laplace",
            Estimator::GoodTuring => "goodturing",
        }
    }
}

/// Per-window record of how one test n-gram was scored.
#[derive(Debug, Clone)]
pub struct GramTrace {
    pub gram: Gram,
    /// Raw training count of this gram.
    pub raw_count: usize,
    /// Human-readable derivation of the probability, one line per step.
    pub steps: Vec<String>,
    pub probability: f64,
}

/// Result of evaluating a test sequence under one estimator.
#[derive(Debug, Clone)]
pub struct EvaluationTrace {
    pub estimator: Estimator,
    pub grams: Vec<GramTrace>,
    /// Sum of `ln p` over the evaluated windows.
    pub log_prob_sum: f64,
    /// Number of test windows `M`. Counts every window even when MLE stops early.
    pub evaluated_grams: usize,
    /// `exp(-log_prob_sum / M)`, or `+inf` when a zero probability was hit or `M == 0`.
    pub perplexity: f64,
}

/// Scores every width-`n` window of `test_tokens` under the model and chosen estimator.
///
/// The window width comes from the model itself, so a model can never be evaluated with
/// a mismatched `n`. Zero probabilities are domain results, not errors: MLE (and the
/// Good-Turing raw-count fallback) stop evaluating at the first zero and force the
/// perplexity to `+inf`, while the remaining windows still count toward `M`.
pub fn evaluate_ngram(
    model: &NgramModel,
    test_tokens: &[Token],
    estimator: Estimator,
) -> EvaluationTrace {
    let test_grams = generate_ngrams(test_tokens, model.n);
    let m = test_grams.len();

    let counts_of_counts = model.counts_of_counts();
    let total_ngrams = model.total_ngrams();
    let v = model.vocabulary_size();
    // Theoretical n-gram type count V^n, the Laplace denominator bump and the
    // Good-Turing estimate of how many types exist at all.
    let possible_types = (v.max(1) as f64).powi(model.n as i32);
    let unseen_types = (possible_types - model.observed_types() as f64).max(0.0);
    let n1 = counts_of_counts.get(&1).copied().unwrap_or(0);

    let mut grams = Vec::with_capacity(m);
    let mut log_prob_sum = 0.0;
    let mut zero_found = false;

    for gram in &test_grams {
        let c = model.count(gram);
        let mut steps = Vec::new();

        let p = match estimator {
            Estimator::Mle => {
                let (numer, denom) = if model.n == 1 {
                    steps.push(format!("MLE: P({}) = C({}) / total tokens", gram, gram));
                    (c, model.total_tokens)
                } else {
                    let prefix = prefix_of(gram);
                    let prefix_count = model.prefix_count(&prefix);
                    steps.push(format!("MLE: P({}) = C({}) / C({})", gram, gram, prefix));
                    (c, prefix_count)
                };
                let p = if denom > 0 {
                    numer as f64 / denom as f64
                } else {
                    0.0
                };
                steps.push(format!("C = {}, denominator = {} => P = {}", numer, denom, p));
                p
            }
            Estimator::Laplace => {
                let denom_count = if model.n == 1 {
                    model.total_tokens
                } else {
                    model.prefix_count(&prefix_of(gram))
                };
                let denom = denom_count as f64 + possible_types;
                steps.push(format!(
                    "Laplace (add-1): P({}) = (C + 1) / (denominator + V^n)",
                    gram
                ));
                steps.push(format!(
                    "C = {}, denominator = {}, V^n = {}",
                    c, denom_count, possible_types
                ));
                let p = if denom > 0.0 { (c as f64 + 1.0) / denom } else { 0.0 };
                steps.push(format!("=> P = {}", p));
                p
            }
            Estimator::GoodTuring => good_turing_probability(
                gram,
                c,
                total_ngrams,
                n1,
                unseen_types,
                &counts_of_counts,
                &mut steps,
                &mut zero_found,
            ),
        };

        match estimator {
            Estimator::Mle => {
                if p == 0.0 {
                    zero_found = true;
                } else {
                    log_prob_sum += p.ln();
                }
            }
            Estimator::Laplace => {
                // Always positive for a nonempty model; the degenerate empty-model case
                // flows through as ln(0) = -inf and surfaces as infinite perplexity.
                log_prob_sum += p.ln();
            }
            Estimator::GoodTuring => {
                if !zero_found {
                    log_prob_sum += p.ln();
                }
            }
        }

        grams.push(GramTrace {
            gram: gram.clone(),
            raw_count: c,
            steps,
            probability: p,
        });

        // A zero under MLE (or the Good-Turing fallback) settles the outcome; the
        // remaining windows still count toward M but are not evaluated.
        if zero_found {
            break;
        }
    }

    let perplexity = if zero_found || m == 0 {
        f64::INFINITY
    } else {
        (-log_prob_sum / m as f64).exp()
    };

    debug!(
        "evaluated {} windows with {}: log p = {}, perplexity = {}",
        m,
        estimator.name(),
        log_prob_sum,
        perplexity
    );

    EvaluationTrace {
        estimator,
        grams,
        log_prob_sum,
        evaluated_grams: m,
        perplexity,
    }
}

/// Everything before the final space of an n-gram key (its `(n-1)`-token prefix).
fn prefix_of(gram: &str) -> String {
    match gram.rfind(' ') {
        Some(idx) => gram[..idx].to_string(),
        None => gram.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn good_turing_probability(
    gram: &str,
    c: usize,
    total_ngrams: usize,
    n1: usize,
    unseen_types: f64,
    counts_of_counts: &crate::types::CountsOfCounts,
    steps: &mut Vec<String>,
    zero_found: &mut bool,
) -> f64 {
    steps.push("Good-Turing (global): use counts-of-counts Nc".to_string());
    steps.push(format!(
        "C({}) = {}, N1 = {}, N = {}",
        gram, c, n1, total_ngrams
    ));

    if c > 0 {
        let nc = counts_of_counts.get(&c).copied().unwrap_or(0);
        let nc1 = counts_of_counts.get(&(c + 1)).copied().unwrap_or(0);
        steps.push(format!("N_{} = {}, N_{} = {}", c, nc, c + 1, nc1));
        if nc > 0 && nc1 > 0 {
            let c_star = (c as f64 + 1.0) * nc1 as f64 / nc as f64;
            let p = c_star / total_ngrams as f64;
            steps.push(format!(
                "c* = (c+1) * N_{} / N_{} = {}",
                c + 1,
                c,
                c_star
            ));
            steps.push(format!("P = c* / N = {}", p));
            p
        } else {
            // Nc or N_{c+1} missing: the adjusted count is unreliable, fall back to the
            // raw relative frequency. A zero here short-circuits exactly like MLE.
            let p = if total_ngrams > 0 {
                c as f64 / total_ngrams as f64
            } else {
                0.0
            };
            steps.push(format!(
                "N_{} or N_{} missing; fallback to MLE: P = C/N = {}",
                c,
                c + 1,
                p
            ));
            if p == 0.0 {
                *zero_found = true;
            }
            p
        }
    } else {
        // Unseen gram: the reserved mass N1/N is split evenly over the unseen types.
        let p0_total = if total_ngrams > 0 {
            n1 as f64 / total_ngrams as f64
        } else {
            0.0
        };
        if unseen_types > 0.0 {
            let p_each = p0_total / unseen_types;
            steps.push(format!(
                "unseen (c = 0): p0 = N1/N = {}, unseen types = {}, P = {}",
                p0_total, unseen_types, p_each
            ));
            p_each
        } else {
            let p = 1.0 / total_ngrams.max(1) as f64;
            steps.push(format!(
                "unseen (c = 0) but no unseen types remain; minimal mass P = 1/N = {}",
                p
            ));
            p
        }
    }
}
