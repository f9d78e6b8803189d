use crate::types::TokenRef;

/// One recorded decision of the stemming cascade.
///
/// Every step of the cascade appends exactly one record, whether or not a rule fired,
/// so the full derivation of a stem can be replayed from the trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StemStep {
    /// Step label: `"1a"`, `"1b"`, `"1c"`, `"2"`, `"3"`, `"4"`, `"5a"`, or `"5b"`.
    pub step: &'static str,
    /// Description of the rule whose suffix matched, including any measure values that
    /// gated it. `None` when no suffix of this step matched the word.
    pub rule: Option<String>,
    /// Whether the matched rule actually rewrote the word.
    pub applied: bool,
    /// The word as it stands after this step.
    pub result: String,
}

/// Stem plus the ordered decisions that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StemResult {
    pub stem: String,
    pub trace: Vec<StemStep>,
}

/// The Porter (1980) suffix-stripping stemmer.
///
/// The seven steps are driven by ordered rule tables evaluated by a single engine loop:
/// within a step, the first rule whose suffix matches is selected, and if its condition
/// fails on the remaining base the step ends without rewriting (no shorter suffix of the
/// same step is tried). This matches the original cascade's first-match-then-gate
/// behavior.
///
/// Pure function of its input: the same word always yields the same stem and trace.
/// Words shorter than three characters pass through unchanged with an empty trace.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

/// Gate that must hold on the base (the word minus the matched suffix) for a rule to fire.
#[derive(Debug, Clone, Copy)]
enum Condition {
    Always,
    /// The base must not itself end in `s` (step 1a lone-`s` removal).
    BaseEndsNotS,
    BaseContainsVowel,
    MeasureGt(usize),
    /// Measure > 1 and the base ends in `s` or `t` (step 4 `ion` special case).
    MeasureGt1EndsSOrT,
    /// Measure > 1, or measure == 1 and the base is not CVC-shaped (step 5a).
    MeasureGt1OrEq1NotCvc,
}

struct Rule {
    suffix: &'static str,
    replacement: &'static str,
    condition: Condition,
}

const STEP_1A_RULES: &[Rule] = &[
    Rule { suffix: "sses", replacement: "ss", condition: Condition::Always },
    Rule { suffix: "ies", replacement: "i", condition: Condition::Always },
    Rule { suffix: "s", replacement: "", condition: Condition::BaseEndsNotS },
];

const STEP_1C_RULES: &[Rule] = &[Rule {
    suffix: "y",
    replacement: "i",
    condition: Condition::BaseContainsVowel,
}];

const STEP_2_RULES: &[Rule] = &[
    Rule { suffix: "ational", replacement: "ate", condition: Condition::MeasureGt(0) },
    Rule { suffix: "tional", replacement: "tion", condition: Condition::MeasureGt(0) },
    Rule { suffix: "enci", replacement: "ence", condition: Condition::MeasureGt(0) },
    Rule { suffix: "anci", replacement: "ance", condition: Condition::MeasureGt(0) },
    Rule { suffix: "izer", replacement: "ize", condition: Condition::MeasureGt(0) },
    Rule { suffix: "abli", replacement: "able", condition: Condition::MeasureGt(0) },
    Rule { suffix: "alli", replacement: "al", condition: Condition::MeasureGt(0) },
    Rule { suffix: "entli", replacement: "ent", condition: Condition::MeasureGt(0) },
    Rule { suffix: "eli", replacement: "e", condition: Condition::MeasureGt(0) },
    Rule { suffix: "ousli", replacement: "ous", condition: Condition::MeasureGt(0) },
    Rule { suffix: "ization", replacement: "ize", condition: Condition::MeasureGt(0) },
    Rule { suffix: "ation", replacement: "ate", condition: Condition::MeasureGt(0) },
    Rule { suffix: "ator", replacement: "ate", condition: Condition::MeasureGt(0) },
    Rule { suffix: "alism", replacement: "al", condition: Condition::MeasureGt(0) },
    Rule { suffix: "iveness", replacement: "ive", condition: Condition::MeasureGt(0) },
    Rule { suffix: "fulness", replacement: "ful", condition: Condition::MeasureGt(0) },
    Rule { suffix: "ousness", replacement: "ous", condition: Condition::MeasureGt(0) },
    Rule { suffix: "aliti", replacement: "al", condition: Condition::MeasureGt(0) },
    Rule { suffix: "iviti", replacement: "ive", condition: Condition::MeasureGt(0) },
    Rule { suffix: "biliti", replacement: "ble", condition: Condition::MeasureGt(0) },
    Rule { suffix: "logi", replacement: "log", condition: Condition::MeasureGt(0) },
];

const STEP_3_RULES: &[Rule] = &[
    Rule { suffix: "icate", replacement: "ic", condition: Condition::MeasureGt(0) },
    Rule { suffix: "ative", replacement: "", condition: Condition::MeasureGt(0) },
    Rule { suffix: "alize", replacement: "al", condition: Condition::MeasureGt(0) },
    Rule { suffix: "iciti", replacement: "ic", condition: Condition::MeasureGt(0) },
    Rule { suffix: "ical", replacement: "ic", condition: Condition::MeasureGt(0) },
    Rule { suffix: "ful", replacement: "", condition: Condition::MeasureGt(0) },
    Rule { suffix: "ness", replacement: "", condition: Condition::MeasureGt(0) },
];

const STEP_4_RULES: &[Rule] = &[
    Rule { suffix: "al", replacement: "", condition: Condition::MeasureGt(1) },
    Rule { suffix: "ance", replacement: "", condition: Condition::MeasureGt(1) },
    Rule { suffix: "ence", replacement: "", condition: Condition::MeasureGt(1) },
    Rule { suffix: "er", replacement: "", condition: Condition::MeasureGt(1) },
    Rule { suffix: "ic", replacement: "", condition: Condition::MeasureGt(1) },
    Rule { suffix: "able", replacement: "", condition: Condition::MeasureGt(1) },
    Rule { suffix: "ible", replacement: "", condition: Condition::MeasureGt(1) },
    Rule { suffix: "ant", replacement: "", condition: Condition::MeasureGt(1) },
    Rule { suffix: "ement", replacement: "", condition: Condition::MeasureGt(1) },
    Rule { suffix: "ment", replacement: "", condition: Condition::MeasureGt(1) },
    Rule { suffix: "ent", replacement: "", condition: Condition::MeasureGt(1) },
    Rule { suffix: "ion", replacement: "", condition: Condition::MeasureGt1EndsSOrT },
    Rule { suffix: "ou", replacement: "", condition: Condition::MeasureGt(1) },
    Rule { suffix: "ism", replacement: "", condition: Condition::MeasureGt(1) },
    Rule { suffix: "ate", replacement: "", condition: Condition::MeasureGt(1) },
    Rule { suffix: "iti", replacement: "", condition: Condition::MeasureGt(1) },
    Rule { suffix: "ous", replacement: "", condition: Condition::MeasureGt(1) },
    Rule { suffix: "ive", replacement: "", condition: Condition::MeasureGt(1) },
    Rule { suffix: "ize", replacement: "", condition: Condition::MeasureGt(1) },
];

const STEP_5A_RULES: &[Rule] = &[Rule {
    suffix: "e",
    replacement: "",
    condition: Condition::MeasureGt1OrEq1NotCvc,
}];

impl PorterStemmer {
    pub fn new() -> Self {
        PorterStemmer
    }

    /// Stems a single word, recording every step's decision.
    pub fn stem(self, word: &TokenRef) -> StemResult {
        if word.chars().count() < 3 {
            return StemResult {
                stem: word.to_string(),
                trace: Vec::new(),
            };
        }

        let mut trace = Vec::with_capacity(8);
        let mut w = word.to_string();

        w = run_rule_step("1a", &w, STEP_1A_RULES, &mut trace);
        w = step_1b(&w, &mut trace);
        w = run_rule_step("1c", &w, STEP_1C_RULES, &mut trace);
        w = run_rule_step("2", &w, STEP_2_RULES, &mut trace);
        w = run_rule_step("3", &w, STEP_3_RULES, &mut trace);
        w = run_rule_step("4", &w, STEP_4_RULES, &mut trace);
        w = run_rule_step("5a", &w, STEP_5A_RULES, &mut trace);
        w = step_5b(&w, &mut trace);

        StemResult { stem: w, trace }
    }
}

/// Runs one step's rule table: first matching suffix wins, its condition gates the rewrite.
fn run_rule_step(step: &'static str, word: &str, rules: &[Rule], trace: &mut Vec<StemStep>) -> String {
    for rule in rules {
        // The first matched suffix claims the step; its condition decides the rewrite.
        // The base may be empty ("sses" -> "ss"): measure and vowel gates handle it.
        if word.ends_with(rule.suffix) {
            let base = &word[..word.len() - rule.suffix.len()];
            let (passes, detail) = evaluate_condition(rule.condition, base);
            let rule_desc = match detail {
                Some(d) => format!("{} -> '{}' [{}]", rule.suffix, rule.replacement, d),
                None => format!("{} -> '{}'", rule.suffix, rule.replacement),
            };
            let result = if passes {
                format!("{}{}", base, rule.replacement)
            } else {
                word.to_string()
            };
            trace.push(StemStep {
                step,
                rule: Some(rule_desc),
                applied: passes,
                result: result.clone(),
            });
            return result;
        }
    }
    trace.push(StemStep {
        step,
        rule: None,
        applied: false,
        result: word.to_string(),
    });
    word.to_string()
}

fn evaluate_condition(condition: Condition, base: &str) -> (bool, Option<String>) {
    match condition {
        Condition::Always => (true, None),
        Condition::BaseEndsNotS => (!base.ends_with('s'), None),
        Condition::BaseContainsVowel => (
            contains_vowel(base),
            Some(format!("vowel in '{}': {}", base, contains_vowel(base))),
        ),
        Condition::MeasureGt(k) => {
            let m = measure(base);
            (m > k, Some(format!("m('{}') = {}, requires m > {}", base, m, k)))
        }
        Condition::MeasureGt1EndsSOrT => {
            let m = measure(base);
            let st = base.ends_with('s') || base.ends_with('t');
            (
                m > 1 && st,
                Some(format!("m('{}') = {}, ends s/t: {}", base, m, st)),
            )
        }
        Condition::MeasureGt1OrEq1NotCvc => {
            let m = measure(base);
            let cvc = ends_cvc(base);
            (
                m > 1 || (m == 1 && !cvc),
                Some(format!("m('{}') = {}, cvc: {}", base, m, cvc)),
            )
        }
    }
}

/// Step 1b: past/progressive suffixes with a compound cleanup on the stripped base.
fn step_1b(word: &str, trace: &mut Vec<StemStep>) -> String {
    if let Some(base) = word.strip_suffix("eed") {
        let m = measure(base);
        let applied = m > 0;
        let result = if applied {
            format!("{}ee", base)
        } else {
            word.to_string()
        };
        trace.push(StemStep {
            step: "1b",
            rule: Some(format!("eed -> ee [m('{}') = {}, requires m > 0]", base, m)),
            applied,
            result: result.clone(),
        });
        return result;
    }

    for suffix in ["ed", "ing"] {
        if let Some(base) = word.strip_suffix(suffix) {
            if !contains_vowel(base) {
                trace.push(StemStep {
                    step: "1b",
                    rule: Some(format!("{} -> '' [no vowel in '{}']", suffix, base)),
                    applied: false,
                    result: word.to_string(),
                });
                return word.to_string();
            }
            let (result, cleanup) = cleanup_1b(base);
            let rule = match cleanup {
                Some(c) => format!("{} -> '' ; {}", suffix, c),
                None => format!("{} -> ''", suffix),
            };
            trace.push(StemStep {
                step: "1b",
                rule: Some(rule),
                applied: true,
                result: result.clone(),
            });
            return result;
        }
    }

    trace.push(StemStep {
        step: "1b",
        rule: None,
        applied: false,
        result: word.to_string(),
    });
    word.to_string()
}

/// After removing `ed`/`ing`: restore an `e` after `at`/`bl`/`iz`, undouble a final
/// consonant (other than l/s/z), or append `e` to a short CVC base.
fn cleanup_1b(base: &str) -> (String, Option<String>) {
    if base.ends_with("at") || base.ends_with("bl") || base.ends_with("iz") {
        return (format!("{}e", base), Some("append e after at/bl/iz".to_string()));
    }
    let chars: Vec<char> = base.chars().collect();
    if chars.len() >= 2 {
        let last = chars[chars.len() - 1];
        if last == chars[chars.len() - 2]
            && !matches!(last, 'a' | 'e' | 'i' | 'o' | 'u' | 'y' | 'l' | 's' | 'z')
        {
            let undoubled: String = chars[..chars.len() - 1].iter().collect();
            return (
                undoubled,
                Some(format!("undouble final '{}{}'", last, last)),
            );
        }
    }
    if measure(base) == 1 && ends_cvc(base) {
        return (
            format!("{}e", base),
            Some("append e to short cvc base".to_string()),
        );
    }
    (base.to_string(), None)
}

/// Step 5b: reduce a final doubled `l` when the measure of the whole word exceeds 1.
fn step_5b(word: &str, trace: &mut Vec<StemStep>) -> String {
    if word.ends_with("ll") {
        let m = measure(word);
        let applied = m > 1;
        let result = if applied {
            word[..word.len() - 1].to_string()
        } else {
            word.to_string()
        };
        trace.push(StemStep {
            step: "5b",
            rule: Some(format!("ll -> l [m('{}') = {}, requires m > 1]", word, m)),
            applied,
            result: result.clone(),
        });
        return result;
    }
    trace.push(StemStep {
        step: "5b",
        rule: None,
        applied: false,
        result: word.to_string(),
    });
    word.to_string()
}

/// A character is a consonant unless it is `a e i o u`, or a `y` preceded by a consonant.
/// A leading `y` always counts as a consonant.
fn is_consonant(chars: &[char], i: usize) -> bool {
    match chars[i] {
        'a' | 'e' | 'i' | 'o' | 'u' => false,
        'y' => i == 0 || !is_consonant(chars, i - 1),
        _ => true,
    }
}

/// Porter's measure m(s): the number of vowel-sequence to consonant-sequence transitions.
pub(crate) fn measure(s: &str) -> usize {
    let chars: Vec<char> = s.chars().collect();
    let mut m = 0;
    let mut prev_vowel = false;
    for i in 0..chars.len() {
        let cons = is_consonant(&chars, i);
        if cons && prev_vowel {
            m += 1;
        }
        prev_vowel = !cons;
    }
    m
}

pub(crate) fn contains_vowel(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    (0..chars.len()).any(|i| !is_consonant(&chars, i))
}

/// True when the last three characters form consonant-vowel-consonant and the final
/// consonant is not `w`, `x`, or `y`.
pub(crate) fn ends_cvc(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() < 3 {
        return false;
    }
    let k = chars.len() - 3;
    is_consonant(&chars, k)
        && !is_consonant(&chars, k + 1)
        && is_consonant(&chars, k + 2)
        && !matches!(chars[k + 2], 'w' | 'x' | 'y')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_counts_vc_transitions() {
        assert_eq!(measure("tr"), 0);
        assert_eq!(measure("ee"), 0);
        assert_eq!(measure("tree"), 0);
        assert_eq!(measure("y"), 0);
        assert_eq!(measure("by"), 0);
        assert_eq!(measure("trouble"), 1);
        assert_eq!(measure("oats"), 1);
        assert_eq!(measure("trees"), 1);
        assert_eq!(measure("ivy"), 1);
        assert_eq!(measure("troubles"), 2);
        assert_eq!(measure("private"), 2);
        assert_eq!(measure("oaten"), 2);
    }

    #[test]
    fn test_leading_y_is_consonant() {
        // "ying" stripped of "ing" leaves "y", which has no vowel.
        let result = PorterStemmer::new().stem("ying");
        assert_eq!(result.stem, "ying");
    }

    #[test]
    fn test_ends_cvc() {
        assert!(ends_cvc("hop"));
        assert!(ends_cvc("fil"));
        assert!(!ends_cvc("snow")); // final w excluded
        assert!(!ends_cvc("box")); // final x excluded
        assert!(!ends_cvc("tray")); // final y excluded
        assert!(!ends_cvc("fee"));
    }
}
