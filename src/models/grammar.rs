use crate::models::Error;
use crate::types::Symbol;
use std::collections::{BTreeMap, BTreeSet};

/// A node of a constituency parse tree: either a terminal leaf holding the matched word,
/// or a nonterminal with its ordered children. Trees are owned exclusively by the parse
/// result that created them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseTree {
    Leaf { word: String },
    Node { symbol: Symbol, children: Vec<ParseTree> },
}

impl ParseTree {
    /// The terminal words of the tree in left-to-right order. For an accepted parse this
    /// equals the input token sequence.
    pub fn leaves(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            ParseTree::Leaf { word } => out.push(word),
            ParseTree::Node { children, .. } => {
                for child in children {
                    child.collect_leaves(out);
                }
            }
        }
    }

    /// Renders the tree as an indented outline, one symbol or word per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(0, &mut out);
        out
    }

    fn render_into(&self, depth: usize, out: &mut String) {
        for _ in 0..depth {
            out.push_str("  ");
        }
        match self {
            ParseTree::Leaf { word } => {
                out.push('\'');
                out.push_str(word);
                out.push('\'');
                out.push('\n');
            }
            ParseTree::Node { symbol, children } => {
                out.push_str(symbol);
                out.push('\n');
                for child in children {
                    child.render_into(depth + 1, out);
                }
            }
        }
    }
}

/// A context-free grammar in Chomsky Normal Form: binary productions over nonterminals
/// plus a terminal lexicon. Validated at construction and read-only afterward.
///
/// Internally ordered maps are used so that parsing is deterministic: when several
/// derivations exist, the first one found under symbol order is the one recorded.
#[derive(Debug, Clone)]
pub struct CnfGrammar {
    start: Symbol,
    productions: BTreeMap<Symbol, Vec<(Symbol, Symbol)>>,
    lexicon: BTreeMap<Symbol, BTreeSet<String>>,
}

impl CnfGrammar {
    /// Builds a CNF grammar, rejecting productions that reference a symbol with neither
    /// productions nor lexicon entries, and a start symbol that is undefined.
    pub fn new(
        start: impl Into<Symbol>,
        productions: BTreeMap<Symbol, Vec<(Symbol, Symbol)>>,
        lexicon: BTreeMap<Symbol, BTreeSet<String>>,
    ) -> Result<Self, Error> {
        let start = start.into();
        let defined = |symbol: &Symbol| {
            productions.contains_key(symbol) || lexicon.contains_key(symbol)
        };

        if !defined(&start) {
            return Err(Error::GrammarError(format!(
                "start symbol '{}' has no productions or lexicon entries",
                start
            )));
        }
        for (lhs, rules) in &productions {
            for (left, right) in rules {
                for symbol in [left, right] {
                    if !defined(symbol) {
                        return Err(Error::GrammarError(format!(
                            "production {} -> {} {} references undefined symbol '{}'",
                            lhs, left, right, symbol
                        )));
                    }
                }
            }
        }

        Ok(CnfGrammar {
            start,
            productions,
            lexicon,
        })
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    /// All binary productions, in symbol order.
    pub fn productions(&self) -> impl Iterator<Item = (&Symbol, &(Symbol, Symbol))> {
        self.productions
            .iter()
            .flat_map(|(lhs, rules)| rules.iter().map(move |rule| (lhs, rule)))
    }

    /// Nonterminals whose lexicon contains the word, in symbol order.
    pub fn lexical_symbols<'a>(&'a self, word: &str) -> Vec<&'a Symbol> {
        self.lexicon
            .iter()
            .filter(|(_, words)| words.contains(word))
            .map(|(symbol, _)| symbol)
            .collect()
    }

    /// The toy CNF grammar used by the interactive parsing demos:
    /// `S -> NP VP`, `NP -> DT NN | NP PP`, `VP -> VBD NP | VBD PP`, `PP -> IN NP`,
    /// with a small lexicon of determiners, nouns, past-tense verbs, prepositions,
    /// and adjectives. No unary rules, so single-word sentences are never accepted.
    pub fn toy() -> Self {
        let mut productions = BTreeMap::new();
        productions.insert(
            "S".to_string(),
            vec![("NP".to_string(), "VP".to_string())],
        );
        productions.insert(
            "NP".to_string(),
            vec![
                ("DT".to_string(), "NN".to_string()),
                ("NP".to_string(), "PP".to_string()),
            ],
        );
        productions.insert(
            "VP".to_string(),
            vec![
                ("VBD".to_string(), "NP".to_string()),
                ("VBD".to_string(), "PP".to_string()),
            ],
        );
        productions.insert(
            "PP".to_string(),
            vec![("IN".to_string(), "NP".to_string())],
        );

        let lexicon = toy_lexicon();

        CnfGrammar::new("S", productions, lexicon)
            .unwrap_or_else(|_| unreachable!("toy grammar is well-formed"))
    }
}

fn toy_lexicon() -> BTreeMap<Symbol, BTreeSet<String>> {
    let entries: &[(&str, &[&str])] = &[
        ("DT", &["the", "a"]),
        ("NN", &["cat", "dog", "mat", "fox"]),
        ("VBD", &["sat", "ate", "saw"]),
        ("IN", &["on", "in", "with"]),
        ("JJ", &["quick", "brown", "lazy"]),
    ];
    entries
        .iter()
        .map(|(symbol, words)| {
            (
                symbol.to_string(),
                words.iter().map(|w| w.to_string()).collect(),
            )
        })
        .collect()
}

/// A general (non-CNF) grammar for top-down parsing: each nonterminal maps to an ordered
/// list of right-hand-side alternatives mixing nonterminals and terminal words. The
/// declared order of alternatives determines trial order during backtracking.
///
/// A symbol is a nonterminal exactly when it has an entry here; any other symbol is a
/// terminal requiring an exact token match. The grammar must not be left-recursive, or
/// backtracking will not terminate.
#[derive(Debug, Clone)]
pub struct Grammar {
    start: Symbol,
    rules: BTreeMap<Symbol, Vec<Vec<Symbol>>>,
}

impl Grammar {
    /// Builds a general grammar. The only structural requirement is that the start
    /// symbol has at least one alternative.
    pub fn new(
        start: impl Into<Symbol>,
        rules: BTreeMap<Symbol, Vec<Vec<Symbol>>>,
    ) -> Result<Self, Error> {
        let start = start.into();
        if !rules.contains_key(&start) {
            return Err(Error::GrammarError(format!(
                "start symbol '{}' has no rules",
                start
            )));
        }
        Ok(Grammar { start, rules })
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn is_nonterminal(&self, symbol: &str) -> bool {
        self.rules.contains_key(symbol)
    }

    pub fn alternatives(&self, symbol: &str) -> Option<&[Vec<Symbol>]> {
        self.rules.get(symbol).map(|alts| alts.as_slice())
    }

    /// The toy general grammar used by the top-down parsing demo. Same vocabulary as
    /// [`CnfGrammar::toy`], but with unary and ternary alternatives.
    pub fn toy() -> Self {
        let rules: &[(&str, &[&[&str]])] = &[
            ("S", &[&["NP", "VP"]]),
            ("NP", &[&["DT", "NN"], &["DT", "JJ", "NN"], &["NN"]]),
            ("VP", &[&["VBD", "NP"], &["VBD"], &["VBD", "PP"]]),
            ("PP", &[&["IN", "NP"]]),
            ("DT", &[&["the"], &["a"]]),
            ("JJ", &[&["quick"], &["brown"], &["lazy"]]),
            ("NN", &[&["cat"], &["dog"], &["mat"], &["fox"]]),
            ("VBD", &[&["sat"], &["ate"], &["saw"]]),
            ("IN", &[&["on"], &["in"], &["with"]]),
        ];
        let rules = rules
            .iter()
            .map(|(lhs, alts)| {
                (
                    lhs.to_string(),
                    alts.iter()
                        .map(|alt| alt.iter().map(|s| s.to_string()).collect())
                        .collect(),
                )
            })
            .collect();
        Grammar::new("S", rules).unwrap_or_else(|_| unreachable!("toy grammar is well-formed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cnf_rejects_undefined_symbol() {
        let mut productions = BTreeMap::new();
        productions.insert(
            "S".to_string(),
            vec![("NP".to_string(), "VP".to_string())],
        );
        let mut lexicon = BTreeMap::new();
        lexicon.insert(
            "NP".to_string(),
            ["it".to_string()].into_iter().collect::<BTreeSet<_>>(),
        );
        // VP is never defined.
        let err = CnfGrammar::new("S", productions, lexicon).unwrap_err();
        assert!(err.to_string().contains("VP"));
    }

    #[test]
    fn test_cnf_rejects_undefined_start() {
        let err = CnfGrammar::new("S", BTreeMap::new(), BTreeMap::new()).unwrap_err();
        assert!(err.to_string().contains("start symbol"));
    }

    #[test]
    fn test_tree_leaves_in_order() {
        let tree = ParseTree::Node {
            symbol: "S".to_string(),
            children: vec![
                ParseTree::Leaf { word: "the".to_string() },
                ParseTree::Node {
                    symbol: "NN".to_string(),
                    children: vec![ParseTree::Leaf { word: "cat".to_string() }],
                },
            ],
        };
        assert_eq!(tree.leaves(), vec!["the", "cat"]);
    }
}
