use crate::models::grammar::{CnfGrammar, ParseTree};
use crate::types::{Symbol, Token};
use log::debug;
use std::collections::{BTreeMap, BTreeSet};

/// How a symbol in a chart cell was derived, for tree reconstruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backpointer {
    /// The symbol covers a single token through a lexicon entry.
    Lexical { word: String },
    /// The symbol was produced by a binary rule splitting the span after `split`.
    Binary {
        left: Symbol,
        right: Symbol,
        split: usize,
    },
}

/// One cell of the chart: the nonterminals derivable over a span, and for each the first
/// derivation that produced it.
#[derive(Debug, Clone, Default)]
pub struct CykCell {
    pub symbols: BTreeSet<Symbol>,
    pub back: BTreeMap<Symbol, Backpointer>,
}

/// Triangular recognition table indexed by `(start, end)` token spans, stored as a flat
/// arena. Built bottom-up during one parse call and immutable afterward.
#[derive(Debug, Clone)]
pub struct CykChart {
    len: usize,
    cells: Vec<CykCell>,
}

impl CykChart {
    fn new(len: usize) -> Self {
        CykChart {
            len,
            cells: vec![CykCell::default(); len * len],
        }
    }

    /// Number of tokens the chart spans.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Cell for the inclusive span `start..=end`.
    pub fn cell(&self, start: usize, end: usize) -> &CykCell {
        &self.cells[start * self.len + end]
    }

    fn cell_mut(&mut self, start: usize, end: usize) -> &mut CykCell {
        &mut self.cells[start * self.len + end]
    }

    /// Records `symbol` over the span, keeping the first derivation seen. Returns true
    /// when the symbol was newly added.
    fn add(&mut self, start: usize, end: usize, symbol: &Symbol, back: Backpointer) -> bool {
        let cell = self.cell_mut(start, end);
        if cell.symbols.insert(symbol.clone()) {
            cell.back.insert(symbol.clone(), back);
            true
        } else {
            false
        }
    }
}

/// Outcome of a CYK parse: acceptance, the reconstructed tree when accepted, the full
/// chart for display, and the fill-order trace.
#[derive(Debug, Clone)]
pub struct CykResult {
    pub accepted: bool,
    pub tree: Option<ParseTree>,
    pub chart: CykChart,
    pub trace: Vec<String>,
}

/// Bottom-up CYK recognition and parsing over a CNF grammar.
///
/// The diagonal is seeded from the lexicon; wider spans combine sub-spans through the
/// binary productions. The sentence is accepted iff the full-span cell contains the
/// grammar's start symbol. Ambiguity is not resolved: only the first derivation per
/// symbol and cell is recorded, so one tree is reconstructed.
///
/// Empty input yields an empty chart and `accepted == false`. A single-token input has
/// no binary combinations, so it is accepted only if the start symbol itself is lexical
/// for that token.
pub fn parse_cyk(tokens: &[Token], grammar: &CnfGrammar) -> CykResult {
    let n = tokens.len();
    let mut chart = CykChart::new(n);
    let mut trace = Vec::new();

    if n == 0 {
        return CykResult {
            accepted: false,
            tree: None,
            chart,
            trace,
        };
    }

    // Lexical pass: seed the diagonal.
    for (i, word) in tokens.iter().enumerate() {
        for symbol in grammar.lexical_symbols(word) {
            if chart.add(i, i, symbol, Backpointer::Lexical { word: word.clone() }) {
                trace.push(format!(
                    "Init: [{},{}] <- {} because {} -> '{}'",
                    i, i, symbol, symbol, word
                ));
            }
        }
    }

    // Binary pass: widen spans bottom-up.
    for span in 2..=n {
        for i in 0..=n - span {
            let j = i + span - 1;
            for k in i..j {
                for (lhs, (left, right)) in grammar.productions() {
                    if chart.cell(i, k).symbols.contains(left)
                        && chart.cell(k + 1, j).symbols.contains(right)
                    {
                        let added = chart.add(
                            i,
                            j,
                            lhs,
                            Backpointer::Binary {
                                left: left.clone(),
                                right: right.clone(),
                                split: k,
                            },
                        );
                        if added {
                            trace.push(format!(
                                "Combine: [{},{}] has {} & [{},{}] has {} -> add {} to [{},{}]",
                                i,
                                k,
                                left,
                                k + 1,
                                j,
                                right,
                                lhs,
                                i,
                                j
                            ));
                        }
                    }
                }
            }
        }
    }

    let start = grammar.start().to_string();
    let accepted = chart.cell(0, n - 1).symbols.contains(&start);
    let tree = if accepted {
        Some(build_tree(&chart, &start, 0, n - 1))
    } else {
        None
    };

    debug!(
        "cyk over {} tokens: accepted = {}, {} trace entries",
        n,
        accepted,
        trace.len()
    );

    CykResult {
        accepted,
        tree,
        chart,
        trace,
    }
}

/// Walks backpointers from `symbol` over `start..=end` down to the leaves.
fn build_tree(chart: &CykChart, symbol: &Symbol, start: usize, end: usize) -> ParseTree {
    match chart.cell(start, end).back.get(symbol) {
        Some(Backpointer::Lexical { word }) => ParseTree::Node {
            symbol: symbol.clone(),
            children: vec![ParseTree::Leaf { word: word.clone() }],
        },
        Some(Backpointer::Binary { left, right, split }) => {
            let left_tree = build_tree(chart, left, start, *split);
            let right_tree = build_tree(chart, right, *split + 1, end);
            ParseTree::Node {
                symbol: symbol.clone(),
                children: vec![left_tree, right_tree],
            }
        }
        // Unreachable for symbols recorded by the parse itself.
        None => ParseTree::Node {
            symbol: symbol.clone(),
            children: Vec::new(),
        },
    }
}
