use crate::models::grammar::{Grammar, ParseTree};
use crate::types::Token;
use log::debug;

/// Outcome of a top-down parse: the tree when a derivation consumed the entire input,
/// and the attempt-by-attempt trace either way.
#[derive(Debug, Clone)]
pub struct TopDownResult {
    pub tree: Option<ParseTree>,
    pub trace: Vec<String>,
}

/// Recursive-descent parsing with explicit backtracking.
///
/// Alternatives of a nonterminal are tried in their declared order; a failed symbol
/// abandons the alternative and moves to the next. Every attempt is appended to the
/// trace in the order tried (`Try`, then `Success:` or `Fail:`). A derivation that
/// matches only a prefix of the tokens is not accepted: the tree is returned only when
/// the whole sequence was consumed. Failure to parse is a normal outcome, not an error.
pub fn parse_top_down(tokens: &[Token], grammar: &Grammar) -> TopDownResult {
    let mut trace = Vec::new();
    let attempt = try_symbol(grammar, tokens, grammar.start(), 0, &mut trace);

    let tree = match attempt {
        Some((tree, position)) if position == tokens.len() => Some(tree),
        _ => None,
    };

    debug!(
        "top-down over {} tokens: parsed = {}, {} attempts traced",
        tokens.len(),
        tree.is_some(),
        trace.len()
    );

    TopDownResult { tree, trace }
}

/// Attempts to derive `symbol` starting at token `position`. Returns the subtree and the
/// position after the matched span, or `None` when no alternative works.
fn try_symbol(
    grammar: &Grammar,
    tokens: &[Token],
    symbol: &str,
    position: usize,
    trace: &mut Vec<String>,
) -> Option<(ParseTree, usize)> {
    let alternatives = match grammar.alternatives(symbol) {
        Some(alts) => alts,
        None => {
            // Terminal: exact token match.
            return match tokens.get(position) {
                Some(word) if word == symbol => Some((
                    ParseTree::Leaf { word: word.clone() },
                    position + 1,
                )),
                _ => None,
            };
        }
    };

    'alternatives: for production in alternatives {
        trace.push(format!("Try {} -> {}", symbol, production.join(" ")));
        let mut cursor = position;
        let mut children = Vec::with_capacity(production.len());

        for part in production {
            match try_symbol(grammar, tokens, part, cursor, trace) {
                Some((child, next)) => {
                    children.push(child);
                    cursor = next;
                }
                None => {
                    trace.push(format!("Fail: {} -> {}", symbol, production.join(" ")));
                    continue 'alternatives;
                }
            }
        }

        trace.push(format!("Success: {} -> {}", symbol, production.join(" ")));
        return Some((
            ParseTree::Node {
                symbol: symbol.to_string(),
                children,
            },
            cursor,
        ));
    }

    None
}
