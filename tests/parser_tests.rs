use classic_nlp::{parse_cyk, parse_top_down, tokenize, CnfGrammar, Grammar, ParseTree};
use std::collections::{BTreeMap, BTreeSet};

#[cfg(test)]
mod cyk_tests {
    use super::*;

    /// The minimal grammar `S -> NP VP`, `NP -> DT NN`, with `VP` lexical for "sat".
    fn mini_grammar() -> CnfGrammar {
        let mut productions = BTreeMap::new();
        productions.insert("S".to_string(), vec![("NP".to_string(), "VP".to_string())]);
        productions.insert("NP".to_string(), vec![("DT".to_string(), "NN".to_string())]);

        let mut lexicon: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        lexicon.insert("DT".to_string(), ["the".to_string()].into_iter().collect());
        lexicon.insert(
            "NN".to_string(),
            ["cat".to_string(), "dog".to_string()].into_iter().collect(),
        );
        lexicon.insert("VP".to_string(), ["sat".to_string()].into_iter().collect());

        CnfGrammar::new("S", productions, lexicon).expect("mini grammar is well-formed")
    }

    #[test]
    fn test_accepts_simple_sentence() {
        let result = parse_cyk(&tokenize("the cat sat"), &mini_grammar());
        assert!(result.accepted);

        let tree = result.tree.expect("accepted parse yields a tree");
        match &tree {
            ParseTree::Node { symbol, children } => {
                assert_eq!(symbol, "S");
                let child_symbols: Vec<&str> = children
                    .iter()
                    .map(|c| match c {
                        ParseTree::Node { symbol, .. } => symbol.as_str(),
                        ParseTree::Leaf { .. } => panic!("S must not have leaf children"),
                    })
                    .collect();
                assert_eq!(child_symbols, vec!["NP", "VP"]);
            }
            ParseTree::Leaf { .. } => panic!("root must be a nonterminal"),
        }
    }

    #[test]
    fn test_rejects_wrong_word_order() {
        let result = parse_cyk(&tokenize("cat the sat"), &mini_grammar());
        assert!(!result.accepted);
        assert!(result.tree.is_none());
    }

    #[test]
    fn test_toy_grammar_with_prepositional_phrase() {
        let tokens = tokenize("the cat sat on the mat");
        let result = parse_cyk(&tokens, &CnfGrammar::toy());
        assert!(result.accepted);

        // The reconstructed leaf sequence equals the input tokens.
        let tree = result.tree.expect("accepted parse yields a tree");
        let leaves: Vec<String> = tree.leaves().iter().map(|s| s.to_string()).collect();
        assert_eq!(leaves, tokens);
    }

    #[test]
    fn test_chart_diagonal_holds_lexical_symbols() {
        let result = parse_cyk(&tokenize("the cat sat"), &CnfGrammar::toy());
        assert!(result.chart.cell(0, 0).symbols.contains("DT"));
        assert!(result.chart.cell(1, 1).symbols.contains("NN"));
        assert!(result.chart.cell(2, 2).symbols.contains("VBD"));
        assert!(result.trace[0].starts_with("Init:"));
    }

    #[test]
    fn test_toy_grammar_rejects_intransitive_use() {
        // The toy CNF grammar has no VP -> VBD unary rule.
        let result = parse_cyk(&tokenize("the cat sat"), &CnfGrammar::toy());
        assert!(!result.accepted);
    }

    #[test]
    fn test_single_token_never_accepted_without_unary_rules() {
        let result = parse_cyk(&tokenize("the"), &CnfGrammar::toy());
        assert!(!result.accepted);
        assert!(result.chart.cell(0, 0).symbols.contains("DT"));
    }

    #[test]
    fn test_empty_input_rejected() {
        let result = parse_cyk(&[], &CnfGrammar::toy());
        assert!(!result.accepted);
        assert!(result.chart.is_empty());
        assert!(result.trace.is_empty());
    }

    #[test]
    fn test_unknown_word_rejected() {
        let result = parse_cyk(&tokenize("the zebra sat"), &CnfGrammar::toy());
        assert!(!result.accepted);
        assert!(result.chart.cell(1, 1).symbols.is_empty());
    }
}

#[cfg(test)]
mod top_down_tests {
    use super::*;

    #[test]
    fn test_parses_full_sentence() {
        let tokens = tokenize("the cat sat");
        let result = parse_top_down(&tokens, &Grammar::toy());
        let tree = result.tree.expect("sentence derives from S");
        let leaves: Vec<String> = tree.leaves().iter().map(|s| s.to_string()).collect();
        assert_eq!(leaves, tokens);
        assert_eq!(result.trace[0], "Try S -> NP VP");
    }

    #[test]
    fn test_ternary_alternative() {
        let tokens = tokenize("the quick fox sat");
        let result = parse_top_down(&tokens, &Grammar::toy());
        assert!(result.tree.is_some());
        assert!(result
            .trace
            .iter()
            .any(|line| line == "Success: NP -> DT JJ NN"));
    }

    #[test]
    fn test_rejects_trailing_token() {
        // A prefix derivation exists ("the cat sat"), but the input is longer.
        let result = parse_top_down(&tokenize("the cat sat on"), &Grammar::toy());
        assert!(result.tree.is_none());
        assert!(!result.trace.is_empty());
    }

    #[test]
    fn test_trace_records_failed_attempts_in_order() {
        let result = parse_top_down(&tokenize("the cat sat"), &Grammar::toy());
        let trace = &result.trace;
        // VP -> VBD NP is tried and fails before VP -> VBD succeeds.
        let fail_idx = trace
            .iter()
            .position(|l| l == "Fail: VP -> VBD NP")
            .expect("first VP alternative fails");
        let success_idx = trace
            .iter()
            .position(|l| l == "Success: VP -> VBD")
            .expect("second VP alternative succeeds");
        assert!(fail_idx < success_idx);
    }

    #[test]
    fn test_ungrammatical_sentence_returns_no_tree() {
        let result = parse_top_down(&tokenize("sat the cat"), &Grammar::toy());
        assert!(result.tree.is_none());
    }

    #[test]
    fn test_empty_input_returns_no_tree() {
        let result = parse_top_down(&[], &Grammar::toy());
        assert!(result.tree.is_none());
    }

    #[test]
    fn test_round_trip_for_transitive_sentence() {
        let tokens = tokenize("the cat saw the dog");
        let result = parse_top_down(&tokens, &Grammar::toy());
        let tree = result.tree.expect("transitive sentence derives from S");
        let leaves: Vec<String> = tree.leaves().iter().map(|s| s.to_string()).collect();
        assert_eq!(leaves, tokens);
    }
}
