use classic_nlp::{
    build_ngram_model, evaluate_ngram, parse_cyk, parse_top_down, stem, tokenize, CnfGrammar,
    Estimator, Grammar, SentimentAnalyzer, SentimentLexicon, DEFAULT_SENTIMENT_CONFIG,
};
use log::error;
use std::io::{self, Read};

/// Word lists for the demo sentiment pass; real callers load a lexicon from CSV.
fn demo_lexicon() -> SentimentLexicon {
    SentimentLexicon::new(
        ["amazing", "outstanding", "incredible", "happy", "good", "great"].map(String::from),
        ["terrible", "awful", "sad", "bad", "poor", "horrible"].map(String::from),
    )
}

/// Reads text on stdin and prints the classic-NLP analyses: stems, top bigrams with a
/// perplexity reading, both parses of the token sequence under the toy grammars, and a
/// sentiment reading against a small built-in lexicon.
fn main() {
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        error!("Failed to read from stdin: {}", e);
        std::process::exit(1);
    }

    let tokens = tokenize(&input);
    if tokens.is_empty() {
        eprintln!("No tokens in input.");
        std::process::exit(1);
    }

    println!("== Stems ({} tokens) ==", tokens.len());
    for token in &tokens {
        let result = stem(token);
        println!("{} -> {}", token, result.stem);
    }

    println!("\n== Content word frequencies ==");
    let frequencies = classic_nlp::utils::word_frequencies(&tokens);
    let mut entries: Vec<_> = frequencies.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    for (word, count) in entries.iter().take(10) {
        println!("{}: {}", word, count);
    }

    let model = build_ngram_model(&tokens, 2);
    println!("\n== Top bigrams ==");
    for (gram, count) in model.top_ngrams(10) {
        println!("{}: {}", gram, count);
    }

    let evaluation = evaluate_ngram(&model, &tokens, Estimator::Laplace);
    println!(
        "\nLaplace self-perplexity over {} bigrams: {:.3}",
        evaluation.evaluated_grams, evaluation.perplexity
    );

    println!("\n== Top-down parse (toy grammar) ==");
    let top_down = parse_top_down(&tokens, &Grammar::toy());
    for line in &top_down.trace {
        println!("{}", line);
    }
    match top_down.tree {
        Some(tree) => println!("{}", tree.render()),
        None => println!("No complete parse found."),
    }

    println!("\n== CYK parse (toy grammar) ==");
    let cyk = parse_cyk(&tokens, &CnfGrammar::toy());
    for line in &cyk.trace {
        println!("{}", line);
    }
    match cyk.tree {
        Some(tree) => println!("{}", tree.render()),
        None => println!("Sentence not accepted by the grammar."),
    }

    println!("\n== Sentiment ==");
    let analyzer = SentimentAnalyzer::new(demo_lexicon(), DEFAULT_SENTIMENT_CONFIG);
    let sentiment = analyzer.analyze(&input);
    println!(
        "{} (score {:.2}, confidence {:.2})",
        sentiment.label, sentiment.score, sentiment.confidence
    );
}
