use classic_nlp::{
    build_ngram_model, evaluate_ngram, parse_cyk, stem, tokenize, CnfGrammar, Estimator,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const SAMPLE_TEXT: &str = "The cat sat on the mat while the dog watched quietly. \
    Generalizations about conditional probabilities were hopelessly conflated with \
    relational reasoning, troubling the rational observer repeatedly.";

fn benchmark_stemmer(c: &mut Criterion) {
    let tokens = tokenize(SAMPLE_TEXT);

    c.bench_function("stem_tokens", |b| {
        b.iter(|| {
            for token in &tokens {
                black_box(stem(black_box(token)));
            }
        })
    });
}

fn benchmark_ngram_evaluation(c: &mut Criterion) {
    let train = tokenize(SAMPLE_TEXT);
    let model = build_ngram_model(&train, 2);
    let test = tokenize("the cat sat on the mat");

    c.bench_function("evaluate_bigram_laplace", |b| {
        b.iter(|| evaluate_ngram(black_box(&model), black_box(&test), Estimator::Laplace))
    });
}

fn benchmark_cyk(c: &mut Criterion) {
    let grammar = CnfGrammar::toy();
    let tokens = tokenize("the cat sat on the mat");

    c.bench_function("parse_cyk_toy", |b| {
        b.iter(|| parse_cyk(black_box(&tokens), black_box(&grammar)))
    });
}

criterion_group!(
    benches,
    benchmark_stemmer,
    benchmark_ngram_evaluation,
    benchmark_cyk
);
criterion_main!(benches);
