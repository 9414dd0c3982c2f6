//! Criterion benchmarks for bayes-text.
//!
//! Covers the three hot paths of the classifier:
//! - Text analysis into bags of words
//! - Training
//! - Classification and cleanup

use bayes_text::analysis::analyzer::Analyzer;
use bayes_text::analysis::analyzer::standard::StandardAnalyzer;
use bayes_text::classifier::{NaiveBayesClassifier, TrainingSample};
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const CATEGORIES: [&str; 4] = ["spam", "ham", "news", "sports"];

/// Generate labeled test documents for benchmarking.
fn generate_test_samples(count: usize) -> Vec<TrainingSample> {
    let words = vec![
        "free", "money", "prize", "offer", "cheap", "winner", "meeting", "agenda", "project",
        "review", "report", "lunch", "weather", "election", "market", "rain", "match", "goal",
        "league", "score", "team", "season", "today", "tomorrow", "budget", "deadline", "client",
        "invoice", "discount", "lottery", "breaking", "headline",
    ];

    let mut samples = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 10 + (i % 40); // Variable length documents
        let mut doc_words = Vec::with_capacity(doc_length);

        for j in 0..doc_length {
            let word_idx = (i * 7 + j * 13) % words.len(); // Pseudo-random distribution
            doc_words.push(words[word_idx]);
        }

        samples.push(TrainingSample::new(
            doc_words.join(" "),
            CATEGORIES[i % CATEGORIES.len()],
        ));
    }

    samples
}

fn trained_classifier(samples: &[TrainingSample]) -> NaiveBayesClassifier {
    let mut classifier = NaiveBayesClassifier::new(CATEGORIES).unwrap();
    classifier.train_batch(samples).unwrap();
    classifier
}

/// Benchmark text analysis and tokenization.
fn bench_text_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_analysis");

    let analyzer = StandardAnalyzer::new().unwrap();
    let classifier = NaiveBayesClassifier::new(CATEGORIES).unwrap();
    let samples = generate_test_samples(100);

    group.bench_function("analyze_single_document", |b| {
        b.iter(|| {
            let result = analyzer.analyze(black_box(&samples[0].text));
            black_box(result)
        })
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("bag_of_words_batch", |b| {
        b.iter(|| {
            for sample in &samples {
                let _ = black_box(classifier.tokenize(black_box(&sample.text)));
            }
        })
    });

    group.finish();
}

/// Benchmark training.
fn bench_training(c: &mut Criterion) {
    let mut group = c.benchmark_group("training");
    let samples = generate_test_samples(1000);

    group.throughput(Throughput::Elements(1000));
    group.bench_function("train_batch", |b| {
        b.iter_with_setup(
            || NaiveBayesClassifier::new(CATEGORIES).unwrap(),
            |mut classifier| {
                classifier.train_batch(black_box(&samples)).unwrap();
                black_box(classifier);
            },
        )
    });

    group.finish();
}

/// Benchmark classification and cleanup.
fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");
    let samples = generate_test_samples(1000);
    let classifier = trained_classifier(&samples);
    let queries = generate_test_samples(100);

    group.bench_function("classify_single_document", |b| {
        b.iter(|| black_box(classifier.classify(black_box(&queries[0].text))))
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("classify_batch", |b| {
        b.iter(|| {
            for query in &queries {
                let _ = black_box(classifier.classify(black_box(&query.text)));
            }
        })
    });

    group.bench_function("cleanup", |b| {
        b.iter_with_setup(
            || trained_classifier(&samples),
            |mut classifier| {
                black_box(classifier.cleanup(0.2).unwrap());
            },
        )
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_text_analysis,
    bench_training,
    bench_classification
);
criterion_main!(benches);
