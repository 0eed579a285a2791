use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use search_core::core::types::DocumentStatus;
use search_core::{ExecutionMode, SearchEngine};

fn random_body(rng: &mut impl Rng, word_count: usize) -> String {
    let vocabulary = [
        "cat", "dog", "fish", "bird", "white", "fluffy", "collar", "tail", "eyes", "fashionable",
    ];
    (0..word_count)
        .map(|_| vocabulary[rng.gen_range(0..vocabulary.len())])
        .collect::<Vec<_>>()
        .join(" ")
}

fn build_engine(document_count: usize) -> SearchEngine {
    let mut rng = rand::thread_rng();
    let mut engine = SearchEngine::new(search_core::StopWords::default());
    for id in 0..document_count {
        let body = random_body(&mut rng, 20);
        engine
            .add_document(id as i64, &body, DocumentStatus::Actual, &[rng.gen_range(-5..10)])
            .unwrap();
    }
    engine
}

fn bench_find_top_documents(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_top_documents");

    for &document_count in &[100, 1_000, 10_000] {
        let engine = build_engine(document_count);

        group.bench_with_input(
            BenchmarkId::new("sequential", document_count),
            &document_count,
            |b, _| {
                b.iter(|| {
                    black_box(
                        engine
                            .find_top_documents("cat fluffy -dog", ExecutionMode::Sequential)
                            .unwrap(),
                    )
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("parallel", document_count),
            &document_count,
            |b, _| {
                b.iter(|| {
                    black_box(
                        engine
                            .find_top_documents("cat fluffy -dog", ExecutionMode::Parallel)
                            .unwrap(),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_find_top_documents);
criterion_main!(benches);
