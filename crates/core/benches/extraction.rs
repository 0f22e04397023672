use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sitemeta_core::{Document, extract_from_html};

fn bench_parse(c: &mut Criterion) {
    let blog = std::fs::read_to_string("../../tests/fixtures/blog.html").unwrap();
    let malformed = std::fs::read_to_string("../../tests/fixtures/malformed.html").unwrap();

    let mut group = c.benchmark_group("parse");

    group.bench_with_input(BenchmarkId::new("blog", "well-formed"), &blog, |b, html| {
        b.iter(|| Document::parse(black_box(html)))
    });

    group.bench_with_input(BenchmarkId::new("malformed", "recovery"), &malformed, |b, html| {
        b.iter(|| Document::parse(black_box(html)))
    });

    group.finish();
}

fn bench_scans(c: &mut Criterion) {
    let html = std::fs::read_to_string("../../tests/fixtures/blog.html").unwrap();
    let doc = Document::parse(&html);

    c.bench_function("metadata_scans", |b| b.iter(|| black_box(&doc).extract_metadata()));
}

fn bench_full_extraction(c: &mut Criterion) {
    let html = std::fs::read_to_string("../../tests/fixtures/blog.html").unwrap();

    c.bench_function("full_extraction", |b| b.iter(|| extract_from_html(black_box(&html))));
}

criterion_group!(benches, bench_parse, bench_scans, bench_full_extraction);
criterion_main!(benches);
