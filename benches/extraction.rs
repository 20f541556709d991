use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use docfeatures::{extract, tokenize, Extractor};
use std::fs;
use std::path::Path;

fn load_test_case(name: &str) -> Option<Vec<u8>> {
    let path = Path::new("tests/test-pages").join(name).join("source.html");
    fs::read(&path).ok()
}

/// Repeats a page body so the tokenizer and tree walk see a realistic amount
/// of text.
fn synthetic_page(paragraphs: usize) -> Vec<u8> {
    let mut html = String::from("<html><head><title>Synthetic</title></head><body>");
    for i in 0..paragraphs {
        html.push_str(&format!(
            "<p>Paragraph {i}: the quick brown fox jumps over the lazy dog.</p>\
             <script>track({i});</script>"
        ));
    }
    html.push_str("</body></html>");
    html.into_bytes()
}

fn bench_extract_fixtures(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");

    for name in ["example-site", "noise-and-keywords", "malformed-markup"] {
        let html = match load_test_case(name) {
            Some(h) => h,
            None => continue,
        };

        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("doc", name), &html, |b, html| {
            b.iter(|| std::hint::black_box(extract(std::hint::black_box(html), "https://example.com")))
        });
    }

    group.finish();
}

fn bench_extract_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_size");
    let extractor = Extractor::default();

    for paragraphs in [10, 100, 1000] {
        let html = synthetic_page(paragraphs);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("paragraphs", paragraphs), &html, |b, html| {
            b.iter(|| std::hint::black_box(extractor.extract(std::hint::black_box(html), "")))
        });
    }

    group.finish();
}

fn bench_tokenize(c: &mut Criterion) {
    let text = "The Quick Brown Fox jumps over the lazy dog, 42 times! ".repeat(1000);

    let mut group = c.benchmark_group("tokenize");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("sentence_x1000", |b| {
        b.iter(|| std::hint::black_box(tokenize(std::hint::black_box(&text))))
    });
    group.finish();
}

criterion_group!(benches, bench_extract_fixtures, bench_extract_by_size, bench_tokenize);
criterion_main!(benches);
