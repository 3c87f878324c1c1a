//! Performance benchmarks for pagebrief.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - Small synthetic HTML (~1KB) for extraction microbenchmarks
//! - Generated pages of growing size for throughput
//! - Summarization of the extracted text

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pagebrief::{extract, extract_with_options, summarize, Options};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Spring Kettle Sale</title>
    <style>body { color: #333; }</style>
</head>
<body>
    <nav>
        <a href="/">Home</a>
        <a href="/shop">Shop</a>
        <a href="/about">About</a>
    </nav>
    <main>
        <h1>Kettles for every kitchen</h1>
        <p>Our classic steel kettle now costs $24.99 instead of $39.99. The kettle
        boils water in under three minutes.</p>
        <h2>Electric range</h2>
        <p>Electric kettles start at €19,50 and ship free. Every electric kettle
        has an automatic shut-off.</p>
        <h3>Travel kettles</h3>
        <p>A folding travel kettle weighs less than a book and costs £12.</p>
        <script>window.track && window.track("view");</script>
    </main>
    <footer>
        <a href="/terms">Terms</a>
        <p>Copyright 2024</p>
    </footer>
</body>
</html>
"#;

fn generated_page(paragraphs: usize) -> String {
    let mut html = String::from("<html><head><title>Generated</title></head><body>");
    for i in 0..paragraphs {
        html.push_str(&format!(
            "<h2>Section {i}</h2><p>Item {i} costs ${i}.99 today. \
             Shipping for item {i} is free this week. \
             <a href=\"/items/{i}\">Details</a></p>"
        ));
    }
    html.push_str("</body></html>");
    html
}

fn bench_extract_default(c: &mut Criterion) {
    c.bench_function("extract_default", |b| {
        b.iter(|| extract(black_box(SAMPLE_HTML)));
    });
}

fn bench_extract_with_options(c: &mut Criterion) {
    let options = Options {
        url: Some("https://shop.example.com/kettles".to_string()),
        heading_tags: vec!["h1".to_string(), "h2".to_string()],
        ..Options::default()
    };

    c.bench_function("extract_with_options", |b| {
        b.iter(|| extract_with_options(black_box(SAMPLE_HTML), black_box(&options)));
    });
}

fn bench_extract_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_scaling");

    for paragraphs in [10, 100, 1000] {
        let html = generated_page(paragraphs);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("extract", paragraphs), &html, |b, html| {
            b.iter(|| extract(black_box(html)));
        });
    }

    group.finish();
}

fn bench_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");

    for paragraphs in [10, 100, 1000] {
        let text = extract(&generated_page(paragraphs)).text;
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("k5", paragraphs), &text, |b, text| {
            b.iter(|| summarize(black_box(text), 5));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_extract_default,
    bench_extract_with_options,
    bench_extract_scaling,
    bench_summarize
);
criterion_main!(benches);
