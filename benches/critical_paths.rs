//! Criterion benchmarks for figma-mcp critical paths
//!
//! - Parsing: node JSON to typed nodes
//! - Classifier: single-node decisions
//! - Scan: walking a large generated document

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use figma_mcp::classify::Classifier;
use figma_mcp::document::parse_roots;
use figma_mcp::models::{ExportSetting, Node, NodeType};
use figma_mcp::scan::{find_charts, ScanOptions};

// =============================================================================
// Test Data Generators
// =============================================================================

/// A frame holding `vectors` vector children.
fn make_frame(id: usize, size: f64, vectors: usize) -> Node {
    let mut node = Node::new(format!("{}:0", id), NodeType::Frame)
        .with_name(format!("frame-{}", id))
        .with_size(size, size);
    for v in 0..vectors {
        node = node.with_child(Node::new(format!("{}:{}", id, v + 1), NodeType::Vector));
    }
    node
}

/// A canvas with `sections` sections, each holding a mix of charts and icons.
fn make_document(sections: usize) -> Node {
    let mut canvas = Node::new("0:1", NodeType::Canvas).with_name("Page");
    for s in 0..sections {
        let mut section = Node::new(format!("s{}", s), NodeType::Section).with_name("section");
        for i in 0..20 {
            let id = s * 100 + i;
            let child = match i % 4 {
                0 => make_frame(id, 240.0, 6),
                1 => make_frame(id, 24.0, 1),
                2 => make_frame(id, 120.0, 1),
                _ => make_frame(id, 32.0, 0).with_export(ExportSetting::format("PNG")),
            };
            section = section.with_child(child);
        }
        canvas = canvas.with_child(section);
    }
    canvas
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for sections in [1, 10, 50] {
        let json = serde_json::to_string(&make_document(sections)).unwrap();
        group.throughput(Throughput::Bytes(json.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(sections), &json, |b, json| {
            b.iter(|| parse_roots(black_box(json)).unwrap())
        });
    }
    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let classifier = Classifier::default();
    let chart = make_frame(1, 200.0, 3);
    let icon = make_frame(2, 32.0, 1);
    let exported = make_frame(3, 32.0, 0).with_export(ExportSetting::format("SVG"));

    c.bench_function("classify/chart", |b| b.iter(|| classifier.classify(black_box(&chart))));
    c.bench_function("classify/icon", |b| b.iter(|| classifier.classify(black_box(&icon))));
    c.bench_function("classify/exported", |b| {
        b.iter(|| classifier.classify(black_box(&exported)))
    });
}

fn bench_scan(c: &mut Criterion) {
    let classifier = Classifier::default();
    let options = ScanOptions::default();
    let mut group = c.benchmark_group("scan");
    for sections in [1, 10, 50] {
        let doc = make_document(sections);
        group.bench_with_input(BenchmarkId::from_parameter(sections), &doc, |b, doc| {
            b.iter(|| find_charts(black_box(doc), &classifier, &options).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_classify, bench_scan);
criterion_main!(benches);
