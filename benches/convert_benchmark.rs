//! Benchmarks for wikisync conversion performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic documents with mixed paragraphs, nested
//! lists and overlapping styles.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wikisync::model::{Document, ListItem, Paragraph, StyleSpan, Text};

/// Creates a synthetic document with `sections` heading/paragraph/list blocks.
fn create_test_document(sections: usize) -> Document {
    let mut doc = Document::new();

    for i in 0..sections {
        doc.push(Paragraph::heading(format!("Section {}", i + 1), 2));

        let body = "Benchmark content with bold, italic and a link in the middle.";
        let mut para = Paragraph::new();
        para.add_text(
            Text::plain(body)
                .with_span(StyleSpan::bold(24..28))
                .with_span(StyleSpan::italic(30..36))
                .with_span(StyleSpan::link(43..47, "https://example.org"))
                .with_span(StyleSpan::strikethrough(0..9)),
        );
        doc.push(para);

        for level in [0, 1, 2, 1, 0, 3] {
            doc.push(ListItem::new(format!("item at level {}", level), level));
        }
    }

    doc
}

/// Creates the same document as JSON.
fn create_test_json(sections: usize) -> String {
    let mut elements = Vec::new();
    for i in 0..sections {
        elements.push(format!(
            r#"{{"type": "paragraph", "heading": "HEADING2", "children": [{{"type": "text", "text": "Section {}"}}]}}"#,
            i + 1
        ));
        elements.push(
            r#"{"type": "paragraph", "children": [{"type": "text", "text": "Plain and bold", "styles": [{"start": 10, "end": 14, "bold": true}]}]}"#
                .to_string(),
        );
        for level in [0, 1, 2, 1, 0] {
            elements.push(format!(
                r#"{{"type": "list_item", "nesting_level": {}, "children": [{{"type": "text", "text": "item"}}]}}"#,
                level
            ));
        }
    }
    format!(r#"{{"body": [{}]}}"#, elements.join(","))
}

/// Benchmark body structuring.
fn bench_structure(c: &mut Criterion) {
    let doc = create_test_document(100);

    c.bench_function("structure_100_sections", |b| {
        b.iter(|| black_box(&doc).structure().len());
    });
}

/// Benchmark conversion to each dialect at various sizes.
fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    for sections in [1, 10, 100].iter() {
        let doc = create_test_document(*sections);

        for format in ["html", "markdown"] {
            group.bench_function(format!("{}_{}_sections", format, sections), |b| {
                b.iter(|| wikisync::convert(format, black_box(&doc)).unwrap());
            });
        }
    }

    group.finish();
}

/// Benchmark JSON loading.
fn bench_parse_json(c: &mut Criterion) {
    let json = create_test_json(100);

    c.bench_function("parse_json_100_sections", |b| {
        b.iter(|| wikisync::parse_str(black_box(&json)).unwrap());
    });
}

criterion_group!(benches, bench_structure, bench_convert, bench_parse_json);
criterion_main!(benches);
