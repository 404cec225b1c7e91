//! Benchmarks for unlayout rendering performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks render synthetic analyzer output without touching disk.

use std::path::Path;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use unlayout::render::{self, ExportOptions, JsonFormat};
use unlayout::{BBox, Cell, DocumentResult, Paragraph, Table};

/// Creates a synthetic page with the given number of paragraphs and tables.
fn create_test_page(paragraphs: usize, tables: usize) -> DocumentResult {
    let mut doc = DocumentResult::new();
    let mut order = 0;

    for i in 0..paragraphs {
        let bbox = BBox::new(0.0, i as f64 * 20.0, 500.0, i as f64 * 20.0 + 18.0);
        let text = format!(
            "Paragraph {} with a link https://example.com/{} and *markup* (v1.{})\nsecond line",
            i, i, i
        );
        let paragraph = if i % 10 == 0 {
            Paragraph::heading(bbox, order, text)
        } else {
            Paragraph::new(bbox, order, text)
        };
        doc.add_paragraph(paragraph);
        order += 1;
    }

    for t in 0..tables {
        let mut table = Table::new(BBox::default(), order, 12, 6);
        // Header spans the full width
        table.add_cell(Cell::new(1, 1, format!("Table {}", t)).with_span(1, 6));
        for row in 2..=12 {
            for col in 1..=6 {
                table.add_cell(Cell::new(row, col, format!("{}.{}", row, col)));
            }
        }
        doc.add_table(table);
        order += 1;
    }

    doc
}

/// Benchmark rendering each format at various page sizes.
fn bench_render_formats(c: &mut Criterion) {
    let options = ExportOptions::default();

    for (paragraphs, tables) in [(10, 1), (100, 5)].iter() {
        let doc = create_test_page(*paragraphs, *tables);
        let mut group = c.benchmark_group(format!("render_{}p_{}t", paragraphs, tables));

        group.bench_function("markdown", |b| {
            b.iter(|| render::to_markdown(black_box(&doc), None, Path::new("bench.md"), &options))
        });
        group.bench_function("html", |b| {
            b.iter(|| render::to_html(black_box(&doc), None, Path::new("bench.html"), &options))
        });
        group.bench_function("csv", |b| b.iter(|| render::to_csv(black_box(&doc), false)));
        group.bench_function("json", |b| {
            b.iter(|| render::to_json(black_box(&doc), JsonFormat::Compact, false))
        });

        group.finish();
    }
}

/// Benchmark the HTML re-parse pass alone.
fn bench_html_reformat(c: &mut Criterion) {
    let mut body = String::new();
    for i in 0..200 {
        body.push_str(&format!("<p>line {}<br>next</p>", i));
    }
    let html = format!("<html><body>{}</body></html>", body);

    c.bench_function("html_reformat", |b| {
        b.iter(|| render::reformat_html(black_box(&html)))
    });
}

criterion_group!(benches, bench_render_formats, bench_html_reformat);
criterion_main!(benches);
