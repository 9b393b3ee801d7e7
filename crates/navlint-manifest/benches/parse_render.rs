//! Benchmarks for manifest parsing and rendering.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use navlint_manifest::Manifest;

/// Generate an outline with the given depth and breadth.
fn generate_outline(depth: usize, breadth: usize) -> String {
    fn write_level(out: &mut String, prefix: &str, current: usize, depth: usize, breadth: usize) {
        if current > depth {
            return;
        }
        for i in 0..breadth {
            let indent = "    ".repeat(current);
            out.push_str(&format!(
                "{indent}- [Section {prefix}{i}]({prefix}{i}/index.md)\n"
            ));
            write_level(out, &format!("{prefix}{i}-"), current + 1, depth, breadth);
        }
    }

    let mut out = String::new();
    write_level(&mut out, "", 0, depth, breadth);
    out
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    // Small: ~30 entries, Medium: ~340 entries, Large: ~1365 entries
    for (depth, breadth, label) in [(2, 3, "small"), (3, 4, "medium"), (5, 4, "large")] {
        let text = generate_outline(depth, breadth);

        group.bench_with_input(BenchmarkId::from_parameter(label), &text, |b, text| {
            b.iter(|| Manifest::parse(text).unwrap());
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let text = generate_outline(3, 4);
    let manifest = Manifest::parse(&text).unwrap();

    let mut group = c.benchmark_group("render");

    group.bench_function("medium", |b| b.iter(|| manifest.render()));

    group.bench_function("round_trip", |b| {
        b.iter(|| Manifest::parse(&manifest.render()).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_render);

criterion_main!(benches);
