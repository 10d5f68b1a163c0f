use criterion::{Criterion, criterion_group, criterion_main};
use entrylint_engine::{Linter, parse_markdown};

/// An awesome-list style document with `sections` sections of 50 entries,
/// roughly one in ten of them invalid.
fn generate_awesome_list(sections: usize) -> String {
    let mut out = String::from("# Awesome Things\n\n## Contents\n\n");
    for s in 0..sections {
        out.push_str(&format!("- [Section {s}](#section-{s})\n"));
    }
    for s in 0..sections {
        out.push_str(&format!("\n## Section {s}\n\n"));
        for i in 0..50 {
            let line = match i % 10 {
                0 => format!("- [tool-{s}-{i}](https://example.com/{s}/{i}) - lowercase start.\n"),
                3 => format!(
                    "- [Tool {s} {i}](https://example.com/{s}/{i}) - Has `code` and **bold** text. `v1`\n"
                ),
                7 => format!(
                    "- [Tool {s} {i}](https://example.com/{s}/{i}) – Uses an en dash.\n"
                ),
                _ => format!(
                    "- [Tool {s} {i}](https://example.com/{s}/{i}) - A tool for job {i}.\n"
                ),
            };
            out.push_str(&line);
        }
    }
    out
}

fn bench_lint(c: &mut Criterion) {
    let mut group = c.benchmark_group("lint");
    group.sample_size(10);

    let content = generate_awesome_list(40);
    let linter = Linter::new();

    group.bench_function("parse", |b| {
        b.iter(|| std::hint::black_box(parse_markdown(std::hint::black_box(&content))));
    });

    group.bench_function("lint_str", |b| {
        b.iter(|| std::hint::black_box(linter.lint_str(std::hint::black_box(&content))));
    });

    group.finish();
}

criterion_group!(benches, bench_lint);
criterion_main!(benches);
