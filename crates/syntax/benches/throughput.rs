// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Criterion benchmarks for parse and print throughput.

use criterion::{criterion_group, criterion_main, Criterion};

use brackish_syntax::{parse, print, ParseMode};

// ---------------------------------------------------------------------------
// Script generators
// ---------------------------------------------------------------------------

fn long_strings(n: usize) -> String {
    let mut script = String::new();
    for i in 0..n {
        script.push_str(&format!("# comment line {i}\n"));
        script.push_str(&format!("long_lit_{i}_abcdefgh\n"));
        script.push_str(&format!("'quoted {i} words here'\n"));
        script.push_str(&format!("\"double {i} $var here\"\n"));
    }
    script
}

fn nested_commands(n: usize) -> String {
    let mut script = String::new();
    for i in 0..n {
        script.push_str(&format!("f{i}() {{ (a{i}); {{ b{i}; }}; }}\n"));
        script.push_str(&format!("$(c{i} `d{i}`)\n"));
    }
    script
}

fn vars_and_clauses(n: usize) -> String {
    let mut script = String::new();
    for i in 0..n {
        script.push_str(&format!("foo=bar{i} v{i}=$x ${{complex{i}:-default}}\n"));
        script.push_str(&format!(
            "if a{i}; then while b{i}; do for c in d e; do f; done; done; fi\n"
        ));
    }
    script
}

fn binaries_and_redirects(n: usize) -> String {
    let mut script = String::new();
    for i in 0..n {
        script.push_str(&format!("a{i} | b && c || d | e\n"));
        script.push_str(&format!("foo >a{i} <b <<<c 2>&1 <<EOF\nheredoc line {i}\nEOF\n"));
    }
    script
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_parse(c: &mut Criterion) {
    let cases = [
        ("long_strings", long_strings(50)),
        ("nested_commands", nested_commands(50)),
        ("vars_and_clauses", vars_and_clauses(50)),
        ("binaries_and_redirects", binaries_and_redirects(50)),
    ];
    let mut group = c.benchmark_group("parse");
    for (name, src) in &cases {
        group.bench_function(*name, |b| {
            b.iter(|| {
                parse(src, "", ParseMode::PARSE_COMMENTS).expect("benchmark input parses")
            })
        });
    }
    group.finish();
}

fn bench_print(c: &mut Criterion) {
    let src = binaries_and_redirects(50);
    let f = parse(&src, "", ParseMode::PARSE_COMMENTS).expect("benchmark input parses");
    c.bench_function("print", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(src.len());
            print(&mut out, &f).expect("printing to a Vec cannot fail");
            out
        })
    });
}

criterion_group!(benches, bench_parse, bench_print);
criterion_main!(benches);
