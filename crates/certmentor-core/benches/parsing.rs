use criterion::{black_box, criterion_group, criterion_main, Criterion};

use certmentor_core::quiz::parse_quiz;

fn bench_parse_quiz(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_quiz");

    let single = "Q1: What is S3?\nA) Storage\nB) Compute\nC) Database\nAnswer: A - object storage\n";

    let five = generate_quiz_text(5, false);
    let fifty = generate_quiz_text(50, false);
    let messy = generate_quiz_text(50, true);

    group.bench_function("single_block", |b| {
        b.iter(|| parse_quiz(black_box(single)))
    });

    group.bench_function("5_blocks", |b| b.iter(|| parse_quiz(black_box(&five))));

    group.bench_function("50_blocks", |b| b.iter(|| parse_quiz(black_box(&fifty))));

    group.bench_function("50_blocks_with_malformed", |b| {
        b.iter(|| parse_quiz(black_box(&messy)))
    });

    group.finish();
}

fn generate_quiz_text(n: usize, with_malformed: bool) -> String {
    let mut s = String::from("Here are your practice questions:\n\n");
    for i in 1..=n {
        if with_malformed && i % 5 == 0 {
            // A block the parser has to skip.
            s.push_str(&format!("Q{i}: Question with no options\nAnswer: A - orphaned\n\n"));
            continue;
        }
        s.push_str(&format!(
            "Q{i}: Which service handles workload {i}?\n\
A) Service Alpha\n\
B) Service Beta\n\
C) Service Gamma\n\
Answer: B - Beta is built for workload {i}\n\n"
        ));
    }
    s
}

criterion_group!(benches, bench_parse_quiz);
criterion_main!(benches);
