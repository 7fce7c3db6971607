use character_counter_mcp::analysis::{
    character_stats, count_characters, count_characters_ignore_case,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const SAMPLE: &str = "The quick brown fox jumps over the lazy dog. Strawberry, raspberry, \
    blueberry! Ünïcödé characters and emoji 🍓 mixed into an otherwise ordinary sentence.";

pub fn criterion_benchmark(c: &mut Criterion) {
    let text = SAMPLE.repeat(64);

    c.bench_function("count_characters", |b| {
        b.iter(|| count_characters(black_box(&text), black_box("r")))
    });
    c.bench_function("count_characters_ignore_case", |b| {
        b.iter(|| count_characters_ignore_case(black_box(&text), black_box("R")))
    });
    c.bench_function("character_stats", |b| {
        b.iter(|| character_stats(black_box(&text)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
