//! Performance benchmarks for the greedy segmenter and level search
//!
//! Run with: cargo bench --bench segmenter_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hanlevel_core::{Ladder, LadderKind, LevelResolver, Segmenter};
use std::hint::black_box;

const SENTENCE: &str = "我们明天一起去图书馆学习中文，好吗？";

/// Ladder with every character of the sample spread over the levels
fn sample_ladder() -> Ladder {
    let mut ladder = Ladder::new(LadderKind::Hsk);
    let characters: Vec<char> = SENTENCE.chars().collect();
    for (index, ch) in characters.iter().enumerate() {
        let level = (index % 7) as u8 + 1;
        ladder
            .level_mut(level)
            .unwrap()
            .insert(ch.encode_utf8(&mut [0; 4]).as_bytes());
    }
    ladder.level_mut(2).unwrap().extend(["我们", "明天", "一起", "图书馆", "学习", "中文"]);
    ladder
}

/// Benchmark level search over growing sentence lengths
fn bench_minimal_level(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimal_level");
    let ladder = sample_ladder();
    let resolver = LevelResolver::default();

    for repeat in [1, 4, 16, 64] {
        let text = SENTENCE.repeat(repeat);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("sentence", repeat), &text, |b, text| {
            b.iter(|| resolver.minimal_level(black_box(text), &ladder));
        });
    }

    group.finish();
}

/// Worst case: a long run of unknown ideographs drives every candidate length
fn bench_unknown_run(c: &mut Criterion) {
    let ladder = sample_ladder();
    let segmenter = Segmenter::default();
    let known = ladder.upto(7).unwrap();
    let text = "龘".repeat(200);

    c.bench_function("unknown_run", |b| {
        b.iter(|| segmenter.can_segment(black_box(&text), &known));
    });
}

criterion_group!(benches, bench_minimal_level, bench_unknown_run);
criterion_main!(benches);
