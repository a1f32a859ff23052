// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use understory_floating::{FloatingConfig, Key, KeyEvent, KeyHandler, Placement, compute_position};
use understory_suggest::{SuggestionConfig, SuggestionItem, SuggestionList};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1280.0, 800.0);

fn gen_references(count: usize, seed: u64) -> Vec<Rect> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| {
            let x = rng.next_f64() * (VIEWPORT.width() - 40.0);
            let y = rng.next_f64() * (VIEWPORT.height() - 20.0);
            Rect::new(x, y, x + 40.0, y + 20.0)
        })
        .collect()
}

fn bench_compute_position(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_position");
    let refs = gen_references(1024, 0x5eed);
    let floating = Size::new(240.0, 320.0);
    group.throughput(Throughput::Elements(refs.len() as u64));

    let bare = FloatingConfig::new(Placement::BOTTOM_START);
    group.bench_function("bare", |b| {
        b.iter(|| {
            for r in &refs {
                black_box(compute_position(*r, floating, VIEWPORT, &bare));
            }
        });
    });

    let suggest = SuggestionConfig::default().floating_config();
    group.bench_function("size_flip_offset_shift", |b| {
        b.iter(|| {
            for r in &refs {
                black_box(compute_position(*r, floating, VIEWPORT, &suggest));
            }
        });
    });
    group.finish();
}

fn bench_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("suggest_navigation");
    for &n in &[12usize, 256] {
        let items: Vec<SuggestionItem> = (0..n)
            .map(|i| SuggestionItem::new(format!("{i}"), format!("user {i}")))
            .collect();
        group.bench_function(format!("arrow_down_n{}", n), |b| {
            b.iter_batched(
                || {
                    let mut list = SuggestionList::new(
                        SuggestionConfig::default(),
                        (|_: &SuggestionItem| {}) as fn(&SuggestionItem),
                    );
                    list.open(items.clone(), Duration::ZERO);
                    list
                },
                |mut list| {
                    let down = KeyEvent::new(Key::ArrowDown);
                    for _ in 0..(2 * n) {
                        list.on_key_down(&down);
                    }
                    black_box(list.rows().len());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compute_position, bench_navigation);
criterion_main!(benches);
