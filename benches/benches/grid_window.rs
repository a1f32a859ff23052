// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;
use understory_virtual_grid::{GridConfig, GridWindow, InfiniteLoader, PageState};

fn bench_visible_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_window");
    for &loaded in &[1_000usize, 100_000] {
        let mut window = GridWindow::new(GridConfig::default());
        window.set_viewport(Size::new(1600.0, 1200.0));
        window.set_page(PageState::partial(loaded));
        let max = window.max_scroll_top();
        let steps = 512;
        group.throughput(Throughput::Elements(steps as u64));
        group.bench_function(format!("scroll_sweep_n{}", loaded), |b| {
            b.iter(|| {
                for i in 0..steps {
                    let top = max * i as f64 / steps as f64;
                    let range = window.visible_range(top);
                    black_box(window.cells(&range).len());
                }
            });
        });
        group.bench_function(format!("scroll_sweep_load_n{}", loaded), |b| {
            b.iter(|| {
                let mut loader = InfiniteLoader::new(window.config());
                for i in 0..steps {
                    let top = max * i as f64 / steps as f64;
                    let range = window.visible_range(top);
                    black_box(loader.on_items_rendered(&window, range.items));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_visible_range);
criterion_main!(benches);
