// Copyright 2026 the Pintag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Rect;
use pintag_board::{Pin, PinBoard, ProductCard};
use pintag_geom::{FracPoint, ImageFrame};
use pintag_surface::{Surface, SurfaceKind};

fn seeded_board(len: usize) -> PinBoard<u32> {
    let pins = (0..len as u32).map(|i| {
        let t = f64::from(i) / len as f64;
        // Every third pin stays unassigned to exercise the suppression path.
        if i % 3 == 0 {
            Pin::unassigned(i, FracPoint::new(t, 1.0 - t))
        } else {
            Pin::assigned(
                i,
                FracPoint::new(t, 1.0 - t),
                ProductCard {
                    id: format!("P{i}"),
                    title: "Bench product".into(),
                    image_url: "https://img.example/bench.jpg".into(),
                    price: 10.0,
                    currency: "USD".into(),
                },
            )
        }
    });
    PinBoard::from_pins(pins, len)
}

fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("surface/project");

    for len in [20usize, 128, 1_024] {
        group.throughput(Throughput::Elements(len as u64));

        for kind in [SurfaceKind::Editor, SurfaceKind::Public] {
            let surface = Surface::new(kind, ImageFrame::new(Rect::new(0.0, 0.0, 640.0, 480.0)));
            group.bench_with_input(
                BenchmarkId::new(format!("{kind:?}"), len),
                &len,
                |b, &len| {
                    b.iter_batched(
                        || seeded_board(len),
                        |board| black_box(surface.project(&board)),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_projection);
criterion_main!(benches);
