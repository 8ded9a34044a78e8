// Copyright 2026 the Pintag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Point;
use pintag_board::{Pin, PinBoard};
use pintag_geom::FracPoint;
use pintag_gesture::hit;

fn seed_pins(len: usize) -> Vec<Pin<u32>> {
    (0..len as u32)
        .map(|i| {
            let t = f64::from(i) / len as f64;
            Pin::unassigned(i, FracPoint::new(t, 1.0 - t))
        })
        .collect()
}

fn bench_board_edits(c: &mut Criterion) {
    let mut group = c.benchmark_group("board/edits");

    // Boards cap at a couple dozen pins in production; the larger sizes
    // exist to confirm the linear scans stay flat well past that.
    for len in [20usize, 128, 1_024] {
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("drag_to", len), &len, |b, &len| {
            b.iter_batched(
                || PinBoard::from_pins(seed_pins(len), len),
                |mut board| {
                    let last = len as u32 - 1;
                    board.drag_to(&last, FracPoint::new(0.123, 0.456));
                    black_box(board);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("remove", len), &len, |b, &len| {
            b.iter_batched(
                || PinBoard::from_pins(seed_pins(len), len),
                |mut board| {
                    board.remove(&(len as u32 / 2));
                    black_box(board);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("move_to", len), &len, |b, &len| {
            b.iter_batched(
                || PinBoard::from_pins(seed_pins(len), len),
                |mut board| {
                    board.move_to(len - 1, 0);
                    black_box(board);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_seeding(c: &mut Criterion) {
    let mut group = c.benchmark_group("board/seed");

    // Hypothesis: `from_pins` is O(n^2) from de-dup scanning while
    // `from_pins_hashed` is O(n); irrelevant at the cap, visible past it.
    for len in [20usize, 1_024, 8_192] {
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("from_pins", len), &len, |b, &len| {
            b.iter_batched(
                || seed_pins(len),
                |pins| black_box(PinBoard::from_pins(pins, len)),
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("from_pins_hashed", len), &len, |b, &len| {
            b.iter_batched(
                || seed_pins(len),
                |pins| black_box(PinBoard::from_pins_hashed(pins, len)),
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_hit_testing(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/hit");

    for len in [20usize, 128, 1_024] {
        let markers: Vec<(u32, Point)> = (0..len as u32)
            .map(|i| (i, Point::new(f64::from(i) * 3.0, f64::from(i) * 2.0)))
            .collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("top_hit", len), &markers, |b, markers| {
            b.iter(|| {
                black_box(hit::top_hit(
                    markers.iter().copied(),
                    Point::new(150.0, 100.0),
                    12.0,
                ))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_board_edits, bench_seeding, bench_hit_testing);
criterion_main!(benches);
