// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use quadrant_tree::{Limits, QuadTree, Segment};

const DOMAIN: f64 = 2000.0;

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

fn domain() -> Rect {
    Rect::new(0.0, 0.0, DOMAIN, DOMAIN)
}

fn gen_random_segments(seed: u64, count: usize, max_len: f64) -> Vec<Segment> {
    let mut rng = Rng::new(seed);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let x = rng.next_f64() * DOMAIN;
        let y = rng.next_f64() * DOMAIN;
        let dx = (rng.next_f64() - 0.5) * max_len;
        let dy = (rng.next_f64() - 0.5) * max_len;
        out.push(Segment::from_coords(x, y, x + dx, y + dy));
    }
    out
}

fn gen_clustered_segments(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Segment> {
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    for _ in 0..n_clusters {
        let cx = rng.next_f64() * DOMAIN;
        let cy = rng.next_f64() * DOMAIN;
        for _ in 0..per_cluster {
            let x = cx + (rng.next_f64() - 0.5) * spread;
            let y = cy + (rng.next_f64() - 0.5) * spread;
            out.push(Segment::from_coords(x, y, x + 4.0, y + 3.0));
        }
    }
    out
}

fn build(segments: &[Segment], limits: Limits) -> QuadTree {
    let mut tree = QuadTree::with_limits(domain(), limits);
    for s in segments {
        tree.insert(*s);
    }
    tree
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &n in &[1024usize, 4096, 16384] {
        let segments = gen_random_segments(0xCAFE_F00D_DEAD_BEEF, n, 40.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("random_n{}", n), |b| {
            b.iter_batched(
                || QuadTree::new(domain()),
                |mut tree| {
                    for s in &segments {
                        tree.insert(*s);
                    }
                    black_box(tree.stats());
                },
                BatchSize::SmallInput,
            )
        });
    }
    let segments = gen_clustered_segments(16, 256, 60.0);
    for (name, limits) in [
        ("clustered_default", Limits::default()),
        (
            "clustered_deep",
            Limits {
                max_depth: 8,
                max_segments_per_leaf: 8,
            },
        ),
    ] {
        group.bench_function(name, |b| {
            b.iter_batched(
                || QuadTree::with_limits(domain(), limits),
                |mut tree| {
                    for s in &segments {
                        tree.insert(*s);
                    }
                    black_box(tree.stats());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_segment_probe(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_probe");
    let segments = gen_random_segments(0xBADC_F00D_1234_5678, 8192, 40.0);
    let probes = gen_random_segments(0xFACE_FEED_CAFE_BABE, 256, 80.0);
    group.throughput(Throughput::Elements(probes.len() as u64));
    for (name, limits) in [
        ("tree_default", Limits::default()),
        (
            "tree_deep",
            Limits {
                max_depth: 8,
                max_segments_per_leaf: 8,
            },
        ),
    ] {
        let tree = build(&segments, limits);
        group.bench_function(name, |b| {
            b.iter(|| {
                let hits = probes.iter().filter(|p| tree.intersects_segment(p)).count();
                black_box(hits);
            })
        });
    }
    group.bench_function("linear_scan", |b| {
        b.iter(|| {
            let hits = probes
                .iter()
                .filter(|p| segments.iter().any(|s| p.intersects(s)))
                .count();
            black_box(hits);
        })
    });
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");
    let segments = gen_random_segments(0x0DDB_A11C_0FFE_E000, 8192, 40.0);
    let tree = build(&segments, Limits::default());
    let mut rng = Rng::new(0x5EED_5EED_5EED_5EED);
    let centers: Vec<Point> = (0..256)
        .map(|_| Point::new(rng.next_f64() * DOMAIN, rng.next_f64() * DOMAIN))
        .collect();
    group.throughput(Throughput::Elements(centers.len() as u64));
    group.bench_function("circle_r10", |b| {
        b.iter(|| {
            let hits = centers
                .iter()
                .filter(|&&c| tree.collides_with_circle(c, 10.0))
                .count();
            black_box(hits);
        })
    });
    group.bench_function("leaf_for_point", |b| {
        b.iter(|| {
            for &p in &centers {
                black_box(tree.leaf_for_point(p));
            }
        })
    });
    group.bench_function("rect_colliding_leaves", |b| {
        b.iter(|| {
            for &p in &centers {
                let r = Rect::from_origin_size(p, (50.0, 50.0));
                black_box(tree.rect_colliding_leaves(r).len());
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_insert, bench_segment_probe, bench_queries);
criterion_main!(benches);
