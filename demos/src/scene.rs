// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Procedural scenes: ring-arc segments and probe segments.

use std::f64::consts::TAU;

use kurbo::{Point, Vec2};
use quadrant_tree::{QuadTree, Segment};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::config::SceneConfig;

/// A generated segment set and the tree built over it.
#[derive(Debug)]
pub struct Scene {
    /// Every generated segment, including those that miss the domain.
    pub segments: Vec<Segment>,
    /// Tree over the segments that intersect the domain.
    pub tree: QuadTree,
}

impl Scene {
    /// Generate the rings described by `config` and insert them into a fresh tree.
    pub fn build(config: &SceneConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let segments = ring_segments(config, &mut rng);
        let mut tree = QuadTree::with_limits(config.bounds(), config.limits);
        let stored = segments.iter().filter(|s| tree.insert(**s)).count();
        let stats = tree.stats();
        info!(
            generated = segments.len(),
            stored,
            nodes = stats.nodes,
            leaves = stats.leaves,
            depth = stats.max_depth,
            "built scene"
        );
        Self { segments, tree }
    }

    /// Whether `probe` crosses any generated segment, checking every one.
    pub fn brute_force_intersects(&self, probe: &Segment) -> bool {
        self.segments.iter().any(|s| probe.intersects(s))
    }
}

/// Chords of concentric rings centered at a quarter of the domain size.
///
/// Outer rings extend past the domain; those chords are still returned.
pub fn ring_segments(config: &SceneConfig, rng: &mut impl Rng) -> Vec<Segment> {
    let center = Point::new(config.width * 0.25, config.height * 0.25);
    let rings = &config.rings;
    let mut divisions = rings.initial_divisions;
    let mut out = Vec::new();
    for i in 1..=rings.count {
        let radius = f64::from(i);
        let angle = TAU / divisions;
        let mut j = 0_u32;
        while f64::from(j) < divisions {
            let a0 = f64::from(j) * angle;
            let start = center + radius * Vec2::new(a0.cos(), a0.sin());
            let end = center + radius * Vec2::new((a0 + angle).cos(), (a0 + angle).sin());
            out.push(Segment::new(start, end));
            j += 2;
        }
        if rings.division_growth > 0.0 {
            divisions = rng.random_range(divisions..divisions + rings.division_growth);
        }
    }
    out
}

/// Short horizontal probes placed uniformly inside the domain.
///
/// Each probe runs from `p - (h, h)` to `p + (h, -h)`, with `p` drawn so both ends stay
/// inside. `h` is clamped to half the width and to the full height.
pub fn probe_segments(config: &SceneConfig, rng: &mut impl Rng) -> Vec<Segment> {
    let h = config
        .probe
        .half_extent
        .min(config.width * 0.5)
        .min(config.height)
        .max(0.0);
    (0..config.probe.count)
        .map(|_| {
            let x = rng.random_range(h..=config.width - h);
            let y = rng.random_range(h..=config.height);
            Segment::from_coords(x - h, y - h, x + h, y - h)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> SceneConfig {
        let mut config = SceneConfig::default();
        config.width = 400.0;
        config.height = 300.0;
        config.rings.count = 60;
        config.probe.count = 100;
        config
    }

    #[test]
    fn first_ring_is_one_chord() {
        let mut config = small_config();
        config.rings.count = 1;
        let mut rng = StdRng::seed_from_u64(1);
        let segments = ring_segments(&config, &mut rng);
        assert_eq!(segments.len(), 1, "two divisions keep one chord");
        let s = segments[0];
        assert!((s.start() - Point::new(101.0, 75.0)).hypot() < 1e-9);
        assert!((s.end() - Point::new(99.0, 75.0)).hypot() < 1e-9);
    }

    #[test]
    fn probes_stay_inside_domain() {
        let config = small_config();
        let mut rng = StdRng::seed_from_u64(2);
        let bounds = config.bounds();
        for p in probe_segments(&config, &mut rng) {
            for q in [p.start(), p.end()] {
                assert!(q.x >= bounds.x0 && q.x <= bounds.x1, "{q:?}");
                assert!(q.y >= bounds.y0 && q.y <= bounds.y1, "{q:?}");
            }
        }
    }

    #[test]
    fn probes_fit_a_domain_smaller_than_their_extent() {
        let mut config = small_config();
        config.width = 4.0;
        config.height = 3.0;
        config.probe.half_extent = 5.0;
        let mut rng = StdRng::seed_from_u64(4);
        let probes = probe_segments(&config, &mut rng);
        assert_eq!(probes.len(), config.probe.count);
        let bounds = config.bounds();
        for p in probes {
            for q in [p.start(), p.end()] {
                assert!(q.x >= bounds.x0 && q.x <= bounds.x1, "{q:?}");
                assert!(q.y >= bounds.y0 && q.y <= bounds.y1, "{q:?}");
            }
        }
    }

    #[test]
    fn tree_agrees_with_brute_force() {
        let config = small_config();
        let scene = Scene::build(&config);
        let mut rng = StdRng::seed_from_u64(3);
        for probe in probe_segments(&config, &mut rng) {
            assert_eq!(
                scene.tree.intersects_segment(&probe),
                scene.brute_force_intersects(&probe),
                "{probe:?}"
            );
        }
    }
}
