// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ring Probe
//!
//! Builds the ring scene and times each probe against the tree and against a linear scan.
//!
//! Run:
//! - `cargo run -p quadrant_demos --example ring_probe -- [scene.toml]`
//! - `RUST_LOG=debug` also prints every probe.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use quadrant_demos::{Scene, SceneConfig, init_tracing, probe_segments};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("demos/scene.toml"), PathBuf::from);
    let config = SceneConfig::load(&path)?;
    let scene = Scene::build(&config);

    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(1));
    let probes = probe_segments(&config, &mut rng);

    let mut fast_total = Duration::ZERO;
    let mut brute_total = Duration::ZERO;
    let mut hits = 0_usize;
    for probe in &probes {
        let t0 = Instant::now();
        let fast = scene.tree.intersects_segment(probe);
        let fast_elapsed = t0.elapsed();

        let t1 = Instant::now();
        let brute = scene.brute_force_intersects(probe);
        let brute_elapsed = t1.elapsed();

        debug!(?probe, fast, ?fast_elapsed, ?brute_elapsed, "probe");
        if fast != brute {
            warn!(?probe, fast, brute, "tree and linear scan disagree");
        }
        hits += usize::from(fast);
        fast_total += fast_elapsed;
        brute_total += brute_elapsed;
    }

    info!(
        probes = probes.len(),
        hits,
        ?fast_total,
        ?brute_total,
        "probe timings"
    );
    Ok(())
}
