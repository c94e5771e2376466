// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree SVG
//!
//! Builds the ring scene and writes the subdivision, the stored segments, and the probes
//! that hit something to an SVG file.
//!
//! Run:
//! - `cargo run -p quadrant_demos --example tree_svg -- [scene.toml] [out.svg]`

use std::path::PathBuf;

use quadrant_demos::{Scene, SceneConfig, init_tracing, probe_segments, svg};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let scene_path = args
        .next()
        .map_or_else(|| PathBuf::from("demos/scene.toml"), PathBuf::from);
    let out_path = args
        .next()
        .map_or_else(|| PathBuf::from("quadrant_tree.svg"), PathBuf::from);

    let config = SceneConfig::load(&scene_path)?;
    let scene = Scene::build(&config);

    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(1));
    let hits: Vec<_> = probe_segments(&config, &mut rng)
        .into_iter()
        .filter(|p| scene.tree.intersects_segment(p))
        .collect();

    let drawing = svg::render(&scene.tree, &hits)?;
    std::fs::write(&out_path, drawing)?;
    info!(path = %out_path.display(), highlighted = hits.len(), "wrote svg");
    Ok(())
}
