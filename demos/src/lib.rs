// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared harness for the Quadrant Tree demos.
//!
//! Loads a TOML scene description, generates ring-arc segments, sets up logging, and
//! renders a tree to SVG for inspection.

pub mod config;
pub mod scene;
pub mod svg;

pub use config::SceneConfig;
pub use scene::{Scene, probe_segments, ring_segments};

use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber filtered by `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
