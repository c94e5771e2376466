// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene configuration.

use std::path::Path;

use kurbo::Rect;
use quadrant_tree::Limits;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Root of a scene file. Every key is optional.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SceneConfig {
    /// Domain width.
    #[serde(default = "default_width")]
    pub width: f64,
    /// Domain height.
    #[serde(default = "default_height")]
    pub height: f64,
    /// Seed for ring divisions and probe placement.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Ring generation parameters.
    #[serde(default)]
    pub rings: RingConfig,
    /// Probe placement parameters.
    #[serde(default)]
    pub probe: ProbeConfig,
    /// Tree subdivision limits.
    #[serde(default)]
    pub limits: Limits,
}

impl SceneConfig {
    /// Load a scene from `path`, or use defaults when the file does not exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            let config = toml::from_str(&contents)?;
            info!(path = %path.display(), "loaded scene");
            Ok(config)
        } else {
            info!(path = %path.display(), "no scene file found, using defaults");
            Ok(Self::default())
        }
    }

    /// The tree domain, anchored at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            seed: default_seed(),
            rings: RingConfig::default(),
            probe: ProbeConfig::default(),
            limits: Limits::default(),
        }
    }
}

/// Concentric ring generation.
///
/// Ring `i` has radius `i` and is cut into `divisions` equal arcs, every other one kept as
/// a chord. `divisions` then grows by a random amount in `[0, division_growth)`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RingConfig {
    /// Number of rings.
    #[serde(default = "default_ring_count")]
    pub count: u32,
    /// Divisions of the innermost ring.
    #[serde(default = "default_initial_divisions")]
    pub initial_divisions: f64,
    /// Upper bound on the per-ring growth of the division count.
    #[serde(default = "default_division_growth")]
    pub division_growth: f64,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            count: default_ring_count(),
            initial_divisions: default_initial_divisions(),
            division_growth: default_division_growth(),
        }
    }
}

/// Probe segments used to compare the tree against a linear scan.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProbeConfig {
    /// Number of probes.
    #[serde(default = "default_probe_count")]
    pub count: usize,
    /// Half the width and height of each probe's diagonal.
    #[serde(default = "default_half_extent")]
    pub half_extent: f64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            count: default_probe_count(),
            half_extent: default_half_extent(),
        }
    }
}

fn default_width() -> f64 {
    1280.0
}
fn default_height() -> f64 {
    720.0
}
fn default_seed() -> u64 {
    7
}
fn default_ring_count() -> u32 {
    319
}
fn default_initial_divisions() -> f64 {
    2.0
}
fn default_division_growth() -> f64 {
    10.0
}
fn default_probe_count() -> usize {
    200
}
fn default_half_extent() -> f64 {
    5.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config: SceneConfig = toml::from_str("").unwrap();
        assert_eq!(config.width, 1280.0);
        assert_eq!(config.rings.count, 319);
        assert_eq!(config.limits, Limits::default());
    }

    #[test]
    fn partial_limits_table_keeps_other_defaults() {
        let config: SceneConfig = toml::from_str(
            r#"
            width = 400.0
            [limits]
            max_depth = 7
            "#,
        )
        .unwrap();
        assert_eq!(config.bounds(), Rect::new(0.0, 0.0, 400.0, 720.0));
        assert_eq!(config.limits.max_depth, 7);
        assert_eq!(config.limits.max_segments_per_leaf, 5);
        assert_eq!(config.probe.half_extent, 5.0);
    }

    #[test]
    fn shipped_scene_parses() {
        let contents = include_str!("../scene.toml");
        let config: SceneConfig = toml::from_str(contents).unwrap();
        assert_eq!(config.probe.count, 200);
    }
}
