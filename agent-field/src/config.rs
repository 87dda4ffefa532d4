//! Field configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tuning knobs for the ambient field. Read-only to the field itself.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FieldConfig {
    /// Number of agents seeded on every (re)build.
    pub agent_count: usize,

    /// Maximum velocity magnitude, in logical units per tick.
    pub speed: f32,

    /// Magnitude of the random per-tick acceleration (scaled by 0.02).
    pub jitter: f32,

    /// Side of each agent's square, in logical pixels.
    pub agent_size: f32,

    /// Grid spacing in logical pixels; zero or negative disables the grid.
    pub grid_gap: f32,

    pub grid_alpha: f32,

    /// Maximum distance at which two agents are linked.
    pub link_dist: f32,

    /// Link opacity at distance zero.
    pub link_alpha_near: f32,

    /// Link opacity at `link_dist`.
    pub link_alpha_far: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            agent_count: 90,
            speed: 0.35,
            jitter: 0.6,
            agent_size: 2.0,
            grid_gap: 48.0,
            grid_alpha: 0.035,
            link_dist: 120.0,
            link_alpha_near: 0.22,
            link_alpha_far: 0.0,
        }
    }
}

impl FieldConfig {
    /// Check that values are in the ranges the renderers expect. The field
    /// itself tolerates anything; this is for loaders that want to warn.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !is_non_negative(self.speed) {
            return Err("speed must be non-negative");
        }
        if !is_non_negative(self.jitter) {
            return Err("jitter must be non-negative");
        }
        if !is_non_negative(self.agent_size) {
            return Err("agent_size must be non-negative");
        }
        if !is_non_negative(self.link_dist) {
            return Err("link_dist must be non-negative");
        }
        let alphas = [self.grid_alpha, self.link_alpha_near, self.link_alpha_far];
        if alphas.iter().any(|alpha| !(0.0..=1.0).contains(alpha)) {
            return Err("alpha values must be within [0, 1]");
        }
        Ok(())
    }
}

fn is_non_negative(value: f32) -> bool {
    value >= 0.0
}
