//! Configuration for the force-directed layout

use serde::{Deserialize, Serialize};

use crate::error::{KinshipError, Result};

/// Parameters of the force simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Number of force/displacement rounds
    pub iterations: usize,

    /// Fraction of the accumulated force applied as displacement per round
    pub damping: f64,

    /// Inset from every canvas edge that non-root nodes are clamped into.
    /// Shrinks to half the canvas on small canvases.
    pub padding: f64,

    /// Seed for the initial scatter. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            iterations: 100,
            damping: 0.1,
            padding: 30.0,
            seed: None,
        }
    }
}

impl LayoutConfig {
    pub fn builder() -> LayoutConfigBuilder {
        LayoutConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(KinshipError::InvalidLayoutConfig(
                "iterations must be greater than 0".to_string(),
            ));
        }

        if !self.damping.is_finite() || self.damping <= 0.0 || self.damping > 1.0 {
            return Err(KinshipError::InvalidLayoutConfig(
                "damping must be in (0.0, 1.0]".to_string(),
            ));
        }

        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(KinshipError::InvalidLayoutConfig(
                "padding must be a non-negative number".to_string(),
            ));
        }

        Ok(())
    }

    /// Default parameters with a fixed seed, for reproducible output
    pub fn deterministic(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }
}

#[derive(Debug, Default)]
pub struct LayoutConfigBuilder {
    iterations: Option<usize>,
    damping: Option<f64>,
    padding: Option<f64>,
    seed: Option<u64>,
}

impl LayoutConfigBuilder {
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }

    pub fn damping(mut self, damping: f64) -> Self {
        self.damping = Some(damping);
        self
    }

    pub fn padding(mut self, padding: f64) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Unset fields fall back to [`LayoutConfig::default`]
    pub fn build(self) -> LayoutConfig {
        let defaults = LayoutConfig::default();

        LayoutConfig {
            iterations: self.iterations.unwrap_or(defaults.iterations),
            damping: self.damping.unwrap_or(defaults.damping),
            padding: self.padding.unwrap_or(defaults.padding),
            seed: self.seed.or(defaults.seed),
        }
    }
}
