//! Stagger timing configuration

use serde::{Deserialize, Serialize};

use crate::delay::Delay;

/// Default delay of the first glyph and default step between glyphs (seconds)
pub const DEFAULT_STEP_SECS: f64 = 0.05;

/// Default number of decimals in rendered delays
pub const DEFAULT_PRECISION: usize = 2;

/// Timing of a staggered sequence
///
/// The glyph at `index` starts `initial_secs + index * step_secs` seconds
/// after the animation is triggered.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StaggerTiming {
    /// Delay of the first glyph
    pub initial_secs: f64,
    /// Delay added per glyph
    pub step_secs: f64,
    /// Decimals used when rendering delays
    pub precision: usize,
}

impl Default for StaggerTiming {
    fn default() -> Self {
        Self {
            initial_secs: DEFAULT_STEP_SECS,
            step_secs: DEFAULT_STEP_SECS,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl StaggerTiming {
    pub fn new(initial_secs: f64, step_secs: f64) -> Self {
        Self {
            initial_secs,
            step_secs,
            precision: DEFAULT_PRECISION,
        }
    }

    /// Set the number of decimals used when rendering delays
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Delay for a specific glyph index
    pub fn delay_for_index(&self, index: usize) -> Delay {
        Delay::new(
            self.initial_secs + self.step_secs * index as f64,
            self.precision,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timing() {
        let timing = StaggerTiming::default();
        assert_eq!(timing.delay_for_index(0).to_string(), "0.05s");
        assert_eq!(timing.delay_for_index(1).to_string(), "0.10s");
        assert_eq!(timing.delay_for_index(6).to_string(), "0.35s");
    }

    #[test]
    fn test_long_runs_do_not_drift() {
        let timing = StaggerTiming::default();
        // 0.05 accumulated 200 times drifts in the last bits; index math does not
        assert_eq!(timing.delay_for_index(199).to_string(), "10.00s");
        assert_eq!(timing.delay_for_index(1999).to_string(), "100.00s");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let timing: StaggerTiming = toml::from_str("step_secs = 0.1").unwrap();
        assert_eq!(timing.initial_secs, DEFAULT_STEP_SECS);
        assert_eq!(timing.step_secs, 0.1);
        assert_eq!(timing.precision, DEFAULT_PRECISION);
    }
}
