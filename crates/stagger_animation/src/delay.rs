//! Animation delay values

use std::fmt;

/// An animation delay in seconds, carrying the number of decimals used when
/// rendered as a CSS time value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Delay {
    secs: f64,
    precision: usize,
}

impl Delay {
    pub fn new(secs: f64, precision: usize) -> Self {
        Self { secs, precision }
    }

    pub fn as_secs(&self) -> f64 {
        self.secs
    }
}

impl fmt::Display for Delay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*}s", self.precision, self.secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_precision() {
        assert_eq!(Delay::new(0.05, 2).to_string(), "0.05s");
        assert_eq!(Delay::new(0.15000000000000002, 2).to_string(), "0.15s");
        assert_eq!(Delay::new(1.5, 3).to_string(), "1.500s");
        assert_eq!(Delay::new(2.0, 0).to_string(), "2s");
    }
}
