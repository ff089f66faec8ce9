//! Per-element delay counter

use crate::delay::Delay;
use crate::timing::StaggerTiming;

/// Hands out increasing delays for one staggered sequence
///
/// A clock belongs to a single element; create a new one (or [`reset`]) for
/// the next element.
///
/// [`reset`]: StaggerClock::reset
#[derive(Clone, Debug)]
pub struct StaggerClock {
    timing: StaggerTiming,
    ticks: usize,
}

impl StaggerClock {
    pub fn new(timing: StaggerTiming) -> Self {
        Self { timing, ticks: 0 }
    }

    /// Delay for the next glyph, advancing the clock by one step
    pub fn next_delay(&mut self) -> Delay {
        let delay = self.timing.delay_for_index(self.ticks);
        self.ticks += 1;
        delay
    }

    /// Delay the next call to [`next_delay`](Self::next_delay) will return
    pub fn peek(&self) -> Delay {
        self.timing.delay_for_index(self.ticks)
    }

    /// Most recently handed out delay, if any
    pub fn last_delay(&self) -> Option<Delay> {
        self.ticks
            .checked_sub(1)
            .map(|index| self.timing.delay_for_index(index))
    }

    /// Number of delays handed out so far
    pub fn ticks(&self) -> usize {
        self.ticks
    }

    pub fn reset(&mut self) {
        self.ticks = 0;
    }
}

impl Default for StaggerClock {
    fn default() -> Self {
        Self::new(StaggerTiming::default())
    }
}
