//! The fixed-step simulation clock.

use std::time::{Duration, Instant};

use crate::constants::MIN_TICK_MS;

/// Accumulates wall-clock time and yields fixed-step tick deltas.
///
/// A tick is yielded only once the accumulated total reaches the minimum
/// tick threshold, and it carries the full accumulated delta rather than the
/// clamped threshold, keeping motion proportional to real time under
/// variable invocation rates. [`SimulationClock::resync`] drops time
/// accumulated while the simulation was paused so the first resumed tick
/// sees no jump.
pub struct SimulationClock {
    last: Instant,
    accumulated: Duration,
}

impl SimulationClock {
    pub fn new() -> SimulationClock {
        SimulationClock {
            last: Instant::now(),
            accumulated: Duration::ZERO,
        }
    }

    /// Forgets everything elapsed since the last poll; call on unpause.
    pub fn resync(&mut self) {
        self.last = Instant::now();
        self.accumulated = Duration::ZERO;
    }

    /// Measures against the wall clock and accumulates the elapsed time.
    pub fn poll(&mut self) -> Option<f32> {
        let now = Instant::now();
        let elapsed = now - self.last;
        self.last = now;
        self.accumulate(elapsed)
    }

    /// Adds externally measured elapsed time. Yields the full accumulated
    /// delta, in milliseconds, once it crosses the tick threshold.
    pub fn accumulate(&mut self, elapsed: Duration) -> Option<f32> {
        self.accumulated += elapsed;
        let total_ms = self.accumulated.as_micros() as f32 / 1000.0;
        if total_ms < MIN_TICK_MS {
            return None;
        }

        self.accumulated = Duration::ZERO;
        Some(total_ms)
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_threshold_keeps_accumulating() {
        let mut clock = SimulationClock::new();

        assert_eq!(clock.accumulate(Duration::from_millis(6)), None);
        assert_eq!(clock.accumulate(Duration::from_millis(6)), None);
        assert_eq!(clock.accumulate(Duration::from_millis(6)), Some(18.0));
    }

    #[test]
    fn test_yields_full_delta_not_threshold() {
        let mut clock = SimulationClock::new();

        assert_eq!(clock.accumulate(Duration::from_millis(40)), Some(40.0));
        // the accumulator restarts from zero afterwards
        assert_eq!(clock.accumulate(Duration::from_millis(10)), None);
    }

    #[test]
    fn test_resync_drops_accumulated_time() {
        let mut clock = SimulationClock::new();

        assert_eq!(clock.accumulate(Duration::from_millis(12)), None);
        clock.resync();
        assert_eq!(clock.accumulate(Duration::from_millis(12)), None);
    }
}
