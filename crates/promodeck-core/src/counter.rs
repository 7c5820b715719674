//! Count-up animation for statistic counters
//!
//! A `Counter` climbs from 0 to the target of its `StatFormat` over a fixed
//! duration, sampled on the app tick. Time is passed in explicitly so the
//! animation is deterministic under test.

use std::time::{Duration, Instant};

use crate::stat::StatFormat;

#[derive(Debug, Clone)]
pub struct Counter {
    format: StatFormat,
    start: Instant,
    duration: Duration,
    /// Highest value handed out so far; keeps the displayed sequence
    /// non-decreasing even if sampling time ever goes backwards
    floor: u32,
}

impl Counter {
    pub fn start(format: StatFormat, duration: Duration, now: Instant) -> Self {
        Self {
            format,
            start: now,
            duration,
            floor: 0,
        }
    }

    pub fn format(&self) -> &StatFormat {
        &self.format
    }

    /// Current counter value at `now`, clamped to the target
    pub fn value_at(&mut self, now: Instant) -> u32 {
        let target = self.format.target();
        if !self.format.is_animated() || self.duration.is_zero() {
            return target;
        }

        let elapsed = now.saturating_duration_since(self.start);
        if elapsed >= self.duration {
            self.floor = target;
            return target;
        }

        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let value = ((f64::from(target) * t) as u32).min(target);
        self.floor = self.floor.max(value);
        self.floor
    }

    /// Rendered display text at `now`; literals pass through unchanged
    pub fn display_at(&mut self, now: Instant) -> String {
        let value = self.value_at(now);
        self.format.render(value)
    }

    /// The animation is complete exactly when the value has reached the
    /// target; literals are complete from the start
    pub fn is_done_at(&self, now: Instant) -> bool {
        !self.format.is_animated()
            || self.duration.is_zero()
            || now.saturating_duration_since(self.start) >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_values(mut counter: Counter, start: Instant, duration_ms: u64) -> Vec<u32> {
        // 16ms tick, sampled a little past the end
        (0..=duration_ms / 16 + 2)
            .map(|i| counter.value_at(start + Duration::from_millis(i * 16)))
            .collect()
    }

    #[test]
    fn test_starts_at_zero_and_ends_at_target() {
        let start = Instant::now();
        let counter = Counter::start(
            StatFormat::parse("55%"),
            Duration::from_millis(2000),
            start,
        );
        let values = sample_values(counter, start, 2000);
        assert_eq!(values[0], 0);
        assert_eq!(*values.last().unwrap(), 55);
    }

    #[test]
    fn test_values_non_decreasing() {
        let start = Instant::now();
        let counter = Counter::start(
            StatFormat::parse("65%"),
            Duration::from_millis(3000),
            start,
        );
        let values = sample_values(counter, start, 3000);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_multiplier_counts_every_step() {
        let start = Instant::now();
        let counter = Counter::start(
            StatFormat::parse("4x"),
            Duration::from_millis(2000),
            start,
        );
        let mut values = sample_values(counter, start, 2000);
        values.dedup();
        assert_eq!(values, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_final_display_exact() {
        let start = Instant::now();
        let mut counter = Counter::start(
            StatFormat::parse("+25%"),
            Duration::from_millis(2000),
            start,
        );
        assert_eq!(
            counter.display_at(start + Duration::from_millis(2000)),
            "+25%"
        );
        // Well past the end, still clamped
        assert_eq!(
            counter.display_at(start + Duration::from_secs(60)),
            "+25%"
        );
    }

    #[test]
    fn test_literal_never_animates() {
        let start = Instant::now();
        let mut counter = Counter::start(
            StatFormat::parse("24/7"),
            Duration::from_millis(2000),
            start,
        );
        assert!(counter.is_done_at(start));
        assert_eq!(counter.display_at(start), "24/7");
        assert_eq!(
            counter.display_at(start + Duration::from_millis(1000)),
            "24/7"
        );
    }

    #[test]
    fn test_done_exactly_at_target_reached() {
        let start = Instant::now();
        let counter = Counter::start(
            StatFormat::parse("55%"),
            Duration::from_millis(2000),
            start,
        );
        assert!(!counter.is_done_at(start + Duration::from_millis(1999)));
        assert!(counter.is_done_at(start + Duration::from_millis(2000)));
    }

    #[test]
    fn test_zero_duration_jumps_to_target() {
        let start = Instant::now();
        let mut counter = Counter::start(StatFormat::parse("55%"), Duration::ZERO, start);
        assert_eq!(counter.value_at(start), 55);
        assert!(counter.is_done_at(start));
    }
}
