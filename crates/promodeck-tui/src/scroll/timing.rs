//! Progress and interpolation helpers for scroll animations

use std::time::{Duration, Instant};

/// Animation progress in [0, 1] at `now`
#[inline]
pub fn progress_at(start: Instant, duration: Duration, now: Instant) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

/// Whether the animation has run its full duration at `now`
#[inline]
pub fn is_complete_at(start: Instant, duration: Duration, now: Instant) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Linear interpolation for scroll row positions
#[inline]
pub fn lerp_u16(from: u16, to: u16, t: f64) -> u16 {
    lerp(f64::from(from), f64::from(to), t).round() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0)).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 1.0) - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_lerp_u16() {
        assert_eq!(lerp_u16(10, 20, 0.0), 10);
        assert_eq!(lerp_u16(10, 20, 0.5), 15);
        assert_eq!(lerp_u16(10, 20, 1.0), 20);
        // Downward scrolls interpolate too
        assert_eq!(lerp_u16(20, 10, 0.5), 15);
    }

    #[test]
    fn test_progress_zero_duration() {
        let start = Instant::now();
        assert!((progress_at(start, Duration::ZERO, start) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_clamped() {
        let start = Instant::now();
        let duration = Duration::from_millis(100);
        assert!(progress_at(start, duration, start).abs() < 0.001);
        assert!(
            (progress_at(start, duration, start + Duration::from_secs(1)) - 1.0).abs() < 0.001
        );
        assert!(is_complete_at(start, duration, start + Duration::from_millis(100)));
        assert!(!is_complete_at(start, duration, start + Duration::from_millis(99)));
    }
}
