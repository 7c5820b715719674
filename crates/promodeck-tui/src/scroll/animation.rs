//! Scroll animation controller
//!
//! Owns the viewport scroll position. Anchor jumps call `scroll_to`, manual
//! scrolling accumulates deltas through `scroll_by`, and `update` advances
//! the active animation once per frame. Time is passed in explicitly, which
//! keeps the controller deterministic under test.

use std::time::{Duration, Instant};

use promodeck_core::{EasingType, ScrollConfig};

use super::easing::EasingTypeExt;
use super::timing::{is_complete_at, lerp_u16, progress_at};

/// State of the animation currently in flight
#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: u16,
    to: u16,
    duration: Duration,
    easing: EasingType,
}

#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    animation: Option<ActiveAnimation>,
    config: ScrollConfig,
    /// Current scroll position, updated every frame
    current: u16,
    /// Accumulated delta from scroll events since the last frame; batching
    /// rapid key repeats into one retarget keeps chained scrolls smooth
    pending_delta: i32,
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            config,
            current: 0,
            pending_delta: 0,
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Whether the next frame needs the fast tick rate
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animation.is_some() || self.pending_delta != 0
    }

    #[inline]
    pub fn current_scroll(&self) -> u16 {
        self.current
    }

    /// Where the viewport will end up once the animation settles
    pub fn target_scroll(&self) -> u16 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current)
    }

    /// Jump to a position with no animation
    pub fn set_scroll(&mut self, scroll: u16) {
        self.animation = None;
        self.pending_delta = 0;
        self.current = scroll;
    }

    /// Animate to an absolute position (anchor navigation)
    pub fn scroll_to(&mut self, target: u16, max_scroll: u16, now: Instant) {
        let target = target.min(max_scroll);

        if !self.config.is_smooth() {
            self.set_scroll(target);
            return;
        }

        if self.current == target {
            self.animation = None;
            return;
        }

        self.animation = Some(ActiveAnimation {
            start: now,
            from: self.current,
            to: target,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }

    /// Scroll by a delta (positive = down); deltas accumulate until the
    /// next `update` call
    pub fn scroll_by(&mut self, delta: i32, max_scroll: u16) {
        if !self.config.is_smooth() {
            let target = (i32::from(self.current) + delta).clamp(0, i32::from(max_scroll));
            self.set_scroll(target as u16);
            return;
        }
        self.pending_delta += delta;
    }

    /// One line down (smooth) or the configured step (instant)
    pub fn scroll_down(&mut self, max_scroll: u16) {
        self.scroll_by(self.step(), max_scroll);
    }

    pub fn scroll_up(&mut self, max_scroll: u16) {
        self.scroll_by(-self.step(), max_scroll);
    }

    fn step(&self) -> i32 {
        if self.config.is_smooth() {
            1
        } else {
            i32::from(self.config.scroll_lines)
        }
    }

    pub fn half_page_down(&mut self, viewport_height: u16, max_scroll: u16) {
        self.scroll_by(i32::from((viewport_height / 2).max(1)), max_scroll);
    }

    pub fn half_page_up(&mut self, viewport_height: u16, max_scroll: u16) {
        self.scroll_by(-i32::from((viewport_height / 2).max(1)), max_scroll);
    }

    pub fn page_down(&mut self, viewport_height: u16, max_scroll: u16) {
        self.scroll_by(i32::from(viewport_height), max_scroll);
    }

    pub fn page_up(&mut self, viewport_height: u16, max_scroll: u16) {
        self.scroll_by(-i32::from(viewport_height), max_scroll);
    }

    /// Advance the animation one frame and return the current position.
    ///
    /// Pending deltas retarget relative to the current animation target, so
    /// a held-down key chains into one continuous glide.
    pub fn update(&mut self, max_scroll: u16, now: Instant) -> u16 {
        if self.pending_delta != 0 {
            let target = (i32::from(self.target_scroll()) + self.pending_delta)
                .clamp(0, i32::from(max_scroll)) as u16;
            self.pending_delta = 0;

            if target != self.current {
                self.animation = Some(ActiveAnimation {
                    start: now,
                    from: self.current,
                    to: target,
                    duration: self.config.animation_duration(),
                    easing: self.config.easing,
                });
            }
        }

        if let Some(ref anim) = self.animation {
            if is_complete_at(anim.start, anim.duration, now) {
                self.current = anim.to.min(max_scroll);
                self.animation = None;
            } else {
                let t = progress_at(anim.start, anim.duration, now);
                let eased = anim.easing.apply(t);
                self.current = lerp_u16(anim.from, anim.to, eased).min(max_scroll);
            }
        }

        self.current
    }

    /// Stop at the current position, dropping any pending work
    pub fn cancel(&mut self) {
        self.animation = None;
        self.pending_delta = 0;
    }
}
