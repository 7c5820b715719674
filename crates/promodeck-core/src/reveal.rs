//! Reveal-on-scroll observer
//!
//! Watches a set of content blocks (given as row extents in page space) and
//! marks each one revealed the first time enough of it enters the viewport.
//! The transition is permanent: scrolling away and back never replays it.
//! Staggered targets (timeline entries) revealed in the same observation
//! pass are delayed by their index within that batch.

use std::time::{Duration, Instant};

/// Vertical extent of a block in page rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpan {
    pub top: u16,
    pub height: u16,
}

impl RowSpan {
    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }
}

/// The part of the page currently on screen
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub top: u16,
    pub height: u16,
}

/// One observed block: its extent plus whether it participates in the
/// staggered batch reveal
#[derive(Debug, Clone, Copy)]
pub struct ObservedSpan {
    pub rows: RowSpan,
    pub staggered: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    /// Intersection seen, reveal scheduled for the stored instant
    Pending,
    Revealed,
}

#[derive(Debug, Clone, Copy)]
enum State {
    Hidden,
    Pending(Instant),
    Revealed,
}

#[derive(Debug)]
pub struct RevealObserver {
    threshold: f64,
    bottom_margin: u16,
    stagger: Duration,
    states: Vec<State>,
}

impl RevealObserver {
    pub fn new(threshold: f64, bottom_margin: u16, stagger: Duration, count: usize) -> Self {
        Self {
            threshold,
            bottom_margin,
            stagger,
            states: vec![State::Hidden; count],
        }
    }

    /// Number of observed targets
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn state(&self, idx: usize) -> RevealState {
        match self.states.get(idx) {
            Some(State::Hidden) | None => RevealState::Hidden,
            Some(State::Pending(_)) => RevealState::Pending,
            Some(State::Revealed) => RevealState::Revealed,
        }
    }

    pub fn is_revealed(&self, idx: usize) -> bool {
        self.state(idx) == RevealState::Revealed
    }

    /// Whether any staggered reveal is still scheduled
    pub fn has_pending(&self) -> bool {
        self.states.iter().any(|s| matches!(s, State::Pending(_)))
    }

    /// Run one observation pass against the current viewport.
    ///
    /// Newly intersecting targets transition Hidden -> Revealed immediately,
    /// except staggered ones, which are scheduled at
    /// `now + batch_index * stagger` in span index order. Already revealed
    /// or pending targets are left alone. An empty span set is a no-op.
    pub fn observe(&mut self, viewport: Viewport, spans: &[ObservedSpan], now: Instant) {
        let mut batch_index = 0u32;
        for (state, span) in self.states.iter_mut().zip(spans) {
            if !matches!(state, State::Hidden) {
                continue;
            }
            if !intersects(viewport, span.rows, self.threshold, self.bottom_margin) {
                continue;
            }
            if span.staggered {
                *state = State::Pending(now + self.stagger * batch_index);
                batch_index += 1;
            } else {
                *state = State::Revealed;
            }
        }
    }

    /// Promote due pending reveals; call once per tick
    pub fn poll(&mut self, now: Instant) {
        for state in &mut self.states {
            if let State::Pending(due) = state {
                if *due <= now {
                    *state = State::Revealed;
                }
            }
        }
    }
}

/// Intersection test: at least `threshold` of the span's rows must fall
/// inside the viewport, with `bottom_margin` rows excluded at its bottom
/// edge (so a block barely peeking in at the bottom does not count)
fn intersects(viewport: Viewport, rows: RowSpan, threshold: f64, bottom_margin: u16) -> bool {
    if rows.height == 0 {
        return false;
    }
    let view_top = viewport.top;
    let view_bottom = viewport
        .top
        .saturating_add(viewport.height.saturating_sub(bottom_margin));
    let overlap_top = rows.top.max(view_top);
    let overlap_bottom = rows.bottom().min(view_bottom);
    if overlap_bottom <= overlap_top {
        return false;
    }
    let visible = f64::from(overlap_bottom - overlap_top);
    visible / f64::from(rows.height) >= threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observer(count: usize) -> RevealObserver {
        RevealObserver::new(0.1, 3, Duration::from_millis(200), count)
    }

    fn span(top: u16, height: u16) -> ObservedSpan {
        ObservedSpan {
            rows: RowSpan { top, height },
            staggered: false,
        }
    }

    fn staggered(top: u16, height: u16) -> ObservedSpan {
        ObservedSpan {
            rows: RowSpan { top, height },
            staggered: true,
        }
    }

    #[test]
    fn test_reveals_when_threshold_crossed() {
        let mut obs = observer(1);
        let now = Instant::now();
        // Viewport rows 0..17 after the 3-row bottom margin; block 16..26
        // shows exactly 1 of 10 rows, which meets the 10% threshold
        let viewport = Viewport { top: 0, height: 20 };
        obs.observe(viewport, &[span(16, 10)], now);
        assert!(obs.is_revealed(0));
    }

    #[test]
    fn test_bottom_margin_excluded() {
        let mut obs = observer(1);
        let now = Instant::now();
        // Block starts on the last 3 rows of the viewport, inside the margin
        let viewport = Viewport { top: 0, height: 20 };
        obs.observe(viewport, &[span(18, 10)], now);
        assert!(!obs.is_revealed(0));
    }

    #[test]
    fn test_below_threshold_stays_hidden() {
        let mut obs = observer(1);
        let now = Instant::now();
        // 1 visible row of 20 is 5%, below the 10% threshold
        let viewport = Viewport { top: 0, height: 20 };
        obs.observe(viewport, &[span(16, 20)], now);
        assert_eq!(obs.state(0), RevealState::Hidden);
    }

    #[test]
    fn test_reveal_is_permanent() {
        let mut obs = observer(1);
        let now = Instant::now();
        obs.observe(Viewport { top: 0, height: 20 }, &[span(0, 5)], now);
        assert!(obs.is_revealed(0));

        // Scroll far away and observe again
        obs.observe(Viewport { top: 500, height: 20 }, &[span(0, 5)], now);
        assert!(obs.is_revealed(0));
    }

    #[test]
    fn test_empty_set_is_noop() {
        let mut obs = observer(0);
        obs.observe(
            Viewport { top: 0, height: 20 },
            &[],
            Instant::now(),
        );
        assert!(obs.is_empty());
        assert!(!obs.has_pending());
    }

    #[test]
    fn test_staggered_batch_order() {
        let mut obs = observer(3);
        let now = Instant::now();
        let spans = [staggered(0, 4), staggered(4, 4), staggered(8, 4)];
        obs.observe(Viewport { top: 0, height: 20 }, &spans, now);

        // All pending; first is due immediately
        obs.poll(now);
        assert!(obs.is_revealed(0));
        assert_eq!(obs.state(1), RevealState::Pending);
        assert_eq!(obs.state(2), RevealState::Pending);

        obs.poll(now + Duration::from_millis(200));
        assert!(obs.is_revealed(1));
        assert_eq!(obs.state(2), RevealState::Pending);

        obs.poll(now + Duration::from_millis(400));
        assert!(obs.is_revealed(2));
        assert!(!obs.has_pending());
    }

    #[test]
    fn test_stagger_index_counts_batch_not_position() {
        let mut obs = observer(3);
        let now = Instant::now();
        // First entry already revealed in an earlier pass
        obs.observe(Viewport { top: 0, height: 20 }, &[staggered(0, 4)], now);
        obs.poll(now);

        // Entries 1 and 2 arrive later as a fresh batch: delays restart at 0
        let spans = [staggered(0, 4), staggered(4, 4), staggered(8, 4)];
        let later = now + Duration::from_secs(5);
        obs.observe(Viewport { top: 0, height: 20 }, &spans, later);
        obs.poll(later);
        assert!(obs.is_revealed(1));
        obs.poll(later + Duration::from_millis(200));
        assert!(obs.is_revealed(2));
    }

    #[test]
    fn test_observe_does_not_reschedule_pending() {
        let mut obs = observer(1);
        let now = Instant::now();
        let spans = [staggered(0, 4)];
        obs.observe(Viewport { top: 0, height: 20 }, &spans, now);

        // A second pass before the due time must not push the deadline out
        obs.observe(
            Viewport { top: 0, height: 20 },
            &spans,
            now + Duration::from_millis(100),
        );
        obs.poll(now + Duration::from_millis(1));
        assert!(obs.is_revealed(0));
    }
}
