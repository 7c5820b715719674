use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::debug;

use promodeck_core::{
    AppConfig, Counter, Deck, RevealObserver, RevealState, TooltipController, Viewport,
};

use crate::layout::{CounterRole, PageLayout, StatKey};
use crate::scroll::ScrollAnimator;
use crate::theme::Theme;

/// Rows scrolled per mouse wheel notch
const WHEEL_LINES: i32 = 3;

/// Application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub deck: Deck,
    pub theme: Theme,
    /// Page geometry for the current content width
    pub layout: PageLayout,
    /// Viewport scroll position and its animation
    pub scroll: ScrollAnimator,
    /// Reveal-on-scroll state, one entry per layout target
    pub reveal: RevealObserver,
    /// Tooltip open/hover state
    pub tooltips: TooltipController,
    /// Running counters, created at most once per stat
    counters: HashMap<StatKey, Counter>,
    /// Display text of each started counter, refreshed every tick
    counter_text: HashMap<StatKey, String>,
    /// Currently selected nav link
    pub selected_link: usize,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Content area from the last render, for mouse hit testing
    pub content_area: Rect,
    /// Nav bar area from the last render
    pub nav_area: Rect,
}

impl App {
    pub fn new(deck: Deck, config: Arc<AppConfig>, theme: Theme, width: u16) -> Self {
        let layout = PageLayout::solve(&deck, width);
        let reveal = RevealObserver::new(
            config.ui.reveal.threshold,
            config.ui.reveal.bottom_margin_rows,
            config.ui.reveal.stagger(),
            layout.targets.len(),
        );
        let tooltips = TooltipController::new(layout.tooltip_sites.len(), config.ui.mouse);
        let scroll = ScrollAnimator::new(config.ui.scroll.clone());

        Self {
            config,
            deck,
            theme,
            layout,
            scroll,
            reveal,
            tooltips,
            counters: HashMap::new(),
            counter_text: HashMap::new(),
            selected_link: 0,
            pending_key: None,
            should_quit: false,
            content_area: Rect::default(),
            nav_area: Rect::default(),
        }
    }

    /// Recompute page geometry after a terminal resize. Reveal and counter
    /// state carries over: the target list depends only on deck structure.
    pub fn relayout(&mut self, width: u16) {
        self.layout = PageLayout::solve(&self.deck, width);
    }

    pub fn viewport(&self) -> Viewport {
        Viewport {
            top: self.scroll.current_scroll(),
            height: self.content_area.height,
        }
    }

    pub fn max_scroll(&self) -> u16 {
        self.layout
            .total_height
            .saturating_sub(self.content_area.height)
    }

    /// Advance every animation one frame: scroll position, the reveal
    /// observation pass, staggered reveals, and counter start/refresh
    pub fn on_tick(&mut self, now: Instant) {
        self.scroll.update(self.max_scroll(), now);

        let spans = self.layout.observed_spans();
        self.reveal.observe(self.viewport(), &spans, now);
        self.reveal.poll(now);

        self.start_due_counters(now);
        for (key, counter) in &mut self.counters {
            self.counter_text.insert(*key, counter.display_at(now));
        }
    }

    /// Start counters whose owning block has been revealed. Insertion into
    /// the map is the once-only guard: a stat that has animated never
    /// animates again, no matter how often its block re-enters the viewport.
    fn start_due_counters(&mut self, now: Instant) {
        for site in &self.layout.counter_sites {
            if !self.reveal.is_revealed(site.target) {
                continue;
            }
            if self.counters.contains_key(&site.key) {
                continue;
            }
            let duration = match site.role {
                CounterRole::RoiResult => self.config.ui.counter.result_duration(),
                CounterRole::Hero | CounterRole::RoiMetric => self.config.ui.counter.duration(),
            };
            self.counters
                .insert(site.key, Counter::start(site.format.clone(), duration, now));
        }
    }

    /// Whether the next frame needs the fast tick rate
    pub fn animating(&self, now: Instant) -> bool {
        self.scroll.needs_update()
            || self.reveal.has_pending()
            || self.counters.values().any(|c| !c.is_done_at(now))
    }

    /// Current display text for a stat; `None` until its counter starts
    pub fn stat_text(&self, key: StatKey) -> Option<&str> {
        self.counter_text.get(&key).map(String::as_str)
    }

    /// Reveal state of a block or timeline entry; unobserved content
    /// counts as revealed so it is never stuck invisible
    pub fn reveal_state(&self, section: usize, block: usize, entry: Option<usize>) -> RevealState {
        match self.layout.target_index(section, block, entry) {
            Some(idx) => self.reveal.state(idx),
            None => RevealState::Revealed,
        }
    }

    /// Follow a nav link: resolve its fragment and glide the section's
    /// heading to the top of the viewport. A dangling target is a no-op.
    pub fn follow_link(&mut self, index: usize, now: Instant) {
        let Some(link) = self.deck.nav.get(index) else {
            return;
        };
        let Some(section) = self.deck.section_index(&link.target) else {
            debug!(target = %link.target, "anchor does not match any section");
            return;
        };
        if let Some(row) = self.layout.anchor_row(section) {
            self.scroll.scroll_to(row, self.max_scroll(), now);
        }
    }

    pub fn next_link(&mut self) {
        if !self.deck.nav.is_empty() {
            self.selected_link = (self.selected_link + 1) % self.deck.nav.len();
        }
    }

    pub fn prev_link(&mut self) {
        if !self.deck.nav.is_empty() {
            self.selected_link = self
                .selected_link
                .checked_sub(1)
                .unwrap_or(self.deck.nav.len() - 1);
        }
    }

    pub fn jump_to_top(&mut self, now: Instant) {
        self.scroll.scroll_to(0, self.max_scroll(), now);
    }

    pub fn jump_to_bottom(&mut self, now: Instant) {
        self.scroll.scroll_to(self.max_scroll(), self.max_scroll(), now);
    }

    /// Clear the pending key
    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }

    /// Route a mouse event: wheel scrolling, nav and tooltip clicks,
    /// hover tracking, and the global outside-click close
    pub fn on_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        match mouse.kind {
            MouseEventKind::ScrollDown => {
                self.scroll.scroll_by(WHEEL_LINES, self.max_scroll());
            }
            MouseEventKind::ScrollUp => {
                self.scroll.scroll_by(-WHEEL_LINES, self.max_scroll());
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.on_click(mouse.column, mouse.row, now);
            }
            MouseEventKind::Moved => {
                self.on_hover(mouse.column, mouse.row);
            }
            _ => {}
        }
    }

    fn on_click(&mut self, x: u16, y: u16, now: Instant) {
        if contains(self.nav_area, x, y) {
            if let Some(idx) = self.layout.nav_link_at(x - self.nav_area.x) {
                self.selected_link = idx;
                self.follow_link(idx, now);
            }
            // Chrome is outside every tooltip region
            self.tooltips.close_all();
            return;
        }

        if contains(self.content_area, x, y) {
            if let Some((row, col)) = self.page_coords(x, y) {
                if let Some(id) = self.layout.tooltip_at(row, col) {
                    // Consumed here: a click on an icon must not also run
                    // the outside-click close in the same dispatch
                    self.tooltips.toggle(id);
                    return;
                }
            }
        }

        self.tooltips.close_all();
    }

    fn on_hover(&mut self, x: u16, y: u16) {
        let under = self
            .page_coords(x, y)
            .and_then(|(row, col)| self.layout.tooltip_at(row, col));
        for id in 0..self.tooltips.len() {
            if under == Some(id) {
                self.tooltips.hover_enter(id);
            } else {
                self.tooltips.hover_leave(id);
            }
        }
    }

    /// Screen position to page coordinates, `None` outside the content area
    fn page_coords(&self, x: u16, y: u16) -> Option<(u16, u16)> {
        if !contains(self.content_area, x, y) {
            return None;
        }
        let row = (y - self.content_area.y).checked_add(self.scroll.current_scroll())?;
        let col = x - self.content_area.x;
        Some((row, col))
    }
}

fn contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}
