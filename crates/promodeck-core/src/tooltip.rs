//! Tooltip open/hover state
//!
//! Tracks which info tooltip is click-toggled open (at most one at a time)
//! and which are hover-highlighted. Hover is cosmetic, independent of the
//! open state, and only honored when a pointer is available.

use std::collections::HashSet;

pub type TooltipId = usize;

#[derive(Debug)]
pub struct TooltipController {
    count: usize,
    open: Option<TooltipId>,
    hovered: HashSet<TooltipId>,
    pointer_capable: bool,
}

impl TooltipController {
    pub fn new(count: usize, pointer_capable: bool) -> Self {
        Self {
            count,
            open: None,
            hovered: HashSet::new(),
            pointer_capable,
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The tooltip currently click-toggled open, if any
    pub fn open(&self) -> Option<TooltipId> {
        self.open
    }

    pub fn is_open(&self, id: TooltipId) -> bool {
        self.open == Some(id)
    }

    /// Click on a tooltip icon: every other open tooltip closes, then the
    /// clicked one toggles. The caller must consume the click so it does
    /// not also count as an outside click.
    pub fn toggle(&mut self, id: TooltipId) {
        if id >= self.count {
            return;
        }
        self.open = if self.open == Some(id) { None } else { Some(id) };
    }

    /// Escape key or a click outside every tooltip region
    pub fn close_all(&mut self) {
        self.open = None;
    }

    /// Pointer entered a tooltip region; ignored without pointer support
    pub fn hover_enter(&mut self, id: TooltipId) {
        if self.pointer_capable && id < self.count {
            self.hovered.insert(id);
        }
    }

    /// Pointer left a tooltip region
    pub fn hover_leave(&mut self, id: TooltipId) {
        self.hovered.remove(&id);
    }

    pub fn is_hovered(&self, id: TooltipId) -> bool {
        self.hovered.contains(&id)
    }
}
