//! Page layout solver
//!
//! Flattens a deck into page-space row extents for a given content width.
//! The solver is the single source of truth for where everything lives:
//! reveal targets for the observer, anchor rows for nav links, counter
//! sites for the three animated stat groups, and tooltip hit regions for
//! mouse click and hover routing. Widgets must emit exactly the line
//! counts computed here.

use promodeck_core::{Block, Deck, ObservedSpan, RowSpan, StatFormat, TooltipId};
use unicode_width::UnicodeWidthStr;

/// Rows used by a section heading (title plus a blank line)
pub const HEADING_ROWS: u16 = 2;
/// Rows used by a stat row (values, captions, blank)
pub const STATS_ROWS: u16 = 3;

/// Identifies one stat within the deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatKey {
    pub section: usize,
    pub block: usize,
    pub slot: StatSlot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatSlot {
    /// Index into a `Stats` block's items
    Item(usize),
    /// Index into a `Roi` block's metrics
    Metric(usize),
    /// A `Roi` block's result line
    Result,
}

/// Which of the three independently guarded counter groups a site
/// belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterRole {
    Hero,
    RoiMetric,
    RoiResult,
}

/// One counter call site: a stat plus the reveal target that triggers it
#[derive(Debug, Clone)]
pub struct CounterSite {
    pub key: StatKey,
    pub role: CounterRole,
    pub format: StatFormat,
    /// Index of the owning block's reveal target
    pub target: usize,
}

/// Mouse hit region for a tooltip-bearing stat, in page coordinates
#[derive(Debug, Clone)]
pub struct TooltipSite {
    pub key: StatKey,
    pub rows: RowSpan,
    /// Column range `[start, end)` within the content area
    pub cols: (u16, u16),
    pub text: String,
}

/// What a reveal target refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetRef {
    Block { section: usize, block: usize },
    TimelineEntry { section: usize, block: usize, entry: usize },
}

#[derive(Debug, Clone)]
pub struct RevealTarget {
    pub target_ref: TargetRef,
    pub span: ObservedSpan,
}

/// Row extent of one block, in document order
#[derive(Debug, Clone)]
pub struct BlockExtent {
    pub section: usize,
    pub block: usize,
    pub rows: RowSpan,
}

#[derive(Debug)]
pub struct PageLayout {
    pub width: u16,
    pub total_height: u16,
    /// Heading extent per section; the top row doubles as the anchor
    pub headings: Vec<RowSpan>,
    pub blocks: Vec<BlockExtent>,
    pub targets: Vec<RevealTarget>,
    pub counter_sites: Vec<CounterSite>,
    pub tooltip_sites: Vec<TooltipSite>,
    /// Column range `[start, end)` of each nav link in the nav bar row
    pub nav_cols: Vec<(u16, u16)>,
}

impl PageLayout {
    pub fn solve(deck: &Deck, width: u16) -> Self {
        let mut layout = Self {
            width,
            total_height: 0,
            headings: Vec::with_capacity(deck.sections.len()),
            blocks: Vec::new(),
            targets: Vec::new(),
            counter_sites: Vec::new(),
            tooltip_sites: Vec::new(),
            nav_cols: nav_link_cols(deck),
        };

        let mut row = 0u16;
        for (si, section) in deck.sections.iter().enumerate() {
            layout.headings.push(RowSpan {
                top: row,
                height: HEADING_ROWS,
            });
            row = row.saturating_add(HEADING_ROWS);

            for (bi, block) in section.blocks.iter().enumerate() {
                let height = block_height(block, width);
                let rows = RowSpan { top: row, height };
                layout.blocks.push(BlockExtent {
                    section: si,
                    block: bi,
                    rows,
                });
                layout.add_targets_and_sites(si, bi, block, rows, width);
                row = row.saturating_add(height);
            }
        }

        layout.total_height = row;
        layout
    }

    fn add_targets_and_sites(
        &mut self,
        section: usize,
        block_idx: usize,
        block: &Block,
        rows: RowSpan,
        width: u16,
    ) {
        match block {
            Block::Timeline { entries } => {
                // Timeline entries are observed individually so the batch
                // stagger applies per entry
                let mut top = rows.top;
                for (ei, entry) in entries.iter().enumerate() {
                    let height = timeline_entry_height(entry, width);
                    self.targets.push(RevealTarget {
                        target_ref: TargetRef::TimelineEntry {
                            section,
                            block: block_idx,
                            entry: ei,
                        },
                        span: ObservedSpan {
                            rows: RowSpan { top, height },
                            staggered: true,
                        },
                    });
                    top = top.saturating_add(height);
                }
            }
            _ => {
                let target = self.targets.len();
                self.targets.push(RevealTarget {
                    target_ref: TargetRef::Block {
                        section,
                        block: block_idx,
                    },
                    span: ObservedSpan {
                        rows,
                        staggered: false,
                    },
                });

                match block {
                    Block::Stats { items } => {
                        self.add_stat_row_sites(
                            section, block_idx, items, rows, width, target,
                            CounterRole::Hero, StatSlot::Item,
                        );
                    }
                    Block::Roi { metrics, result } => {
                        self.add_stat_row_sites(
                            section, block_idx, metrics, rows, width, target,
                            CounterRole::RoiMetric, StatSlot::Metric,
                        );
                        if let Some(result) = result {
                            let key = StatKey {
                                section,
                                block: block_idx,
                                slot: StatSlot::Result,
                            };
                            self.counter_sites.push(CounterSite {
                                key,
                                role: CounterRole::RoiResult,
                                format: StatFormat::parse(&result.value),
                                target,
                            });
                            if let Some(text) = &result.tooltip {
                                self.tooltip_sites.push(TooltipSite {
                                    key,
                                    rows: RowSpan {
                                        top: rows.top.saturating_add(STATS_ROWS),
                                        height: 1,
                                    },
                                    cols: (0, width),
                                    text: text.clone(),
                                });
                            }
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn add_stat_row_sites(
        &mut self,
        section: usize,
        block_idx: usize,
        stats: &[promodeck_core::Stat],
        rows: RowSpan,
        width: u16,
        target: usize,
        role: CounterRole,
        slot: fn(usize) -> StatSlot,
    ) {
        let cells = stat_cells(stats.len(), width);
        for (i, stat) in stats.iter().enumerate() {
            let key = StatKey {
                section,
                block: block_idx,
                slot: slot(i),
            };
            self.counter_sites.push(CounterSite {
                key,
                role,
                format: StatFormat::parse(&stat.value),
                target,
            });
            if let Some(text) = &stat.tooltip {
                // The whole cell (value and caption rows) is the tooltip
                // region, so a click on it never counts as outside
                self.tooltip_sites.push(TooltipSite {
                    key,
                    rows: RowSpan {
                        top: rows.top,
                        height: 2,
                    },
                    cols: cells[i],
                    text: text.clone(),
                });
            }
        }
    }

    /// Page row a nav anchor scrolls to
    pub fn anchor_row(&self, section: usize) -> Option<u16> {
        self.headings.get(section).map(|h| h.top)
    }

    /// Reveal target index for a block or timeline entry
    pub fn target_index(
        &self,
        section: usize,
        block: usize,
        entry: Option<usize>,
    ) -> Option<usize> {
        let wanted = match entry {
            None => TargetRef::Block { section, block },
            Some(entry) => TargetRef::TimelineEntry {
                section,
                block,
                entry,
            },
        };
        self.targets.iter().position(|t| t.target_ref == wanted)
    }

    /// Spans for one observer pass
    pub fn observed_spans(&self) -> Vec<ObservedSpan> {
        self.targets.iter().map(|t| t.span).collect()
    }

    /// Tooltip under a point in page coordinates
    pub fn tooltip_at(&self, row: u16, col: u16) -> Option<TooltipId> {
        self.tooltip_sites.iter().position(|site| {
            row >= site.rows.top
                && row < site.rows.bottom()
                && col >= site.cols.0
                && col < site.cols.1
        })
    }

    /// Nav link under a column in the nav bar row
    pub fn nav_link_at(&self, col: u16) -> Option<usize> {
        self.nav_cols
            .iter()
            .position(|&(start, end)| col >= start && col < end)
    }
}

/// Equal-width cell column ranges for a horizontal stat row
pub fn stat_cells(count: usize, width: u16) -> Vec<(u16, u16)> {
    if count == 0 {
        return Vec::new();
    }
    let count16 = count as u16;
    (0..count16)
        .map(|i| (i * width / count16, (i + 1) * width / count16))
        .collect()
}

/// Column ranges of nav links; must mirror the nav bar widget's spacing
/// (one leading space, the title, then two spaces before every link)
pub fn nav_link_cols(deck: &Deck) -> Vec<(u16, u16)> {
    let mut cols = Vec::with_capacity(deck.nav.len());
    let mut x = 1 + deck.title.width() as u16;
    for link in &deck.nav {
        let start = x + 2;
        let end = start + link.label.width() as u16;
        cols.push((start, end));
        x = end;
    }
    cols
}

/// Rows a block occupies at the given width
pub fn block_height(block: &Block, width: u16) -> u16 {
    match block {
        Block::Stats { .. } => STATS_ROWS,
        Block::Cards { items } => items.iter().map(|c| card_height(c, width)).sum(),
        Block::Timeline { entries } => entries
            .iter()
            .map(|e| timeline_entry_height(e, width))
            .sum(),
        Block::Roi { result, .. } => {
            STATS_ROWS + if result.is_some() { 2 } else { 0 }
        }
        Block::Text { body } => wrap_text(body, width).len() as u16 + 1,
    }
}

/// Title line, wrapped body, blank line
pub fn card_height(card: &promodeck_core::Card, width: u16) -> u16 {
    1 + wrap_text(&card.body, width.saturating_sub(4)).len() as u16 + 1
}

/// Period/title line, indented wrapped body, blank line
pub fn timeline_entry_height(entry: &promodeck_core::TimelineEntry, width: u16) -> u16 {
    1 + wrap_text(&entry.body, width.saturating_sub(4)).len() as u16 + 1
}

/// Greedy word wrap by display width; always yields at least one line
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0usize;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if line_width > 0 && line_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }
        if line_width > 0 {
            line.push(' ');
            line_width += 1;
        }
        line.push_str(word);
        line_width += word_width;
    }
    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use promodeck_core::Deck;

    const WIDTH: u16 = 80;

    #[test]
    fn test_wrap_text_basic() {
        let lines = wrap_text("one two three four five", 10);
        assert!(lines.iter().all(|l| l.width() <= 10));
        assert_eq!(lines.join(" "), "one two three four five");
    }

    #[test]
    fn test_wrap_text_empty() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn test_extents_are_contiguous() {
        let deck = Deck::sample();
        let layout = PageLayout::solve(&deck, WIDTH);

        let mut row = 0u16;
        let mut block_iter = layout.blocks.iter();
        for (si, section) in deck.sections.iter().enumerate() {
            assert_eq!(layout.headings[si].top, row);
            row += HEADING_ROWS;
            for _ in &section.blocks {
                let extent = block_iter.next().unwrap();
                assert_eq!(extent.rows.top, row);
                row += extent.rows.height;
            }
        }
        assert_eq!(layout.total_height, row);
    }

    #[test]
    fn test_anchor_rows_resolve() {
        let deck = Deck::sample();
        let layout = PageLayout::solve(&deck, WIDTH);

        let roi = deck.section_index("#roi").unwrap();
        assert!(layout.anchor_row(roi).is_some());
        assert!(layout.anchor_row(deck.sections.len()).is_none());
    }

    #[test]
    fn test_timeline_entries_are_individual_staggered_targets() {
        let deck = Deck::sample();
        let layout = PageLayout::solve(&deck, WIDTH);

        let staggered: Vec<_> = layout.targets.iter().filter(|t| t.span.staggered).collect();
        assert_eq!(staggered.len(), 4);
        assert!(staggered
            .iter()
            .all(|t| matches!(t.target_ref, TargetRef::TimelineEntry { .. })));

        // Entries tile their block contiguously
        for pair in staggered.windows(2) {
            assert_eq!(pair[1].span.rows.top, pair[0].span.rows.bottom());
        }
    }

    #[test]
    fn test_counter_sites_cover_all_groups() {
        let deck = Deck::sample();
        let layout = PageLayout::solve(&deck, WIDTH);

        let heroes = layout
            .counter_sites
            .iter()
            .filter(|s| s.role == CounterRole::Hero)
            .count();
        let metrics = layout
            .counter_sites
            .iter()
            .filter(|s| s.role == CounterRole::RoiMetric)
            .count();
        let results = layout
            .counter_sites
            .iter()
            .filter(|s| s.role == CounterRole::RoiResult)
            .count();
        assert_eq!((heroes, metrics, results), (3, 4, 1));
    }

    #[test]
    fn test_tooltip_hit_testing() {
        let deck = Deck::sample();
        let layout = PageLayout::solve(&deck, WIDTH);
        assert_eq!(layout.tooltip_sites.len(), 2);

        let site = &layout.tooltip_sites[0];
        assert_eq!(
            layout.tooltip_at(site.rows.top, site.cols.0),
            Some(0)
        );
        // One column left of the region misses
        if site.cols.0 > 0 {
            assert_eq!(layout.tooltip_at(site.rows.top, site.cols.0 - 1), None);
        }
        // Far outside everything
        assert_eq!(layout.tooltip_at(layout.total_height, 0), None);
    }

    #[test]
    fn test_stat_cells_partition_width() {
        let cells = stat_cells(3, 80);
        assert_eq!(cells[0].0, 0);
        assert_eq!(cells[2].1, 80);
        for pair in cells.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
    }

    #[test]
    fn test_nav_links_hit_testing() {
        let deck = Deck::sample();
        let layout = PageLayout::solve(&deck, WIDTH);
        assert_eq!(layout.nav_cols.len(), deck.nav.len());

        let (start, end) = layout.nav_cols[1];
        assert_eq!(layout.nav_link_at(start), Some(1));
        assert_eq!(layout.nav_link_at(end - 1), Some(1));
        assert_eq!(layout.nav_link_at(end), None);
    }

    #[test]
    fn test_target_index_lookup() {
        let deck = Deck::sample();
        let layout = PageLayout::solve(&deck, WIDTH);

        // Hero stats block
        assert!(layout.target_index(0, 0, None).is_some());
        // Timeline entry in the rollout section
        assert!(layout.target_index(3, 0, Some(2)).is_some());
        // The timeline block itself is not a target, only its entries
        assert!(layout.target_index(3, 0, None).is_none());
        assert!(layout.target_index(9, 9, None).is_none());
    }
}
