use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::layout::wrap_text;

const MAX_POPOVER_WIDTH: u16 = 44;

/// Popover body of the currently open tooltip, drawn over the page near
/// its stat cell. Rendered last so it sits above everything else.
pub struct TooltipWidget;

impl TooltipWidget {
    pub fn render(frame: &mut Frame, app: &App) {
        let Some(id) = app.tooltips.open() else {
            return;
        };
        let Some(site) = app.layout.tooltip_sites.get(id) else {
            return;
        };

        let frame_area = frame.area();
        let width = MAX_POPOVER_WIDTH
            .min(frame_area.width.saturating_sub(4))
            .max(12);
        let text_lines = wrap_text(&site.text, width.saturating_sub(2));
        let height = text_lines.len() as u16 + 2;

        let Some(area) = Self::popover_area(app, site, width, height, frame_area) else {
            // Anchor scrolled out of view; keep the tooltip open but hidden
            return;
        };

        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.accent))
            .style(Style::default().bg(app.theme.bg2));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines: Vec<Line> = text_lines
            .into_iter()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(app.theme.fg0))))
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
    }

    /// Place the popover just below the stat cell, horizontally centered
    /// on it and clamped to the frame; flip above when it would run off
    /// the bottom
    fn popover_area(
        app: &App,
        site: &crate::layout::TooltipSite,
        width: u16,
        height: u16,
        frame_area: Rect,
    ) -> Option<Rect> {
        let scroll = app.scroll.current_scroll();
        let anchor_bottom = site.rows.bottom();
        if anchor_bottom < scroll {
            return None;
        }
        let rel = anchor_bottom - scroll;
        if rel >= app.content_area.height {
            return None;
        }

        let mut y = app.content_area.y + rel;
        if y + height > frame_area.height {
            let above = (app.content_area.y + rel)
                .saturating_sub(site.rows.height)
                .saturating_sub(height);
            y = above;
        }

        let cell_center = app.content_area.x + (site.cols.0 + site.cols.1) / 2;
        let x = cell_center
            .saturating_sub(width / 2)
            .min(frame_area.width.saturating_sub(width));

        Some(Rect::new(
            x,
            y,
            width,
            height.min(frame_area.height.saturating_sub(y)),
        ))
    }
}
