use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use promodeck_core::Block;

use crate::app::App;
use crate::layout::{wrap_text, StatSlot};
use crate::widgets::{cards, stats, timeline};

/// The scrollable page body: every section flattened into styled lines and
/// shifted by the animated scroll offset. Line counts must match the
/// heights computed by the layout solver.
pub struct PageWidget;

impl PageWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        // Remembered for mouse hit testing
        app.content_area = area;

        let paragraph = Paragraph::new(Self::lines(app))
            .style(Style::default().bg(app.theme.bg0))
            .scroll((app.scroll.current_scroll(), 0));
        frame.render_widget(paragraph, area);
    }

    pub fn lines(app: &App) -> Vec<Line<'static>> {
        let width = app.layout.width;
        let mut lines = Vec::with_capacity(app.layout.total_height as usize);

        for (si, section) in app.deck.sections.iter().enumerate() {
            lines.push(Line::from(Span::styled(
                section.title.clone(),
                Style::default()
                    .fg(app.theme.value)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));

            for (bi, block) in section.blocks.iter().enumerate() {
                match block {
                    Block::Stats { items } => {
                        stats::push_stat_row(&mut lines, app, si, bi, items, StatSlot::Item);
                        lines.push(Line::from(""));
                    }
                    Block::Cards { items } => {
                        cards::push_cards(&mut lines, app, si, bi, items, width);
                    }
                    Block::Timeline { entries } => {
                        timeline::push_entries(&mut lines, app, si, bi, entries, width);
                    }
                    Block::Roi { metrics, result } => {
                        stats::push_stat_row(&mut lines, app, si, bi, metrics, StatSlot::Metric);
                        lines.push(Line::from(""));
                        if let Some(result) = result {
                            stats::push_result_line(&mut lines, app, si, bi, result);
                            lines.push(Line::from(""));
                        }
                    }
                    Block::Text { body } => {
                        let revealed = app
                            .reveal_state(si, bi, None)
                            == promodeck_core::RevealState::Revealed;
                        let style = if revealed {
                            Style::default().fg(app.theme.fg1)
                        } else {
                            Style::default().fg(app.theme.concealed)
                        };
                        for text_line in wrap_text(body, width) {
                            lines.push(Line::from(Span::styled(text_line, style)));
                        }
                        lines.push(Line::from(""));
                    }
                }
            }
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use promodeck_core::{AppConfig, Deck};
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    fn test_app(width: u16) -> App {
        let mut app = App::new(
            Deck::sample(),
            Arc::new(AppConfig::default()),
            Theme::default(),
            width,
        );
        app.content_area = Rect::new(0, 1, width, 22);
        app
    }

    #[test]
    fn test_line_count_matches_layout_height() {
        for width in [40u16, 80, 120] {
            let app = test_app(width);
            let lines = PageWidget::lines(&app);
            assert_eq!(
                lines.len() as u16,
                app.layout.total_height,
                "width {width}"
            );
        }
    }

    #[test]
    fn test_tooltip_icon_present_every_frame() {
        let mut app = test_app(80);
        let now = Instant::now();

        let row = app.layout.tooltip_sites[0].rows.top as usize;
        let has_icon = |app: &App| {
            PageWidget::lines(app)[row]
                .spans
                .iter()
                .any(|s| s.content.contains("(i)"))
        };

        // Before the counter starts, mid-animation, and after the final tick
        assert!(has_icon(&app));
        app.on_tick(now);
        assert!(has_icon(&app));
        app.on_tick(now + Duration::from_millis(1000));
        assert!(has_icon(&app));
        app.on_tick(now + Duration::from_secs(5));
        assert!(has_icon(&app));
    }

    #[test]
    fn test_counter_text_rendered_in_stat_row() {
        let mut app = test_app(80);
        let now = Instant::now();
        app.on_tick(now);
        app.on_tick(now + Duration::from_secs(5));

        let row = app.layout.blocks[0].rows.top as usize;
        let rendered: String = PageWidget::lines(&app)[row]
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(rendered.contains("55%"));
        assert!(rendered.contains("4x"));
        assert!(rendered.contains("24/7"));
    }
}
