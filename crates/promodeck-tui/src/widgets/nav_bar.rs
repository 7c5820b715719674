use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Top chrome: deck title and the anchor link row. The spacing here must
/// mirror `layout::nav_link_cols` so mouse clicks land on the right link.
pub struct NavBarWidget;

impl NavBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        app.nav_area = area;

        let mut spans = vec![
            Span::raw(" "),
            Span::styled(
                app.deck.title.clone(),
                Style::default()
                    .fg(app.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ];

        for (i, link) in app.deck.nav.iter().enumerate() {
            spans.push(Span::raw("  "));
            let style = if i == app.selected_link {
                Style::default()
                    .fg(app.theme.accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(app.theme.fg1)
            };
            spans.push(Span::styled(link.label.clone(), style));
        }

        let paragraph =
            Paragraph::new(Line::from(spans)).style(Style::default().bg(app.theme.bg1));
        frame.render_widget(paragraph, area);
    }
}
