use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use promodeck_core::{RevealState, TimelineEntry};

use crate::app::App;
use crate::layout::wrap_text;

/// Render timeline entries. Each entry has its own reveal state so the
/// staggered batch delay shows as a sequential sweep down the list.
pub(crate) fn push_entries(
    lines: &mut Vec<Line<'static>>,
    app: &App,
    section: usize,
    block: usize,
    entries: &[TimelineEntry],
    width: u16,
) {
    for (ei, entry) in entries.iter().enumerate() {
        let revealed =
            app.reveal_state(section, block, Some(ei)) == RevealState::Revealed;

        let (marker, marker_style) = if revealed {
            (
                "● ",
                Style::default().fg(app.theme.accent),
            )
        } else {
            ("○ ", Style::default().fg(app.theme.concealed))
        };
        let (period_style, title_style, body_style) = if revealed {
            (
                Style::default()
                    .fg(app.theme.yellow)
                    .add_modifier(Modifier::BOLD),
                Style::default()
                    .fg(app.theme.fg0)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(app.theme.fg1),
            )
        } else {
            let concealed = Style::default().fg(app.theme.concealed);
            (concealed, concealed, concealed)
        };

        lines.push(Line::from(vec![
            Span::styled(marker.to_string(), marker_style),
            Span::styled(entry.period.clone(), period_style),
            Span::raw(" · "),
            Span::styled(entry.title.clone(), title_style),
        ]));
        for body_line in wrap_text(&entry.body, width.saturating_sub(4)) {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(body_line, body_style),
            ]));
        }
        lines.push(Line::from(""));
    }
}
