use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use promodeck_core::{Card, RevealState};

use crate::app::App;
use crate::layout::wrap_text;

/// Render a card stack: title line, indented body, blank separator.
/// The whole block fades in together when it scrolls into view.
pub(crate) fn push_cards(
    lines: &mut Vec<Line<'static>>,
    app: &App,
    section: usize,
    block: usize,
    cards: &[Card],
    width: u16,
) {
    let revealed = app.reveal_state(section, block, None) == RevealState::Revealed;

    let (title_style, body_style) = if revealed {
        (
            Style::default()
                .fg(app.theme.fg0)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(app.theme.fg1),
        )
    } else {
        (
            Style::default().fg(app.theme.concealed),
            Style::default().fg(app.theme.concealed),
        )
    };
    let marker_style = if revealed {
        Style::default().fg(app.theme.orange)
    } else {
        Style::default().fg(app.theme.concealed)
    };

    for card in cards {
        lines.push(Line::from(vec![
            Span::styled("▪ ".to_string(), marker_style),
            Span::styled(card.title.clone(), title_style),
        ]));
        for body_line in wrap_text(&card.body, width.saturating_sub(4)) {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(body_line, body_style),
            ]));
        }
        lines.push(Line::from(""));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::card_height;
    use crate::theme::Theme;
    use promodeck_core::{AppConfig, Deck};
    use std::sync::Arc;

    #[test]
    fn test_card_lines_match_layout_height() {
        let app = App::new(
            Deck::sample(),
            Arc::new(AppConfig::default()),
            Theme::default(),
            60,
        );
        let card = Card {
            title: "Title".to_string(),
            body: "A body long enough to wrap over more than one line at \
                   sixty columns of width."
                .to_string(),
        };

        let mut lines = Vec::new();
        push_cards(&mut lines, &app, 1, 0, std::slice::from_ref(&card), 60);
        assert_eq!(lines.len() as u16, card_height(&card, 60));
    }
}
