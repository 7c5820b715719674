use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use promodeck_core::{RevealState, Stat};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::layout::{stat_cells, StatKey, StatSlot};

/// Render a horizontal stat row as two lines: counter values with their
/// info icons, then captions. Each stat is centered in an equal-width cell
/// matching the layout's tooltip hit regions.
pub(crate) fn push_stat_row(
    lines: &mut Vec<Line<'static>>,
    app: &App,
    section: usize,
    block: usize,
    stats: &[Stat],
    slot: fn(usize) -> StatSlot,
) {
    let revealed = app.reveal_state(section, block, None) == RevealState::Revealed;
    let cells = stat_cells(stats.len(), app.layout.width);

    let mut value_spans = Vec::new();
    let mut caption_spans = Vec::new();

    for (i, stat) in stats.iter().enumerate() {
        let key = StatKey {
            section,
            block,
            slot: slot(i),
        };
        let cell_w = (cells[i].1 - cells[i].0) as usize;

        // Counter text once the animation has started, the static label
        // before that (and forever, for labels that never animate)
        let value = app.stat_text(key).unwrap_or(&stat.value).to_string();

        let value_style = if revealed {
            Style::default()
                .fg(app.theme.value)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.concealed)
        };
        let caption_style = if revealed {
            Style::default().fg(app.theme.grey)
        } else {
            Style::default().fg(app.theme.concealed)
        };

        let icon = stat.tooltip.is_some().then(|| icon_style(app, key));
        value_spans.extend(centered_cell(cell_w, value, value_style, icon));
        caption_spans.extend(centered_cell(
            cell_w,
            truncate(&stat.caption, cell_w),
            caption_style,
            None,
        ));
    }

    lines.push(Line::from(value_spans));
    lines.push(Line::from(caption_spans));
}

/// The ROI result: one centered line combining the counter value and its
/// caption, animated over the longer result duration
pub(crate) fn push_result_line(
    lines: &mut Vec<Line<'static>>,
    app: &App,
    section: usize,
    block: usize,
    result: &Stat,
) {
    let revealed = app.reveal_state(section, block, None) == RevealState::Revealed;
    let key = StatKey {
        section,
        block,
        slot: StatSlot::Result,
    };
    let value = app.stat_text(key).unwrap_or(&result.value).to_string();
    let text = format!("{} {}", value, result.caption);

    let style = if revealed {
        Style::default()
            .fg(app.theme.green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.concealed)
    };

    let width = app.layout.width as usize;
    let pad = width.saturating_sub(text.width()) / 2;
    lines.push(Line::from(vec![
        Span::raw(" ".repeat(pad)),
        Span::styled(text, style),
    ]));
}

fn icon_style(app: &App, key: StatKey) -> Style {
    let id = app
        .layout
        .tooltip_sites
        .iter()
        .position(|site| site.key == key);

    match id {
        Some(id) if app.tooltips.is_open(id) => Style::default()
            .fg(app.theme.accent)
            .add_modifier(Modifier::BOLD),
        Some(id) if app.tooltips.is_hovered(id) => Style::default()
            .fg(app.theme.hover)
            .add_modifier(Modifier::BOLD),
        _ => Style::default().fg(app.theme.blue),
    }
}

/// Value plus optional trailing icon, centered within a cell of exactly
/// `cell_w` columns. The icon is emitted as its own span on every frame,
/// so it survives every counter tick.
fn centered_cell(
    cell_w: usize,
    text: String,
    style: Style,
    icon: Option<Style>,
) -> Vec<Span<'static>> {
    const ICON: &str = " (i)";
    let icon_w = if icon.is_some() { ICON.width() } else { 0 };
    let content_w = text.width() + icon_w;
    let lead = cell_w.saturating_sub(content_w) / 2;
    let trail = cell_w.saturating_sub(content_w + lead);

    let mut spans = vec![Span::raw(" ".repeat(lead)), Span::styled(text, style)];
    if let Some(icon_style) = icon {
        spans.push(Span::styled(ICON.to_string(), icon_style));
    }
    spans.push(Span::raw(" ".repeat(trail)));
    spans
}

fn truncate(s: &str, max_w: usize) -> String {
    if s.width() <= max_w {
        return s.to_string();
    }
    let mut out = String::new();
    let mut w = 0;
    for c in s.chars() {
        let cw = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if w + cw > max_w.saturating_sub(1) {
            break;
        }
        out.push(c);
        w += cw;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span_text(spans: &[Span<'_>]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_centered_cell_width_exact() {
        let spans = centered_cell(20, "55%".to_string(), Style::default(), None);
        assert_eq!(span_text(&spans).width(), 20);

        let with_icon = centered_cell(20, "55%".to_string(), Style::default(), Some(Style::default()));
        assert_eq!(span_text(&with_icon).width(), 20);
        assert!(span_text(&with_icon).contains("(i)"));
    }

    #[test]
    fn test_icon_is_its_own_span() {
        let spans = centered_cell(20, "55%".to_string(), Style::default(), Some(Style::default()));
        assert!(spans.iter().any(|s| s.content == " (i)"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        let out = truncate("a rather long caption", 10);
        assert!(out.width() <= 10);
        assert!(out.ends_with('…'));
    }
}
