//! Pagination bar rendering.
//!
//! Shows the record range, prev/next indicators, and the windowed
//! page-number buttons from the derived `PageView`.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::view_state::PageView;

use super::theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_DIM};

/// Render the pagination bar: range label, nav arrows, page numbers.
pub fn render_pagination(frame: &mut Frame, area: Rect, view: &PageView, page_size: usize) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(
        view.range_label(),
        Style::default().fg(COLOR_DIM),
    ));
    spans.push(Span::raw("   "));

    let prev_style = if view.prev_enabled {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    spans.push(Span::styled("‹ prev", prev_style));
    spans.push(Span::raw("  "));

    for number in &view.page_numbers {
        if *number == view.page {
            spans.push(Span::styled(
                format!("[{}]", number),
                Style::default()
                    .fg(COLOR_ACTIVE)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                format!(" {} ", number),
                Style::default().fg(COLOR_ACCENT),
            ));
        }
        spans.push(Span::raw(" "));
    }

    let next_style = if view.next_enabled {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    spans.push(Span::styled("next ›", next_style));

    spans.push(Span::raw("   "));
    spans.push(Span::styled(
        format!("{} / page", page_size),
        Style::default().fg(COLOR_DIM),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
