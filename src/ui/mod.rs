//! UI rendering for the shopdeck product table
//!
//! Implements the minimal dark terminal interface:
//! - Header with title and record count
//! - Search input line
//! - Product table with alternating row bands
//! - Pagination bar and keybind hints
//!
//! All render functions consume derived view data (`PageView`, `RowView`);
//! the interface boundary is the data, not the widgets.

mod pagination;
mod table;
mod theme;

pub use theme::{
    COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER,
    COLOR_ROW_EVEN, COLOR_ROW_ODD,
};

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Focus};
use pagination::render_pagination;
use table::render_table;

/// Render the whole UI from current application state.
pub fn render(frame: &mut Frame, app: &App) {
    let view = app.page_view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header (title + count)
            Constraint::Length(1), // Search input
            Constraint::Length(1), // Spacing
            Constraint::Min(5),    // Product table
            Constraint::Length(1), // Pagination bar
            Constraint::Length(1), // Keybind hints
        ])
        .split(frame.area());

    // Header: title on the left, filtered/total count on the right
    let count_text = format!("{} / {}", view.total, app.controller.total_products());
    let header = Line::from(vec![
        Span::styled(
            "SHOPDECK",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(count_text, Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(header), chunks[0]);

    // Search line; cursor block shown while the search box has focus
    let mut search_spans = vec![Span::styled("search: ", Style::default().fg(COLOR_DIM))];
    if app.search_input.is_empty() && app.focus != Focus::Search {
        search_spans.push(Span::styled("/ to filter", Style::default().fg(COLOR_DIM)));
    } else {
        search_spans.push(Span::styled(
            app.search_input.clone(),
            Style::default().fg(COLOR_ACCENT),
        ));
    }
    if app.focus == Focus::Search {
        search_spans.push(Span::styled(
            "█",
            Style::default().fg(COLOR_ACCENT),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(search_spans)), chunks[1]);

    render_table(frame, chunks[3], app, &view);
    render_pagination(frame, chunks[4], &view, app.controller.page_size());

    let hints = match app.focus {
        Focus::Search => "type to filter · enter/esc done · ctrl-u clear",
        Focus::Table => {
            "/ search · t/T title · p/P price · ←/→ page · +/- size · r reload · q quit"
        }
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(COLOR_DIM))),
        chunks[5],
    );
}
