//! Product table rendering.
//!
//! Consumes the derived `PageView` rows; no controller access happens here.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::app::App;
use crate::controller::{SortField, SortOrder};
use crate::view_state::{PageView, RowBand, RowView, PLACEHOLDER_IMAGE};

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_ROW_EVEN};

/// Render the product table, or the loading/error/empty placeholder.
pub fn render_table(frame: &mut Frame, area: Rect, app: &App, view: &PageView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" products ");

    if app.loading {
        render_notice(frame, area, block, "Loading products...", COLOR_DIM);
        return;
    }

    if let Some(ref message) = app.error {
        render_notice(frame, area, block, message, COLOR_ERROR);
        return;
    }

    if view.rows.is_empty() {
        render_notice(frame, area, block, "No products found", COLOR_DIM);
        return;
    }

    let header = Row::new(vec![
        Cell::from("id"),
        Cell::from("images"),
        Cell::from(column_title("title", SortField::Title, app)),
        Cell::from("description"),
        Cell::from(column_title("price", SortField::Price, app)),
        Cell::from("category"),
    ])
    .style(
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = view
        .rows
        .iter()
        .map(|row| {
            let style = match row.band {
                RowBand::Even => Style::default().bg(COLOR_ROW_EVEN),
                RowBand::Odd => Style::default(),
            };
            Row::new(vec![
                Cell::from(row.id.clone()),
                Cell::from(thumbnails_label(row)),
                Cell::from(row.title.clone()),
                Cell::from(row.description.clone()),
                Cell::from(row.display_price()),
                Cell::from(row.category.clone()),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Length(8),
        Constraint::Percentage(28),
        Constraint::Percentage(36),
        Constraint::Length(10),
        Constraint::Percentage(16),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1);

    frame.render_widget(table, area);
}

/// Column header text with the sort direction marker when active.
fn column_title(label: &str, field: SortField, app: &App) -> String {
    let sort = app.controller.sort();
    if sort.field == field {
        let marker = match sort.order {
            SortOrder::Asc => "▲",
            SortOrder::Desc => "▼",
        };
        format!("{} {}", label, marker)
    } else {
        label.to_string()
    }
}

/// Compact marker for the thumbnails column.
///
/// One filled square per image URL, a hollow square for the placeholder.
fn thumbnails_label(row: &RowView) -> String {
    if row.thumbnails.len() == 1 && row.thumbnails[0] == PLACEHOLDER_IMAGE {
        "□".to_string()
    } else {
        vec!["▣"; row.thumbnails.len()].join(" ")
    }
}

/// Render a single centered notice line inside the table block.
fn render_notice(
    frame: &mut Frame,
    area: Rect,
    block: Block,
    message: &str,
    color: ratatui::style::Color,
) {
    use ratatui::layout::Alignment;
    use ratatui::widgets::Paragraph;

    let paragraph = Paragraph::new(message.to_string())
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
