//! Derived view data for the product table.
//!
//! This module turns controller state into render inputs without mutating
//! anything: the current page's rows, the pagination metadata, and the
//! windowed list of page-number buttons. The UI layer consumes these types
//! and never reaches back into the controller.

use crate::controller::Controller;
use crate::models::Product;

/// Maximum number of page-number buttons shown at once.
pub const MAX_PAGE_BUTTONS: usize = 5;

/// Maximum description length before truncation.
pub const DESCRIPTION_MAX_LEN: usize = 30;

/// Maximum thumbnail URLs carried per row.
pub const MAX_THUMBNAILS: usize = 3;

/// Placeholder shown when a product has no images.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/40";

/// Placeholder shown when a product has no description.
pub const NO_DESCRIPTION: &str = "No description";

// ============================================================================
// RowView
// ============================================================================

/// Alternating visual class for a table row.
///
/// Keyed on the record's absolute index within the filtered set, not its
/// index within the page, so banding is continuous across page boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowBand {
    Even,
    Odd,
}

impl RowBand {
    /// Band for the record at `absolute_index` within the filtered set.
    pub fn for_index(absolute_index: usize) -> Self {
        if absolute_index % 2 == 0 {
            RowBand::Even
        } else {
            RowBand::Odd
        }
    }
}

/// Pre-computed display data for one table row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub id: String,
    pub title: String,
    /// Description truncated for display, with a placeholder when absent
    pub description: String,
    pub price: f64,
    pub category: String,
    /// Up to three image URLs, or the placeholder when the product has none
    pub thumbnails: Vec<String>,
    pub band: RowBand,
}

impl RowView {
    /// Build the display row for `product` at `absolute_index` within the
    /// filtered set.
    pub fn from_product(product: &Product, absolute_index: usize) -> Self {
        let description = truncate_text(
            product.description.as_deref().unwrap_or(NO_DESCRIPTION),
            DESCRIPTION_MAX_LEN,
        );

        let thumbnails = if product.images.is_empty() {
            vec![PLACEHOLDER_IMAGE.to_string()]
        } else {
            product.images.iter().take(MAX_THUMBNAILS).cloned().collect()
        };

        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            description,
            price: product.price,
            category: product.category_name().to_string(),
            thumbnails,
            band: RowBand::for_index(absolute_index),
        }
    }

    /// Price formatted for display.
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }
}

/// Truncate `text` to at most `max_len` characters, appending `...` when
/// anything was cut.
fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_len).collect();
        format!("{}...", head)
    }
}

// ============================================================================
// PageView
// ============================================================================

/// The current page's rows plus all pagination metadata.
///
/// Pure with respect to the controller: deriving a PageView never mutates
/// state, so it can be recomputed freely on every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    /// Rows for the current page, in display order
    pub rows: Vec<RowView>,
    /// Current page, 1-based
    pub page: usize,
    /// Total pages; 0 only when the filtered set is empty
    pub total_pages: usize,
    /// 1-based inclusive display range start; 0 when empty
    pub start_index: usize,
    /// 1-based inclusive display range end; 0 when empty
    pub end_index: usize,
    /// Size of the filtered set
    pub total: usize,
    /// Windowed list of page-number buttons around the current page
    pub page_numbers: Vec<usize>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl PageView {
    /// Derive the current page view from controller state.
    pub fn derive(controller: &Controller) -> Self {
        let filtered = controller.filtered();
        let total = filtered.len();
        let page = controller.page();
        let page_size = controller.page_size();
        let total_pages = controller.total_pages();

        let start = (page - 1) * page_size;
        let end = (start + page_size).min(total);

        let rows = if start < total {
            filtered[start..end]
                .iter()
                .enumerate()
                .map(|(i, product)| RowView::from_product(product, start + i))
                .collect()
        } else {
            Vec::new()
        };

        let (start_index, end_index) = if total == 0 { (0, 0) } else { (start + 1, end) };

        Self {
            rows,
            page,
            total_pages,
            start_index,
            end_index,
            total,
            page_numbers: page_window(page, total_pages),
            prev_enabled: page > 1,
            next_enabled: total_pages > 0 && page < total_pages,
        }
    }

    /// Display string for the pagination info line.
    pub fn range_label(&self) -> String {
        if self.total == 0 {
            "Showing 0 of 0 products".to_string()
        } else {
            format!(
                "Showing {}-{} of {} products",
                self.start_index, self.end_index, self.total
            )
        }
    }
}

/// Compute the window of up to [`MAX_PAGE_BUTTONS`] page numbers centered on
/// `page`, clamped to `[1, total_pages]`.
///
/// The window slides at either boundary so exactly
/// `min(MAX_PAGE_BUTTONS, total_pages)` numbers are shown whenever possible.
pub fn page_window(page: usize, total_pages: usize) -> Vec<usize> {
    if total_pages == 0 {
        return Vec::new();
    }

    let mut start = page.saturating_sub(MAX_PAGE_BUTTONS / 2).max(1);
    let end = (start + MAX_PAGE_BUTTONS - 1).min(total_pages);
    if end - start + 1 < MAX_PAGE_BUTTONS {
        start = (end + 1).saturating_sub(MAX_PAGE_BUTTONS).max(1);
    }

    (start..=end).collect()
}
