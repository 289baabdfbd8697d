//! View-state controller for the product table.
//!
//! Owns the full record set, the active search term, the sort key/direction,
//! and the pagination cursor, and keeps the derived filtered set consistent
//! with them. Every operation here is a total, synchronous function over the
//! controller's own state: invalid inputs (out-of-range page, zero page size,
//! sorting an empty set) are defined as no-ops, never errors.
//!
//! Two invariants hold after every operation:
//! - `filtered` contains exactly the records of `all_products` whose title
//!   contains the active search term case-insensitively (empty term matches
//!   all), possibly reordered by the active sort.
//! - `page` lies in `[1, max(1, total_pages)]`.

use crate::models::Product;
use std::cmp::Ordering;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

// ============================================================================
// Sort
// ============================================================================

/// Column a sort can be keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    /// No sort active; records keep their fetch order
    #[default]
    None,
    /// Case-insensitive title comparison
    Title,
    /// Numeric price comparison
    Price,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Active sort key and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sort {
    pub field: SortField,
    pub order: SortOrder,
}

impl Sort {
    /// Whether a sort is currently active.
    pub fn is_active(&self) -> bool {
        self.field != SortField::None
    }

    /// Compare two products under this sort.
    ///
    /// `SortField::None` compares everything equal, which leaves a stable
    /// sort untouched. `Desc` reverses the ascending ordering; reversing the
    /// comparison result (rather than swapping operands) preserves stability
    /// for equal keys.
    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        let ascending = match self.field {
            SortField::None => Ordering::Equal,
            SortField::Title => a
                .title
                .to_lowercase()
                .cmp(&b.title.to_lowercase()),
            SortField::Price => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
        };
        match self.order {
            SortOrder::Asc => ascending,
            SortOrder::Desc => ascending.reverse(),
        }
    }
}

// ============================================================================
// Controller
// ============================================================================

/// State container for the product table view.
///
/// Constructed empty, populated wholesale by each fetch, and mutated in
/// place by user intents. All fields that feed a derivation (filter, sort,
/// pagination) are updated together before any view is produced.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    /// Full record set from the last successful fetch
    all_products: Vec<Product>,
    /// Records matching the active search term, in display order
    filtered: Vec<Product>,
    /// Active search term (empty matches all)
    search_term: String,
    /// Current page, 1-based; 1 when the filtered set is empty
    page: usize,
    /// Rows per page, always > 0
    page_size: usize,
    /// Active sort key and direction
    sort: Sort,
}

impl Controller {
    /// Create an empty controller with the default page size.
    pub fn new() -> Self {
        Self {
            all_products: Vec::new(),
            filtered: Vec::new(),
            search_term: String::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort: Sort::default(),
        }
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Replace the full record set from a completed fetch.
    ///
    /// The stored search term and sort survive the replacement and are
    /// re-applied to the new records, so a term typed before the first load
    /// completes takes effect here. The page resets to 1.
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.all_products = products;
        self.page = 1;
        self.refilter();
    }

    /// Set the active search term and recompute the filtered set.
    ///
    /// Filters first, then re-applies the active sort over the filtered
    /// subset (sort is idempotent over it). The page resets to 1.
    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
        self.page = 1;
        self.refilter();
    }

    /// Set the sort key and direction and reorder the filtered set.
    ///
    /// No-op when no records have been loaded. The page resets to 1.
    pub fn sort_by(&mut self, field: SortField, order: SortOrder) {
        if self.all_products.is_empty() {
            return;
        }
        self.sort = Sort { field, order };
        self.page = 1;
        self.apply_sort();
    }

    /// Navigate to page `p` (1-based).
    ///
    /// No-op when `p` is outside `[1, total_pages]`, including always when
    /// the filtered set is empty.
    pub fn go_to_page(&mut self, p: usize) {
        if p >= 1 && p <= self.total_pages() {
            self.page = p;
        }
    }

    /// Set the number of rows per page and reset to page 1.
    ///
    /// No-op when `n` is 0.
    pub fn set_page_size(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        self.page_size = n;
        self.page = 1;
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Records matching the active search term, in display order.
    pub fn filtered(&self) -> &[Product] {
        &self.filtered
    }

    /// The active search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Current page, 1-based.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Active sort.
    pub fn sort(&self) -> Sort {
        self.sort
    }

    /// Total pages over the filtered set; 0 only when it is empty.
    pub fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(self.page_size)
    }

    /// Total number of records from the last fetch.
    pub fn total_products(&self) -> usize {
        self.all_products.len()
    }

    /// Whether no records have been loaded yet.
    pub fn is_unloaded(&self) -> bool {
        self.all_products.is_empty()
    }

    // ========================================================================
    // Private Helpers
    // ========================================================================

    /// Recompute `filtered` from `all_products` and the active term, then
    /// re-apply the active sort. Filter-then-sort order is fixed.
    fn refilter(&mut self) {
        if self.search_term.is_empty() {
            self.filtered = self.all_products.clone();
        } else {
            let needle = self.search_term.to_lowercase();
            self.filtered = self
                .all_products
                .iter()
                .filter(|p| p.title.to_lowercase().contains(&needle))
                .cloned()
                .collect();
        }
        if self.sort.is_active() {
            self.apply_sort();
        }
    }

    /// Reorder `filtered` under the active sort. Stable for equal keys.
    fn apply_sort(&mut self) {
        let sort = self.sort;
        self.filtered.sort_by(|a, b| sort.compare(a, b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;

    fn make_product(id: &str, title: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            price,
            category: None,
            images: Vec::new(),
        }
    }

    fn loaded_controller(count: usize) -> Controller {
        let mut controller = Controller::new();
        let products = (0..count)
            .map(|i| make_product(&i.to_string(), &format!("Product {:02}", i), i as f64))
            .collect();
        controller.set_products(products);
        controller
    }

    // -------------------- Search --------------------

    #[test]
    fn test_empty_term_matches_all() {
        let mut controller = loaded_controller(7);
        controller.set_search_term("");
        assert_eq!(controller.filtered().len(), 7);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let mut controller = Controller::new();
        controller.set_products(vec![
            make_product("1", "Blue Shirt", 10.0),
            make_product("2", "Red SHIRT", 12.0),
            make_product("3", "Mug", 5.0),
        ]);
        controller.set_search_term("shirt");
        assert_eq!(controller.filtered().len(), 2);
        for p in controller.filtered() {
            assert!(p.title.to_lowercase().contains("shirt"));
        }
    }

    #[test]
    fn test_search_never_grows_filtered_set() {
        let mut controller = loaded_controller(25);
        controller.set_search_term("1");
        assert!(controller.filtered().len() <= 25);
    }

    #[test]
    fn test_search_resets_page() {
        let mut controller = loaded_controller(25);
        controller.go_to_page(3);
        assert_eq!(controller.page(), 3);
        controller.set_search_term("Product");
        assert_eq!(controller.page(), 1);
    }

    #[test]
    fn test_search_reapplies_active_sort() {
        let mut controller = Controller::new();
        controller.set_products(vec![
            make_product("1", "b shirt", 10.0),
            make_product("2", "a shirt", 5.0),
            make_product("3", "c mug", 20.0),
        ]);
        controller.sort_by(SortField::Price, SortOrder::Desc);
        controller.set_search_term("shirt");

        let prices: Vec<f64> = controller.filtered().iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![10.0, 5.0]);
    }

    #[test]
    fn test_search_term_survives_set_products() {
        let mut controller = Controller::new();
        controller.set_search_term("mug");
        controller.set_products(vec![
            make_product("1", "Shirt", 10.0),
            make_product("2", "Coffee Mug", 5.0),
        ]);
        assert_eq!(controller.filtered().len(), 1);
        assert_eq!(controller.filtered()[0].title, "Coffee Mug");
    }

    // -------------------- Sort --------------------

    #[test]
    fn test_sort_by_price_desc() {
        let mut controller = Controller::new();
        controller.set_products(vec![
            make_product("1", "a", 10.0),
            make_product("2", "b", 5.0),
            make_product("3", "c", 20.0),
        ]);
        controller.sort_by(SortField::Price, SortOrder::Desc);
        let prices: Vec<f64> = controller.filtered().iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![20.0, 10.0, 5.0]);
    }

    #[test]
    fn test_sort_by_title_is_case_insensitive() {
        let mut controller = Controller::new();
        controller.set_products(vec![
            make_product("1", "banana", 1.0),
            make_product("2", "Apple", 1.0),
            make_product("3", "cherry", 1.0),
        ]);
        controller.sort_by(SortField::Title, SortOrder::Asc);
        let titles: Vec<&str> = controller.filtered().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut controller = loaded_controller(9);
        controller.sort_by(SortField::Title, SortOrder::Desc);
        let once: Vec<String> = controller.filtered().iter().map(|p| p.id.clone()).collect();
        controller.sort_by(SortField::Title, SortOrder::Desc);
        let twice: Vec<String> = controller.filtered().iter().map(|p| p.id.clone()).collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut controller = Controller::new();
        controller.set_products(vec![
            make_product("first", "same", 3.0),
            make_product("second", "same", 3.0),
            make_product("third", "same", 3.0),
        ]);
        controller.sort_by(SortField::Price, SortOrder::Asc);
        let ids: Vec<&str> = controller.filtered().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);

        controller.sort_by(SortField::Price, SortOrder::Desc);
        let ids: Vec<&str> = controller.filtered().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_sort_none_field_keeps_order() {
        let mut controller = Controller::new();
        controller.set_products(vec![
            make_product("z", "zebra", 9.0),
            make_product("a", "ant", 1.0),
        ]);
        controller.sort_by(SortField::None, SortOrder::Asc);
        let ids: Vec<&str> = controller.filtered().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a"]);
    }

    #[test]
    fn test_sort_on_empty_set_is_noop() {
        let mut controller = Controller::new();
        controller.sort_by(SortField::Price, SortOrder::Desc);
        assert!(!controller.sort().is_active());
        assert_eq!(controller.page(), 1);
    }

    #[test]
    fn test_sort_resets_page() {
        let mut controller = loaded_controller(25);
        controller.go_to_page(2);
        controller.sort_by(SortField::Title, SortOrder::Asc);
        assert_eq!(controller.page(), 1);
    }

    // -------------------- Pagination --------------------

    #[test]
    fn test_total_pages() {
        let controller = loaded_controller(25);
        assert_eq!(controller.total_pages(), 3);

        let controller = loaded_controller(30);
        assert_eq!(controller.total_pages(), 3);

        let controller = Controller::new();
        assert_eq!(controller.total_pages(), 0);
    }

    #[test]
    fn test_go_to_page_bounds() {
        let mut controller = loaded_controller(25);
        controller.go_to_page(0);
        assert_eq!(controller.page(), 1);
        controller.go_to_page(4);
        assert_eq!(controller.page(), 1);
        controller.go_to_page(3);
        assert_eq!(controller.page(), 3);
    }

    #[test]
    fn test_go_to_page_noop_when_empty() {
        let mut controller = Controller::new();
        controller.go_to_page(1);
        assert_eq!(controller.page(), 1);
        assert_eq!(controller.total_pages(), 0);
    }

    #[test]
    fn test_set_page_size_resets_page() {
        let mut controller = loaded_controller(25);
        controller.go_to_page(3);
        controller.set_page_size(5);
        assert_eq!(controller.page_size(), 5);
        assert_eq!(controller.page(), 1);
        assert_eq!(controller.total_pages(), 5);
    }

    #[test]
    fn test_set_page_size_zero_is_noop() {
        let mut controller = loaded_controller(25);
        controller.set_page_size(0);
        assert_eq!(controller.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(controller.page(), 1);
    }

    // -------------------- Invariants --------------------

    #[test]
    fn test_page_stays_in_range_after_every_operation() {
        let mut controller = loaded_controller(25);
        controller.go_to_page(3);
        // Shrinks the filtered set below page 3
        controller.set_search_term("Product 0");
        assert!(controller.page() >= 1);
        assert!(controller.page() <= controller.total_pages().max(1));

        controller.set_search_term("");
        controller.go_to_page(3);
        controller.set_products(vec![make_product("1", "only", 1.0)]);
        assert_eq!(controller.page(), 1);
    }
}
