use std::sync::Arc;

use super::aggregate::ProductRow;
use super::categories::ALL;
use crate::shared::pagination::{page_window, total_pages};

pub const DEFAULT_PAGE_SIZE: usize = 24;

/// Catalog grid state: full row set, active filter and current page.
///
/// The filtered set is kept as indexes into `rows`, so it is always a subset.
/// Rows are shared with whoever loaded them; building a state never copies them.
/// `page` is 1-based and stays within `1..=total_pages()` (or `1` when empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogState {
    rows: Arc<Vec<ProductRow>>,
    filtered: Vec<usize>,
    filter: String,
    page: usize,
    page_size: usize,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new(Vec::new(), DEFAULT_PAGE_SIZE)
    }
}

impl CatalogState {
    pub fn new(rows: impl Into<Arc<Vec<ProductRow>>>, page_size: usize) -> Self {
        let rows: Arc<Vec<ProductRow>> = rows.into();
        let filtered = (0..rows.len()).collect();
        Self {
            rows,
            filtered,
            filter: ALL.to_string(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn rows(&self) -> &[ProductRow] {
        &self.rows
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn filtered_rows(&self) -> impl Iterator<Item = &ProductRow> {
        self.filtered.iter().map(move |&i| &self.rows[i])
    }

    /// Selects rows tagged `category` (every row for `all`) and returns to page 1.
    pub fn set_filter(&mut self, category: &str) {
        let category = category.trim().to_lowercase();
        self.filtered = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| category == ALL || row.has_category(&category))
            .map(|(i, _)| i)
            .collect();
        self.filter = category;
        self.page = 1;
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered.len(), self.page_size)
    }

    /// Moves to `page`, clamped to the valid range.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages().max(1));
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page + 1);
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Pagination controls are hidden when everything fits on one page.
    pub fn controls_visible(&self) -> bool {
        self.total_pages() > 1
    }

    pub fn page_items(&self) -> Vec<&ProductRow> {
        self.filtered[page_window(self.filtered.len(), self.page, self.page_size)]
            .iter()
            .map(|&i| &self.rows[i])
            .collect()
    }

    /// Looks a row up by SKU across the whole catalog, ignoring the filter.
    pub fn find_by_sku(&self, sku: &str) -> Option<&ProductRow> {
        find_by_sku(&self.rows, sku)
    }
}

/// First row whose SKU equals the trimmed identifier.
pub fn find_by_sku<'a>(rows: &'a [ProductRow], sku: &str) -> Option<&'a ProductRow> {
    rows.iter().find(|row| row.matches_sku(sku))
}
