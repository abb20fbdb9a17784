//! DTOs shaped for the listing screens.

use serde::Serialize;

use crate::pagination::{ItemsPerPage, page_links};
use crate::search::Extractor;
use crate::view_state::ViewStateController;

/// View parameters requested for a listing screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingQuery {
    /// Optional search string entered by the user.
    pub search: Option<String>,
    /// Page number requested by the user interface.
    pub page: Option<usize>,
    /// Page size chosen in the items-per-page control.
    pub items_per_page: Option<ItemsPerPage>,
}

impl ListingQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    pub fn items_per_page(mut self, items_per_page: ItemsPerPage) -> Self {
        self.items_per_page = Some(items_per_page);
        self
    }

    /// Uses `items_per_page` unless the request chose a size itself.
    pub fn or_items_per_page(mut self, items_per_page: ItemsPerPage) -> Self {
        self.items_per_page.get_or_insert(items_per_page);
        self
    }
}

/// Everything a renderer needs to draw one listing page.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ListingPageData<T> {
    /// Search query echoed back to the search box.
    pub query: String,
    pub current_page: usize,
    pub items_per_page: usize,
    pub total_pages: usize,
    /// Records matching the query across all pages.
    pub filtered_count: usize,
    /// Records in the loaded snapshot.
    pub total_count: usize,
    pub has_previous: bool,
    pub has_next: bool,
    /// Page links for the pagination control; `None` is an ellipsis.
    pub pages: Vec<Option<usize>>,
    /// Rows or cards to draw.
    pub items: Vec<T>,
}

impl<T: Clone> ListingPageData<T> {
    pub fn from_view<E: Extractor<T>>(view: &ViewStateController<T, E>) -> Self {
        Self {
            query: view.query().to_string(),
            current_page: view.current_page(),
            items_per_page: view.items_per_page(),
            total_pages: view.total_pages(),
            filtered_count: view.filtered_count(),
            total_count: view.total_count(),
            has_previous: view.has_previous(),
            has_next: view.has_next(),
            pages: page_links(view.total_pages(), view.current_page()),
            items: view.paginated_data().cloned().collect(),
        }
    }
}

impl<T> ListingPageData<T> {
    /// "Showing X of Y" counter text.
    pub fn result_summary(&self) -> String {
        format!("{} of {} results", self.filtered_count, self.total_count)
    }
}
