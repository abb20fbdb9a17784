//! Search, filter and paginate state shared by every listing screen.
//!
//! [`ViewStateController`] owns the query, page and page size of one mounted
//! listing. Every mutation synchronously re-runs the filter and then the
//! paginator over the current source snapshot, so the derived values exposed
//! by the accessors are always consistent with each other.

use std::ops::Range;
use std::sync::Arc;

use serde::Serialize;

use crate::pagination::{ItemsPerPage, paginate};
use crate::search::{Extractor, Searchable, filter_indices};

/// Mutable view parameters of one listing screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub query: String,
    /// One-based page, always within `[1, total_pages]` after recomputation.
    pub page: usize,
    pub items_per_page: ItemsPerPage,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            items_per_page: ItemsPerPage::default(),
        }
    }
}

/// Derived figures published to listeners after each recomputation.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ViewSnapshot {
    pub query: String,
    pub current_page: usize,
    pub items_per_page: usize,
    pub total_pages: usize,
    /// Records matching the query, before slicing.
    pub filtered_count: usize,
    /// Records in the source snapshot.
    pub total_count: usize,
}

/// Handle returned by [`ViewStateController::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

type Listener = Box<dyn FnMut(&ViewSnapshot)>;

/// Extractor type used by controllers built from [`Searchable`] records.
pub type FieldsOf<T> = fn(&T) -> Vec<Option<String>>;

pub struct ViewStateController<T, E> {
    source: Arc<[T]>,
    extractor: E,
    state: ViewState,
    filtered: Vec<usize>,
    page_range: Range<usize>,
    total_pages: usize,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: usize,
}

impl<T: Searchable> ViewStateController<T, FieldsOf<T>> {
    /// Controller searching the record type's own [`Searchable`] fields.
    pub fn for_searchable(source: impl Into<Arc<[T]>>) -> Self {
        Self::new(source, T::search_fields as FieldsOf<T>)
    }
}

impl<T, E> ViewStateController<T, E>
where
    E: Extractor<T>,
{
    /// Mounts a view over `source` with the default state.
    pub fn new(source: impl Into<Arc<[T]>>, extractor: E) -> Self {
        Self::with_state(source, extractor, ViewState::default())
    }

    /// Mounts a view starting from `state`; the page is clamped immediately.
    pub fn with_state(source: impl Into<Arc<[T]>>, extractor: E, state: ViewState) -> Self {
        let mut controller = Self {
            source: source.into(),
            extractor,
            state,
            filtered: Vec::new(),
            page_range: 0..0,
            total_pages: 1,
            listeners: Vec::new(),
            next_subscription: 0,
        };
        controller.recompute();
        controller
    }

    /// Replaces the search text and returns to the first page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
        self.state.page = 1;
        self.recompute();
    }

    /// Moves to `page`; out-of-range requests land on the nearest valid page.
    pub fn set_page(&mut self, page: usize) {
        self.state.page = page;
        self.recompute();
    }

    /// Changes the page size, clamped into the accepted range, and returns to
    /// the first page.
    pub fn set_items_per_page(&mut self, items_per_page: i64) {
        self.apply_items_per_page(ItemsPerPage::clamped(items_per_page));
    }

    /// Applies text typed into the items-per-page control.
    ///
    /// Input without leading digits leaves the current size and page
    /// untouched.
    pub fn set_items_per_page_input(&mut self, raw: &str) {
        match ItemsPerPage::parse_input(raw) {
            Some(items_per_page) => self.apply_items_per_page(items_per_page),
            None => log::warn!(
                "Ignoring page size {raw:?} without leading digits, keeping {}",
                self.state.items_per_page
            ),
        }
    }

    /// Swaps in a freshly loaded snapshot, keeping query, page and page size.
    pub fn set_source(&mut self, source: impl Into<Arc<[T]>>) {
        self.source = source.into();
        self.recompute();
    }

    /// Registers a listener called with the new snapshot after every
    /// recomputation.
    pub fn subscribe(&mut self, listener: impl FnMut(&ViewSnapshot) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener; returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn query(&self) -> &str {
        &self.state.query
    }

    pub fn current_page(&self) -> usize {
        self.state.page
    }

    pub fn items_per_page(&self) -> usize {
        self.state.items_per_page.get()
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Number of records matching the query.
    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    /// Number of records in the source snapshot.
    pub fn total_count(&self) -> usize {
        self.source.len()
    }

    pub fn source(&self) -> &Arc<[T]> {
        &self.source
    }

    /// Records matching the query, in source order.
    pub fn filtered_data(&self) -> impl Iterator<Item = &T> + '_ {
        self.filtered.iter().map(|&idx| &self.source[idx])
    }

    /// Records on the current page, in source order.
    pub fn paginated_data(&self) -> impl Iterator<Item = &T> + '_ {
        self.filtered[self.page_range.clone()]
            .iter()
            .map(|&idx| &self.source[idx])
    }

    pub fn has_previous(&self) -> bool {
        self.state.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.state.page < self.total_pages
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            query: self.state.query.clone(),
            current_page: self.state.page,
            items_per_page: self.state.items_per_page.get(),
            total_pages: self.total_pages,
            filtered_count: self.filtered.len(),
            total_count: self.source.len(),
        }
    }

    fn apply_items_per_page(&mut self, items_per_page: ItemsPerPage) {
        self.state.items_per_page = items_per_page;
        self.state.page = 1;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.filtered = filter_indices(&*self.source, &self.extractor, &self.state.query);

        let page_size = self.state.items_per_page.get();
        let page = paginate(&self.filtered, self.state.page, page_size);
        if page.current_page != self.state.page {
            log::debug!(
                "Clamped page {} to {} of {}",
                self.state.page,
                page.current_page,
                page.total_pages
            );
        }

        let start = ((page.current_page - 1) * page_size).min(self.filtered.len());
        self.page_range = start..start + page.items.len();
        self.total_pages = page.total_pages;
        self.state.page = page.current_page;

        log::debug!(
            "Recomputed view: {} of {} records match {:?}, page {}/{}",
            self.filtered.len(),
            self.source.len(),
            self.state.query,
            self.state.page,
            self.total_pages
        );

        if !self.listeners.is_empty() {
            let snapshot = self.snapshot();
            for (_, listener) in &mut self.listeners {
                listener(&snapshot);
            }
        }
    }
}
