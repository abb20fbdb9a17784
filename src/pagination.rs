use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Initial page size of a freshly mounted listing.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;
/// Smallest page size accepted by the pagination control.
pub const MIN_ITEMS_PER_PAGE: usize = 1;
/// Largest page size accepted by the pagination control.
pub const MAX_ITEMS_PER_PAGE: usize = 100;

/// Page size guaranteed to lie in `[MIN_ITEMS_PER_PAGE, MAX_ITEMS_PER_PAGE]`.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ItemsPerPage(usize);

impl ItemsPerPage {
    /// Clamps any integer into the accepted range.
    pub fn clamped(value: i64) -> Self {
        let value = value.clamp(MIN_ITEMS_PER_PAGE as i64, MAX_ITEMS_PER_PAGE as i64);
        Self(value as usize)
    }

    /// Interprets text typed into the items-per-page control.
    ///
    /// Reads an optional sign and the leading digits, ignoring whatever
    /// follows them, so `"12.5"` reads as 12. The value is clamped, including
    /// literals too large for `i64`. Input without leading digits yields
    /// `None` so the caller can keep its previous size.
    pub fn parse_input(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if len == 0 {
            return None;
        }

        let value = match rest[..len].parse::<i64>() {
            Ok(value) if negative => -value,
            Ok(value) => value,
            // Integer literal that overflowed i64.
            Err(_) if negative => i64::MIN,
            Err(_) => i64::MAX,
        };
        Some(Self::clamped(value))
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for ItemsPerPage {
    fn default() -> Self {
        Self(DEFAULT_ITEMS_PER_PAGE)
    }
}

impl Display for ItemsPerPage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for ItemsPerPage {
    fn from(value: usize) -> Self {
        Self::clamped(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<ItemsPerPage> for usize {
    fn from(value: ItemsPerPage) -> Self {
        value.0
    }
}

/// `max(1, ceil(total_count / page_size))`; a zero page size counts as one.
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    total_count.div_ceil(page_size.max(1)).max(1)
}

/// One page cut from a (usually already filtered) collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Records on the current page, at most `page_size` of them.
    pub items: &'a [T],
    /// Requested page clamped into `[1, total_pages]`.
    pub current_page: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

/// Slices `items` to the requested page.
///
/// Out-of-range requests are clamped to the nearest valid page. The page size
/// itself is not range-checked beyond treating zero as one.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_count = items.len();
    let total_pages = total_pages(total_count, page_size);
    let current_page = page.clamp(1, total_pages);

    let start = ((current_page - 1) * page_size).min(total_count);
    let end = (start + page_size).min(total_count);

    Page {
        items: &items[start..end],
        current_page,
        total_pages,
        total_count,
    }
}

/// Compact list of page links; `None` stands for a gap rendered as an ellipsis.
pub fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// Page links shown by the listing pagination control.
pub fn page_links(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    get_pages(total_pages, current_page, 2, 2, 4, 2)
}
