//! Raw input of the search box and the pagination control.

use serde::Deserialize;

use crate::dto::listing::ListingQuery;
#[cfg(feature = "cli")]
use crate::forms::FormError;
use crate::pagination::ItemsPerPage;

/// Query-string parameters of a listing screen, kept as typed text.
#[derive(Debug, Default, Deserialize)]
pub struct ListingQueryForm {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub per_page: Option<String>,
}

impl ListingQueryForm {
    /// Parses `search=...&page=...&per_page=...`.
    #[cfg(feature = "cli")]
    pub fn from_query_string(query: &str) -> Result<Self, FormError> {
        let query = query.trim_start_matches('?');
        serde_html_form::from_str(query).map_err(|err| FormError::QueryString(err.to_string()))
    }
}

/// Page numbers below one become one; non-numeric input is dropped.
fn parse_page(raw: &str) -> Option<usize> {
    let trimmed = raw.trim();
    match trimmed.parse::<i64>() {
        Ok(value) if value < 1 => Some(1),
        Ok(value) => Some(usize::try_from(value).unwrap_or(usize::MAX)),
        Err(_) => {
            let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                Some(usize::MAX)
            } else if trimmed
                .strip_prefix('-')
                .is_some_and(|d| !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()))
            {
                Some(1)
            } else {
                log::debug!("Ignoring non-numeric page {raw:?}");
                None
            }
        }
    }
}

impl From<ListingQueryForm> for ListingQuery {
    fn from(form: ListingQueryForm) -> Self {
        let items_per_page = form.per_page.as_deref().and_then(|raw| {
            let parsed = ItemsPerPage::parse_input(raw);
            if parsed.is_none() {
                log::warn!("Ignoring non-numeric page size {raw:?}");
            }
            parsed
        });

        Self {
            search: form
                .search
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            page: form.page.as_deref().and_then(parse_page),
            items_per_page,
        }
    }
}
