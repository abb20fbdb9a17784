//! Free-text filtering of in-memory listings.
//!
//! A listing screen supplies an extractor naming the searchable fields of its
//! records. A record matches when any extracted field contains the query as a
//! case-insensitive literal substring. Output order always follows the input.

/// Produces the searchable text of one record, in field order.
///
/// `None` entries stand for missing values and are matched as empty strings.
pub trait Extractor<T: ?Sized> {
    fn extract(&self, item: &T) -> Vec<Option<String>>;
}

impl<T: ?Sized, F> Extractor<T> for F
where
    F: Fn(&T) -> Vec<Option<String>>,
{
    fn extract(&self, item: &T) -> Vec<Option<String>> {
        self(item)
    }
}

/// Records that know which of their own fields are searchable.
///
/// `T::search_fields` can be passed wherever an [`Extractor`] is expected.
pub trait Searchable {
    fn search_fields(&self) -> Vec<Option<String>>;
}

/// Trimmed, lower-cased search needle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Normalizes the raw query; returns `None` for blank input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_lowercase()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks a single field value against the needle.
    pub fn matches_field(&self, value: Option<&str>) -> bool {
        value.unwrap_or_default().to_lowercase().contains(&self.0)
    }

    /// Checks every extracted field of `item`, stopping at the first hit.
    pub fn matches<T, E>(&self, item: &T, extractor: &E) -> bool
    where
        T: ?Sized,
        E: Extractor<T> + ?Sized,
    {
        extractor
            .extract(item)
            .iter()
            .any(|field| self.matches_field(field.as_deref()))
    }
}

/// Positions of the records in `items` matching `query`, ascending.
///
/// Blank queries select every position without calling the extractor.
pub fn filter_indices<T, E>(items: &[T], extractor: &E, query: &str) -> Vec<usize>
where
    E: Extractor<T> + ?Sized,
{
    match SearchQuery::parse(query) {
        None => (0..items.len()).collect(),
        Some(needle) => items
            .iter()
            .enumerate()
            .filter(|(_, item)| needle.matches(*item, extractor))
            .map(|(idx, _)| idx)
            .collect(),
    }
}

/// The order-preserving subsequence of `items` matching `query`.
pub fn filter<'a, T, E>(items: &'a [T], extractor: &E, query: &str) -> Vec<&'a T>
where
    E: Extractor<T> + ?Sized,
{
    filter_indices(items, extractor, query)
        .into_iter()
        .map(|idx| &items[idx])
        .collect()
}
