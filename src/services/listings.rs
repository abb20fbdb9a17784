//! Loaders for the five listing screens.
//!
//! Each loader fetches a full snapshot from the repository and derives the
//! requested page through a [`ViewStateController`].

use serde::Serialize;

use crate::domain::product::Product;
use crate::domain::product_history::ProductHistory;
use crate::domain::scan_log::ScanLog;
use crate::domain::seller::Seller;
use crate::domain::seller_metric::SellerMetric;
use crate::domain::types::ListingKind;
use crate::dto::listing::{ListingPageData, ListingQuery};
use crate::repository::ListingReader;
use crate::repository::errors::RepositoryResult;
use crate::search::Searchable;
use crate::services::{ServiceError, ServiceResult};
use crate::view_state::{FieldsOf, ViewState, ViewStateController};

/// Derives the requested page of `records`.
pub fn build_listing_page<T>(records: Vec<T>, query: &ListingQuery) -> ListingPageData<T>
where
    T: Searchable + Clone,
{
    let state = ViewState {
        query: query.search.clone().unwrap_or_default(),
        page: query.page.unwrap_or(1),
        items_per_page: query.items_per_page.unwrap_or_default(),
    };
    let view = ViewStateController::with_state(records, T::search_fields as FieldsOf<T>, state);
    ListingPageData::from_view(&view)
}

fn load<T, F>(kind: ListingKind, fetch: F, query: &ListingQuery) -> ServiceResult<ListingPageData<T>>
where
    T: Searchable + Clone,
    F: FnOnce() -> RepositoryResult<Vec<T>>,
{
    let records = fetch().map_err(|err| {
        log::error!("Failed to load {kind}: {err}");
        ServiceError::from(err)
    })?;
    let page = build_listing_page(records, query);
    log::info!(
        "Rendered {kind} page {}/{} ({})",
        page.current_page,
        page.total_pages,
        page.result_summary()
    );
    Ok(page)
}

/// Loads the sellers listing.
pub fn load_sellers_page<R>(repo: &R, query: &ListingQuery) -> ServiceResult<ListingPageData<Seller>>
where
    R: ListingReader + ?Sized,
{
    load(ListingKind::Sellers, || repo.list_sellers(), query)
}

/// Loads the products listing.
pub fn load_products_page<R>(
    repo: &R,
    query: &ListingQuery,
) -> ServiceResult<ListingPageData<Product>>
where
    R: ListingReader + ?Sized,
{
    load(ListingKind::Products, || repo.list_products(), query)
}

/// Loads the product history listing.
pub fn load_product_history_page<R>(
    repo: &R,
    query: &ListingQuery,
) -> ServiceResult<ListingPageData<ProductHistory>>
where
    R: ListingReader + ?Sized,
{
    load(ListingKind::ProductHistory, || repo.list_product_history(), query)
}

/// Loads the scan logs listing.
pub fn load_scan_logs_page<R>(
    repo: &R,
    query: &ListingQuery,
) -> ServiceResult<ListingPageData<ScanLog>>
where
    R: ListingReader + ?Sized,
{
    load(ListingKind::ScanLogs, || repo.list_scan_logs(), query)
}

/// Loads the seller metrics listing.
pub fn load_seller_metrics_page<R>(
    repo: &R,
    query: &ListingQuery,
) -> ServiceResult<ListingPageData<SellerMetric>>
where
    R: ListingReader + ?Sized,
{
    load(ListingKind::Metrics, || repo.list_seller_metrics(), query)
}

fn to_json<T: Serialize>(page: ListingPageData<T>) -> ServiceResult<serde_json::Value> {
    Ok(serde_json::to_value(page)?)
}

/// Loads any listing and serializes the page for a generic renderer.
pub fn load_listing_json<R>(
    repo: &R,
    kind: ListingKind,
    query: &ListingQuery,
) -> ServiceResult<serde_json::Value>
where
    R: ListingReader + ?Sized,
{
    match kind {
        ListingKind::Sellers => to_json(load_sellers_page(repo, query)?),
        ListingKind::Products => to_json(load_products_page(repo, query)?),
        ListingKind::ProductHistory => to_json(load_product_history_page(repo, query)?),
        ListingKind::ScanLogs => to_json(load_scan_logs_page(repo, query)?),
        ListingKind::Metrics => to_json(load_seller_metrics_page(repo, query)?),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use chrono::{DateTime, Utc};

    use super::*;
    use crate::domain::types::SellerPhone;
    use crate::pagination::ItemsPerPage;
    use crate::repository::errors::RepositoryError;

    #[derive(Default)]
    struct StubRepo {
        sellers: RefCell<Vec<Seller>>,
        fail: bool,
    }

    impl ListingReader for StubRepo {
        fn list_sellers(&self) -> RepositoryResult<Vec<Seller>> {
            if self.fail {
                return Err(RepositoryError::StorageError("disk on fire".into()));
            }
            Ok(self.sellers.borrow().clone())
        }

        fn list_products(&self) -> RepositoryResult<Vec<Product>> {
            Ok(Vec::new())
        }

        fn list_product_history(&self) -> RepositoryResult<Vec<ProductHistory>> {
            Ok(Vec::new())
        }

        fn list_scan_logs(&self) -> RepositoryResult<Vec<ScanLog>> {
            Ok(Vec::new())
        }

        fn list_seller_metrics(&self) -> RepositoryResult<Vec<SellerMetric>> {
            Ok(Vec::new())
        }
    }

    fn seller(i: usize, city: &str) -> Seller {
        Seller {
            phone_number: SellerPhone::new(format!("+38050{i:04}")).unwrap(),
            name: Some(format!("Seller {i}")),
            city: Some(city.to_string()),
            is_active: i % 2 == 0,
            created_at: DateTime::<Utc>::default(),
        }
    }

    fn repo_with(n: usize) -> StubRepo {
        let sellers = (1..=n)
            .map(|i| seller(i, if i % 5 == 0 { "Lviv" } else { "Kyiv" }))
            .collect();
        StubRepo {
            sellers: RefCell::new(sellers),
            fail: false,
        }
    }

    #[test]
    fn default_query_shows_first_ten() {
        let page = load_sellers_page(&repo_with(25), &ListingQuery::new()).unwrap();

        assert_eq!(page.items.len(), 10);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_count, 25);
    }

    #[test]
    fn search_and_stale_page_are_reconciled() {
        let query = ListingQuery::new().search("lviv").page(3);
        let page = load_sellers_page(&repo_with(25), &query).unwrap();

        assert_eq!(page.filtered_count, 5);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.current_page, 1);
        assert!(page.items.iter().all(|s| s.city.as_deref() == Some("Lviv")));
    }

    #[test]
    fn status_label_is_searchable() {
        let query = ListingQuery::new()
            .search("INACTIVE")
            .items_per_page(ItemsPerPage::clamped(100));
        let page = load_sellers_page(&repo_with(25), &query).unwrap();

        assert_eq!(page.filtered_count, 13);
        assert!(page.items.iter().all(|s| !s.is_active));
    }

    #[test]
    fn repository_failures_propagate() {
        let repo = StubRepo {
            fail: true,
            ..StubRepo::default()
        };
        let err = load_sellers_page(&repo, &ListingQuery::new()).unwrap_err();
        assert!(matches!(err, ServiceError::Repository(_)));
    }

    #[test]
    fn empty_listing_serializes_with_one_page() {
        let value =
            load_listing_json(&repo_with(0), ListingKind::Metrics, &ListingQuery::new()).unwrap();

        assert_eq!(value["total_pages"], 1);
        assert_eq!(value["current_page"], 1);
        assert_eq!(value["total_count"], 0);
        assert_eq!(value["items"], serde_json::json!([]));
        assert_eq!(value["pages"], serde_json::json!([1]));
    }
}
