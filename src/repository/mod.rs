//! Seam to the external query layer that materializes listings in memory.

use crate::domain::product::Product;
use crate::domain::product_history::ProductHistory;
use crate::domain::scan_log::ScanLog;
use crate::domain::seller::Seller;
use crate::domain::seller_metric::SellerMetric;
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod snapshot;

pub use snapshot::JsonSnapshotRepository;

/// Bulk, read-only access to every listing the dashboard shows.
///
/// Each call returns a complete snapshot; filtering and pagination happen in
/// memory afterwards.
pub trait ListingReader {
    fn list_sellers(&self) -> RepositoryResult<Vec<Seller>>;
    fn list_products(&self) -> RepositoryResult<Vec<Product>>;
    fn list_product_history(&self) -> RepositoryResult<Vec<ProductHistory>>;
    fn list_scan_logs(&self) -> RepositoryResult<Vec<ScanLog>>;
    fn list_seller_metrics(&self) -> RepositoryResult<Vec<SellerMetric>>;
}
