//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::product::Product;
use crate::domain::product_history::ProductHistory;
use crate::domain::scan_log::ScanLog;
use crate::domain::seller::Seller;
use crate::domain::seller_metric::SellerMetric;
use crate::repository::ListingReader;
use crate::repository::errors::RepositoryResult;

mock! {
    pub Repository {}

    impl ListingReader for Repository {
        fn list_sellers(&self) -> RepositoryResult<Vec<Seller>>;
        fn list_products(&self) -> RepositoryResult<Vec<Product>>;
        fn list_product_history(&self) -> RepositoryResult<Vec<ProductHistory>>;
        fn list_scan_logs(&self) -> RepositoryResult<Vec<ScanLog>>;
        fn list_seller_metrics(&self) -> RepositoryResult<Vec<SellerMetric>>;
    }
}
