//! Listing snapshots stored as JSON files, one array per listing.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::domain::product::Product;
use crate::domain::product_history::ProductHistory;
use crate::domain::scan_log::ScanLog;
use crate::domain::seller::Seller;
use crate::domain::seller_metric::SellerMetric;
use crate::models::seller_metric::RawSellerMetric;
use crate::repository::ListingReader;
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub const SELLERS_FILE: &str = "sellers.json";
pub const PRODUCTS_FILE: &str = "products.json";
pub const PRODUCT_HISTORY_FILE: &str = "product_history.json";
pub const SCAN_LOGS_FILE: &str = "scan_logs.json";
pub const SELLER_METRICS_FILE: &str = "seller_metrics.json";

/// Reads listings from `<dir>/*.json` and orders them the way the dashboard
/// queries do: newest first, metrics by seller phone.
#[derive(Clone, Debug)]
pub struct JsonSnapshotRepository {
    dir: PathBuf,
}

impl JsonSnapshotRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read<T: DeserializeOwned>(&self, file: &str) -> RepositoryResult<Vec<T>> {
        let path = self.dir.join(file);
        let contents = fs::read_to_string(&path).map_err(|err| {
            log::error!("Failed to read snapshot {}: {err}", path.display());
            RepositoryError::from(err)
        })?;
        let records: Vec<T> = serde_json::from_str(&contents)?;
        log::debug!("Loaded {} records from {}", records.len(), path.display());
        Ok(records)
    }
}

impl ListingReader for JsonSnapshotRepository {
    fn list_sellers(&self) -> RepositoryResult<Vec<Seller>> {
        let mut sellers: Vec<Seller> = self.read(SELLERS_FILE)?;
        sellers.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(sellers)
    }

    fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        let mut products: Vec<Product> = self.read(PRODUCTS_FILE)?;
        products.sort_by(|a, b| b.last_seen_at.cmp(&a.last_seen_at));
        Ok(products)
    }

    fn list_product_history(&self) -> RepositoryResult<Vec<ProductHistory>> {
        let mut history: Vec<ProductHistory> = self.read(PRODUCT_HISTORY_FILE)?;
        history.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        Ok(history)
    }

    fn list_scan_logs(&self) -> RepositoryResult<Vec<ScanLog>> {
        let mut logs: Vec<ScanLog> = self.read(SCAN_LOGS_FILE)?;
        logs.sort_by(|a, b| b.scan_time.cmp(&a.scan_time));
        Ok(logs)
    }

    fn list_seller_metrics(&self) -> RepositoryResult<Vec<SellerMetric>> {
        let raw: Vec<RawSellerMetric> = self.read(SELLER_METRICS_FILE)?;
        let mut metrics = raw
            .into_iter()
            .map(SellerMetric::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        metrics.sort_by(|a, b| a.seller_phone.cmp(&b.seller_phone));
        Ok(metrics)
    }
}
