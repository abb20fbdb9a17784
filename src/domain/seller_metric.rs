use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::SellerPhone;
use crate::search::Searchable;

/// Quality score at or above which a seller is highlighted.
pub const GOOD_QUALITY_SCORE: f64 = 80.0;

/// Aggregated per-seller figures with fixed-precision numerics.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SellerMetric {
    pub seller_phone: SellerPhone,
    pub seller_name: Option<String>,
    pub city: Option<String>,
    pub total_listings_history: i64,
    pub current_active_listings: i64,
    pub catalog_quality_score: f64,
    pub avg_listings_recent: Option<f64>,
    pub last_scan_date: Option<DateTime<Utc>>,
}

impl SellerMetric {
    pub fn has_good_quality(&self) -> bool {
        self.catalog_quality_score >= GOOD_QUALITY_SCORE
    }
}

impl Searchable for SellerMetric {
    fn search_fields(&self) -> Vec<Option<String>> {
        vec![
            Some(self.seller_phone.to_string()),
            self.seller_name.clone(),
            self.city.clone(),
            Some(self.total_listings_history.to_string()),
            Some(self.current_active_listings.to_string()),
            Some(self.catalog_quality_score.to_string()),
        ]
    }
}
