use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::seller::SellerSummary;
use crate::domain::types::SellerPhone;
use crate::search::Searchable;

/// Outcome of one scraping pass over a seller's catalog.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScanLog {
    pub id: i64,
    pub seller_phone: SellerPhone,
    pub scan_time: DateTime<Utc>,
    pub status: String,
    pub products_found: Option<i32>,
    pub error_message: Option<String>,
    pub seller: SellerSummary,
}

impl ScanLog {
    pub fn is_failure(&self) -> bool {
        self.error_message.is_some()
    }
}

impl Searchable for ScanLog {
    fn search_fields(&self) -> Vec<Option<String>> {
        vec![
            Some(self.seller_phone.to_string()),
            self.seller.name.clone(),
            self.seller.city.clone(),
            Some(self.status.clone()),
            self.error_message.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_is_searchable() {
        let json = r#"{
            "id": 1,
            "sellerPhone": "+380501",
            "scanTime": "2024-04-02T03:00:00Z",
            "status": "failed",
            "productsFound": null,
            "errorMessage": "Timeout while loading catalog",
            "seller": { "phoneNumber": "+380501", "name": "Shop", "city": "Dnipro" }
        }"#;
        let log: ScanLog = serde_json::from_str(json).unwrap();

        assert!(log.is_failure());
        let fields = log.search_fields();
        assert_eq!(fields[2].as_deref(), Some("Dnipro"));
        assert_eq!(fields[4].as_deref(), Some("Timeout while loading catalog"));
    }
}
