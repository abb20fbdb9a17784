use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::seller::SellerSummary;
use crate::domain::types::{ProductId, SellerPhone};
use crate::search::Searchable;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub seller_phone: SellerPhone,
    pub raw_name: Option<String>,
    pub raw_description: Option<String>,
    pub currency: Option<String>,
    pub availability: Option<String>,
    pub image_count: Option<i32>,
    pub model_name: Option<String>,
    pub storage_gb: Option<String>,
    pub color: Option<String>,
    pub warranty: Option<String>,
    pub is_active: bool,
    pub first_seen_at: DateTime<Utc>,
    pub last_seen_at: DateTime<Utc>,
    pub last_price_change_at: Option<DateTime<Utc>>,
    pub seller: SellerSummary,
}

impl Product {
    /// Listing title: raw name, then model name.
    pub fn display_name(&self) -> Option<&str> {
        self.raw_name.as_deref().or(self.model_name.as_deref())
    }
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<Option<String>> {
        vec![
            Some(self.id.to_string()),
            self.raw_name.clone(),
            self.raw_description.clone(),
            self.model_name.clone(),
            self.storage_gb.clone(),
            self.color.clone(),
            self.seller.name.clone(),
            Some(self.seller.phone_number.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_row_with_seller_join() {
        let json = r#"{
            "id": "clx0a1b2c3",
            "sellerPhone": "+380671234567",
            "rawName": null,
            "rawDescription": "Like new",
            "currency": "UAH",
            "availability": "in_stock",
            "imageCount": 4,
            "modelName": "iPhone 13",
            "storageGb": "128",
            "color": "Midnight",
            "warranty": null,
            "isActive": true,
            "firstSeenAt": "2024-01-10T09:00:00Z",
            "lastSeenAt": "2024-02-10T09:00:00Z",
            "lastPriceChangeAt": null,
            "seller": { "phoneNumber": "+380671234567", "name": "Apple Corner", "city": "Lviv" }
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.display_name(), Some("iPhone 13"));
        let fields = product.search_fields();
        assert_eq!(fields.len(), 8);
        assert_eq!(fields[0].as_deref(), Some("clx0a1b2c3"));
        assert_eq!(fields[1], None);
        assert_eq!(fields[6].as_deref(), Some("Apple Corner"));
        assert_eq!(fields[7].as_deref(), Some("+380671234567"));
    }
}
