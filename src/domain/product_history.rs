use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{ProductId, SellerPhone};
use crate::search::Searchable;

/// Point-in-time observation of a product's price and availability.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductHistory {
    pub id: i64,
    pub product_id: ProductId,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub availability: Option<String>,
    pub is_active: bool,
    pub recorded_at: DateTime<Utc>,
    pub product: HistoryProduct,
}

/// Product columns joined onto history rows.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryProduct {
    pub id: ProductId,
    pub raw_name: Option<String>,
    pub seller: HistorySeller,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistorySeller {
    pub phone_number: SellerPhone,
    pub name: Option<String>,
}

impl Searchable for ProductHistory {
    fn search_fields(&self) -> Vec<Option<String>> {
        vec![
            Some(self.product_id.to_string()),
            self.product.raw_name.clone(),
            self.product.seller.name.clone(),
            Some(self.product.seller.phone_number.to_string()),
            self.price.map(|price| price.to_string()),
            self.availability.clone(),
        ]
    }
}
