use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{SellerPhone, status_label};
use crate::search::Searchable;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    pub phone_number: SellerPhone,
    pub name: Option<String>,
    pub city: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Seller columns joined onto product and scan-log rows.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SellerSummary {
    pub phone_number: SellerPhone,
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

impl Seller {
    /// Name to show in headings, falling back to the phone number.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.phone_number.as_str())
    }
}

impl SellerSummary {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.phone_number.as_str())
    }
}

impl Searchable for Seller {
    fn search_fields(&self) -> Vec<Option<String>> {
        vec![
            Some(self.phone_number.to_string()),
            self.name.clone(),
            self.city.clone(),
            Some(status_label(self.is_active).to_string()),
        ]
    }
}
