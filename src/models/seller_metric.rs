//! Raw seller-metric rows as produced by the aggregated metrics view.
//!
//! The query layer hands numerics over loosely typed: big integers may be
//! JSON numbers or decimal strings, scores may be decimals rendered as text,
//! and any of them may be null. Conversion to [`SellerMetric`] happens once,
//! here, so filtering only ever sees fixed-precision values.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::seller_metric::SellerMetric;
use crate::domain::types::{SellerPhone, TypeConstraintError};

/// Loosely typed numeric value coming from the query layer.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RawNumber {
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
}

fn is_integer_literal(value: &str) -> bool {
    let digits = value.strip_prefix(['-', '+']).unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn float_to_i64(value: f64) -> Result<i64, TypeConstraintError> {
    if value.is_finite() {
        // `as` truncates toward zero and saturates at the i64 bounds.
        Ok(value as i64)
    } else {
        Err(TypeConstraintError::InvalidNumber(value.to_string()))
    }
}

impl RawNumber {
    /// Integer view of the value; fractions truncate, overflow saturates.
    pub fn to_i64(&self) -> Result<i64, TypeConstraintError> {
        match self {
            RawNumber::Int(value) => Ok(*value),
            RawNumber::UInt(value) => Ok(i64::try_from(*value).unwrap_or(i64::MAX)),
            RawNumber::Float(value) => float_to_i64(*value),
            RawNumber::Text(text) => {
                let trimmed = text.trim();
                if let Ok(value) = trimmed.parse::<i64>() {
                    Ok(value)
                } else if is_integer_literal(trimmed) {
                    Ok(if trimmed.starts_with('-') {
                        i64::MIN
                    } else {
                        i64::MAX
                    })
                } else {
                    trimmed
                        .parse::<f64>()
                        .map_err(|_| TypeConstraintError::InvalidNumber(text.clone()))
                        .and_then(float_to_i64)
                }
            }
        }
    }

    /// Floating-point view of the value.
    pub fn to_f64(&self) -> Result<f64, TypeConstraintError> {
        let value = match self {
            RawNumber::Int(value) => *value as f64,
            RawNumber::UInt(value) => *value as f64,
            RawNumber::Float(value) => *value,
            RawNumber::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| TypeConstraintError::InvalidNumber(text.clone()))?,
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(TypeConstraintError::InvalidNumber(value.to_string()))
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct RawSellerMetric {
    pub seller_phone: String,
    #[serde(default)]
    pub seller_name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub total_listings_history: Option<RawNumber>,
    #[serde(default)]
    pub current_active_listings: Option<RawNumber>,
    #[serde(default)]
    pub catalog_quality_score: Option<RawNumber>,
    #[serde(default)]
    pub avg_listings_recent: Option<RawNumber>,
    #[serde(default)]
    pub last_scan_date: Option<DateTime<Utc>>,
}

impl TryFrom<RawSellerMetric> for SellerMetric {
    type Error = TypeConstraintError;

    fn try_from(raw: RawSellerMetric) -> Result<Self, Self::Error> {
        let count = |value: &Option<RawNumber>| value.as_ref().map_or(Ok(0), RawNumber::to_i64);

        Ok(Self {
            seller_phone: SellerPhone::new(raw.seller_phone)?,
            seller_name: raw.seller_name,
            city: raw.city,
            total_listings_history: count(&raw.total_listings_history)?,
            current_active_listings: count(&raw.current_active_listings)?,
            catalog_quality_score: raw
                .catalog_quality_score
                .as_ref()
                .map_or(Ok(0.0), RawNumber::to_f64)?,
            avg_listings_recent: raw
                .avg_listings_recent
                .as_ref()
                .map(RawNumber::to_f64)
                .transpose()?,
            last_scan_date: raw.last_scan_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> RawSellerMetric {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn mixed_numeric_representations_convert_once() {
        let raw = parse(
            r#"{
                "seller_phone": "+380501112233",
                "seller_name": "Shop",
                "city": null,
                "total_listings_history": "98765432109",
                "current_active_listings": 42,
                "catalog_quality_score": "87.25",
                "avg_listings_recent": 12.5,
                "last_scan_date": "2024-05-01T10:00:00Z"
            }"#,
        );
        let metric = SellerMetric::try_from(raw).unwrap();

        assert_eq!(metric.total_listings_history, 98_765_432_109);
        assert_eq!(metric.current_active_listings, 42);
        assert_eq!(metric.catalog_quality_score, 87.25);
        assert_eq!(metric.avg_listings_recent, Some(12.5));
        assert!(metric.last_scan_date.is_some());
    }

    #[test]
    fn nulls_become_defaults() {
        let raw = parse(
            r#"{
                "seller_phone": "+380",
                "total_listings_history": null,
                "catalog_quality_score": null,
                "avg_listings_recent": null
            }"#,
        );
        let metric = SellerMetric::try_from(raw).unwrap();

        assert_eq!(metric.total_listings_history, 0);
        assert_eq!(metric.current_active_listings, 0);
        assert_eq!(metric.catalog_quality_score, 0.0);
        assert_eq!(metric.avg_listings_recent, None);
    }

    #[test]
    fn garbage_numbers_are_rejected() {
        let raw = parse(r#"{ "seller_phone": "+380", "current_active_listings": "lots" }"#);
        assert_eq!(
            SellerMetric::try_from(raw).unwrap_err(),
            TypeConstraintError::InvalidNumber("lots".to_string())
        );
    }

    #[test]
    fn integer_views_truncate_and_saturate() {
        assert_eq!(RawNumber::Float(12.9).to_i64(), Ok(12));
        assert_eq!(RawNumber::Float(-12.9).to_i64(), Ok(-12));
        assert_eq!(RawNumber::UInt(u64::MAX).to_i64(), Ok(i64::MAX));
        assert_eq!(
            RawNumber::Text("123456789012345678901234".into()).to_i64(),
            Ok(i64::MAX)
        );
        assert_eq!(RawNumber::Text(" 7.0 ".into()).to_i64(), Ok(7));
        assert!(RawNumber::Text("NaN".into()).to_i64().is_err());
        assert!(RawNumber::Text("inf".into()).to_f64().is_err());
    }

    #[test]
    fn empty_phone_is_rejected() {
        let raw = parse(r#"{ "seller_phone": "  " }"#);
        assert_eq!(
            SellerMetric::try_from(raw).unwrap_err(),
            TypeConstraintError::EmptyString
        );
    }
}
