//! Strongly-typed value objects used by listing records.
//!
//! Wrappers deserialize through their validating constructors, so a record
//! loaded from a snapshot already satisfies these invariants.
use std::{ops::Deref, str::FromStr};

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
    /// Numeric field held something that is not a number.
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    /// Listing slug did not name a known screen.
    #[error("unknown listing: {0}")]
    UnknownListing(String),
}

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let inner = NonEmptyString::new(value)?;
                Ok(Self(inner.into_inner()))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(
    SellerPhone,
    "Seller phone number as stored by the scanner; the seller's primary key."
);

non_empty_string_newtype!(ProductId, "Opaque product identifier.");

/// Label rendered for the seller/product activity flag.
pub fn status_label(is_active: bool) -> &'static str {
    if is_active { "active" } else { "inactive" }
}

/// The listing screens of the dashboard.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ListingKind {
    Sellers,
    Products,
    ProductHistory,
    ScanLogs,
    Metrics,
}

impl ListingKind {
    pub const ALL: [ListingKind; 5] = [
        ListingKind::Sellers,
        ListingKind::Products,
        ListingKind::ProductHistory,
        ListingKind::ScanLogs,
        ListingKind::Metrics,
    ];

    /// URL slug of the screen.
    pub const fn slug(self) -> &'static str {
        match self {
            ListingKind::Sellers => "sellers",
            ListingKind::Products => "products",
            ListingKind::ProductHistory => "product-history",
            ListingKind::ScanLogs => "scan-logs",
            ListingKind::Metrics => "metrics",
        }
    }

    /// Human-readable screen title.
    pub const fn title(self) -> &'static str {
        match self {
            ListingKind::Sellers => "Sellers",
            ListingKind::Products => "Products",
            ListingKind::ProductHistory => "Product History",
            ListingKind::ScanLogs => "Scan Logs",
            ListingKind::Metrics => "Seller Metrics",
        }
    }
}

impl Display for ListingKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ListingKind {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().trim_start_matches('/').to_lowercase();
        ListingKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == wanted)
            .ok_or_else(|| TypeConstraintError::UnknownListing(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_is_trimmed_and_non_empty() {
        let phone = SellerPhone::new("  +380501112233 ").unwrap();
        assert_eq!(phone.as_str(), "+380501112233");
        assert_eq!(SellerPhone::new("   "), Err(TypeConstraintError::EmptyString));
    }

    #[test]
    fn newtypes_validate_when_deserialized() {
        let id: ProductId = serde_json::from_str("\" abc \"").unwrap();
        assert_eq!(&*id, "abc");
        assert!(serde_json::from_str::<ProductId>("\"  \"").is_err());
    }

    #[test]
    fn listing_kind_parses_slugs() {
        for kind in ListingKind::ALL {
            assert_eq!(kind.slug().parse::<ListingKind>(), Ok(kind));
        }
        assert_eq!("/Scan-Logs".parse::<ListingKind>(), Ok(ListingKind::ScanLogs));
        assert_eq!(
            "orders".parse::<ListingKind>(),
            Err(TypeConstraintError::UnknownListing("orders".to_string()))
        );
        assert_eq!(ListingKind::Metrics.title(), "Seller Metrics");
    }

    #[test]
    fn status_labels() {
        assert_eq!(status_label(true), "active");
        assert_eq!(status_label(false), "inactive");
    }
}
