//! Form definitions backing the listing screens.

use thiserror::Error;

pub mod listing;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("malformed query string: {0}")]
    QueryString(String),
}
