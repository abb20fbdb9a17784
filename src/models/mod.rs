//! Shapes handed over by external collaborators before they reach the domain.

#[cfg(feature = "cli")]
pub mod config;
pub mod seller_metric;
