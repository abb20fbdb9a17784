//! Read-only listing records shown by the dashboard.

pub mod product;
pub mod product_history;
pub mod scan_log;
pub mod seller;
pub mod seller_metric;
pub mod types;
