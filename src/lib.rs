//! In-memory search, filter and pagination for the scan dashboard listings.
//!
//! The core (`search`, `pagination`, `view_state`) is always available. The
//! `data` feature adds the listing records, the repository seam and the
//! per-screen services; `cli` adds configuration and the preview binary.

pub mod pagination;
pub mod search;
pub mod view_state;

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
mod error_conversions;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod services;

pub use pagination::{ItemsPerPage, Page, paginate};
pub use search::{Extractor, Searchable, filter};
pub use view_state::{ViewSnapshot, ViewState, ViewStateController};
