//! DTO modules that bridge services with renderers.

pub mod listing;
