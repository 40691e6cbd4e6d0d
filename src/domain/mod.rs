//! Read-only projections of the resources served by the scraping backend.

pub mod event;
pub mod file;
pub mod product;
pub mod stats;
pub mod types;
