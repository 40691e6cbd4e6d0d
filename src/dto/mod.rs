//! View models handed to the templates.

pub mod events;
pub mod files;
pub mod products;
pub mod summary;
