pub use errors::{ServiceError, ServiceResult};

pub mod calendar;
pub mod errors;
pub mod files;
pub mod main;
pub mod products;
