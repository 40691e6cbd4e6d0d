pub mod calendar;
pub mod files;
pub mod products;
