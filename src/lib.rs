//! Core library exports for the scraping dashboard.
//!
//! The `data` feature exposes the view layer: backend entities, formatting,
//! reader traits and the per-section controllers. The `server` feature adds
//! the HTTP client for the scraping backend, the summary poller and the
//! Actix-web routes that render the dashboard.

pub mod alerts;
pub mod domain;
pub mod dto;
pub mod formatting;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod sections;
pub mod services;

#[cfg(feature = "server")]
pub mod poller;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod state;
