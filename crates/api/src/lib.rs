//! HTTP API: mock catalog endpoint, search and comparison over the catalog.

pub mod app;
pub mod config;
pub mod context;
pub mod middleware;
