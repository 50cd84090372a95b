//! # Inventory Server
//!
//! A small HTTP service for registering inventory items with an optional
//! photo, and for listing, searching, updating and deleting them. Items live
//! in memory for the lifetime of the process; photos are written to a local
//! cache directory.
//!
//! ## Architecture
//!
//! - **Axum**: routing, multipart uploads, extractors
//! - **Tokio**: async runtime and file I/O
//! - **Serde**: JSON and form bodies
//! - **utoipa**: OpenAPI document generated from handler annotations
//!
//! ## Core Components
//!
//! - [`config`]: command line flags and the optional settings layer
//! - [`error`]: error taxonomy and HTTP mapping
//! - [`extract`]: JSON-or-form body extractor
//! - [`metrics`]: request counters
//! - [`middleware`]: security headers
//! - [`routes`]: HTTP handlers and router assembly
//! - [`state`]: shared application state
//! - [`storage`]: cache directory and photo files
//! - [`store`]: the in-memory inventory list
//! - [`types`]: item record and request bodies

pub mod config;
pub mod error;
pub mod extract;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod storage;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;
