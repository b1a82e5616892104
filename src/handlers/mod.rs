//! HTTP request handlers
//!
//! This module contains the handlers behind every route:
//! - books: CRUD operations on the book collection
//! - docs: API documentation page and the OpenAPI document
//! - health: liveness and readiness probes
//! - metrics_handler: Prometheus exposition endpoint

pub mod books;
pub mod docs;
pub mod health;
pub mod metrics_handler;
