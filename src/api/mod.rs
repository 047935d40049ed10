//! API module
//!
//! Defines functions and types that serve as HTTP API entry points.
//!
//! # Module Structure
//!
//! - [`types`] - HTTP request/response types
//! - [`quote_api`] - Shipping-quote and order-progress endpoints
//! - [`axum_handler`] - Handlers for the axum framework
//!
//! # Design Principles
//!
//! - All API functions are pure `HttpRequest -> HttpResponse` functions
//! - DTO-to-domain type conversions are pure functions
//! - The axum handlers only adapt the API functions to the framework

pub mod axum_handler;
pub mod quote_api;
pub mod types;

// Re-exports
pub use quote_api::{order_progress_api, shipping_quote_api};
pub use types::{HttpRequest, HttpResponse};
