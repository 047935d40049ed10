//! DTO module
//!
//! Serialization types for the HTTP boundary, plus the defensive
//! normalization that turns the backend's permissive voucher feed into
//! strict domain types.
//!
//! # Module Structure
//!
//! - [`input`] - Request DTOs and normalization
//! - [`output`] - Response DTOs
//! - [`error`] - Error DTOs

pub mod error;
pub mod input;
pub mod output;

// =============================================================================
// Type re-exports
// =============================================================================

pub use error::QuoteErrorDto;
pub use input::{DeliveryInfoDto, ProgressQueryDto, ShippingQuoteDto, VoucherDto};
pub use output::{OrderStatusProjectionDto, ProjectedStepDto, ShippingResolutionDto};
