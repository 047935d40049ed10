//! Basic types (Simple Types) used in the delivery-checkout domain
//!
//! Single-value wrapper types built with the newtype pattern, following the
//! "Make Illegal States Unrepresentable" principle: only validated values can
//! exist.
//!
//! # Overview
//!
//! This module provides the basic types used by the shipping-fee and
//! order-progress computations. Each type uses the Smart Constructor pattern
//! and is guaranteed to hold a validated value.
//!
//! # Type Categories
//!
//! - **ID types**: `OrderId`, `VoucherId`
//! - **Money types**: `FeeAmount`, `OrderAmount`
//! - **Other**: `DiscountType`, `VoucherCode`, `DistanceKm`
//!
//! # Examples
//!
//! ```
//! use delivery_checkout_sample::simple_types::{DiscountType, FeeAmount, VoucherCode};
//! use rust_decimal::Decimal;
//!
//! // FeeAmount creation (with validation)
//! let base_fee = FeeAmount::create(Decimal::from(30000)).unwrap();
//! assert_eq!(base_fee.value(), Decimal::from(30000));
//!
//! // DiscountType parses the backend's wire strings
//! let discount_type = DiscountType::create("DiscountType", "FREESHIP").unwrap();
//! assert!(discount_type.is_freeship());
//!
//! // VoucherCode is pattern-validated
//! let code = VoucherCode::create("VoucherCode", "FREESHIP50").unwrap();
//! assert_eq!(code.value(), "FREESHIP50");
//! ```

pub mod constrained_type;
mod error;
mod identifier_types;
mod misc_types;
mod money_types;

// =============================================================================
// Type re-exports
// =============================================================================

// Error type
pub use error::ValidationError;

// ID types
pub use identifier_types::{OrderId, VoucherId};

// Money types
pub use money_types::{FeeAmount, OrderAmount};

// Other types
pub use misc_types::{DiscountType, DistanceKm, VoucherCode};
