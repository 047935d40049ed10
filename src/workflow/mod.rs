//! Workflow module
//!
//! Holds the two computations at the core of the crate and the result types
//! they produce. Both are pure: they never fail, never block, and keep no
//! state between calls, so they are safe to invoke concurrently from any
//! number of callers without coordination.
//!
//! ```text
//! FeeAmount + [Voucher]  -> resolve_shipping -> ShippingResolution
//! raw status string      -> project_status   -> OrderStatusProjection
//! ```
//!
//! The two computations are independent; neither calls the other.
//!
//! # Module Structure
//!
//! - [`shipping_types`] - Shipping resolution result type
//! - [`shipping`] - Free-shipping voucher selection and fee resolution
//! - [`progress_types`] - Progress sequence and projection types
//! - [`progress`] - Status-to-sequence projection

pub mod progress;
pub mod progress_types;
pub mod shipping;
pub mod shipping_types;

// =============================================================================
// Type re-exports
// =============================================================================

pub use progress::{active_step_for, project_status};
pub use progress_types::{OrderStatusProjection, ProgressStep, ProjectedStep};
pub use shipping::{max_shipping_discount, resolve_shipping, select_best_freeship};
pub use shipping_types::ShippingResolution;
