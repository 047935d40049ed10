//! Output DTOs
//!
//! Defines the DTO types used to serialize API responses.
//!
//! # Type List
//!
//! - [`ShippingResolutionDto`] - Shipping-quote response
//! - [`ProjectedStepDto`] - One classified progress step
//! - [`OrderStatusProjectionDto`] - Order-progress response

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::simple_types::OrderId;
use crate::workflow::{OrderStatusProjection, ProjectedStep, ShippingResolution};

// =============================================================================
// ShippingResolutionDto
// =============================================================================

/// Shipping-quote response DTO
///
/// # Examples
///
/// ```
/// use delivery_checkout_sample::dto::ShippingResolutionDto;
/// use delivery_checkout_sample::simple_types::FeeAmount;
/// use delivery_checkout_sample::workflow::ShippingResolution;
/// use rust_decimal::Decimal;
///
/// let base_fee = FeeAmount::create(Decimal::from(30000)).unwrap();
/// let resolution = ShippingResolution::without_freeship(base_fee);
/// let dto = ShippingResolutionDto::from_domain(&resolution);
///
/// assert_eq!(dto.final_fee, Decimal::from(30000));
/// assert!(!dto.has_freeship);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingResolutionDto {
    /// Undiscounted delivery charge (string format)
    #[serde(with = "rust_decimal::serde::str")]
    pub base_fee: Decimal,
    /// Payable fee after the discount (string format)
    #[serde(with = "rust_decimal::serde::str")]
    pub final_fee: Decimal,
    /// Best applicable discount (string format)
    #[serde(with = "rust_decimal::serde::str")]
    pub max_shipping_discount: Decimal,
    /// Selected voucher's minimum-order threshold (string format)
    #[serde(with = "rust_decimal::serde::str")]
    pub min_order_for_discount: Decimal,
    /// Whether a free-shipping voucher existed
    pub has_freeship: bool,
}

impl ShippingResolutionDto {
    /// Creates a `ShippingResolutionDto` from the domain [`ShippingResolution`]
    #[must_use]
    pub fn from_domain(resolution: &ShippingResolution) -> Self {
        Self {
            base_fee: resolution.base_fee().value(),
            final_fee: resolution.final_fee().value(),
            max_shipping_discount: resolution.max_shipping_discount().value(),
            min_order_for_discount: resolution.min_order_for_discount().value(),
            has_freeship: resolution.has_freeship(),
        }
    }
}

// =============================================================================
// ProjectedStepDto
// =============================================================================

/// One classified progress step
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedStepDto {
    /// Step wire string ("PENDING", "PLACED", ...)
    pub step: String,
    /// Whether the step lies before the active position
    pub is_completed: bool,
    /// Whether the step is the active position
    pub is_active: bool,
}

impl ProjectedStepDto {
    /// Creates a `ProjectedStepDto` from the domain [`ProjectedStep`]
    #[must_use]
    pub fn from_domain(step: &ProjectedStep) -> Self {
        Self {
            step: step.step().value().to_string(),
            is_completed: step.is_completed(),
            is_active: step.is_active(),
        }
    }
}

// =============================================================================
// OrderStatusProjectionDto
// =============================================================================

/// Order-progress response DTO
///
/// Echoes the raw status back so callers can distinguish an unknown status
/// from a genuinely pending order; the projection itself does not expose that
/// distinction.
///
/// # Examples
///
/// ```
/// use delivery_checkout_sample::dto::OrderStatusProjectionDto;
/// use delivery_checkout_sample::workflow::project_status;
///
/// let projection = project_status("ARRIVED");
/// let dto = OrderStatusProjectionDto::from_domain(None, "ARRIVED", &projection);
///
/// assert_eq!(dto.active_index, 4);
/// assert_eq!(dto.status, "ARRIVED");
/// assert_eq!(dto.steps.len(), 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStatusProjectionDto {
    /// Order ID, when the caller supplied one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Raw status string, echoed from the request
    pub status: String,
    /// Active position in the sequence (0 to 5)
    pub active_index: usize,
    /// The six classified steps, in display order
    pub steps: Vec<ProjectedStepDto>,
}

impl OrderStatusProjectionDto {
    /// Creates an `OrderStatusProjectionDto` from the domain [`OrderStatusProjection`]
    ///
    /// # Arguments
    ///
    /// * `order_id` - Validated order ID, when the caller supplied one
    /// * `status` - Raw status string from the request
    /// * `projection` - The computed projection
    #[must_use]
    pub fn from_domain(
        order_id: Option<&OrderId>,
        status: &str,
        projection: &OrderStatusProjection,
    ) -> Self {
        Self {
            order_id: order_id.map(|id| id.value().to_string()),
            status: status.to_string(),
            active_index: projection.active_index(),
            steps: projection
                .steps()
                .iter()
                .map(ProjectedStepDto::from_domain)
                .collect(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
