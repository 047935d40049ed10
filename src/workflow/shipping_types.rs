//! Shipping resolution types
//!
//! Defines the result type produced by shipping-fee resolution.
//!
//! # Type List
//!
//! - [`ShippingResolution`] - Outcome of resolving the delivery fee against vouchers

use rust_decimal::Decimal;

use crate::simple_types::{FeeAmount, OrderAmount};

// =============================================================================
// ShippingResolution
// =============================================================================

/// Outcome of resolving the delivery fee against the available vouchers
///
/// Constructed fresh on every resolution and handed straight to the caller;
/// nothing is cached or mutated afterwards.
///
/// # Invariants
///
/// - `final_fee <= base_fee`
/// - `max_shipping_discount <= base_fee`
/// - `has_freeship` is true iff a free-shipping voucher existed in the input
///
/// `min_order_for_discount` is informational: the resolver reports the
/// selected voucher's threshold but never checks it against a subtotal.
/// Callers that care must enforce it themselves.
///
/// # Examples
///
/// ```
/// use delivery_checkout_sample::simple_types::{FeeAmount, OrderAmount};
/// use delivery_checkout_sample::workflow::ShippingResolution;
/// use rust_decimal::Decimal;
///
/// let base_fee = FeeAmount::create(Decimal::from(30000)).unwrap();
/// let resolution = ShippingResolution::without_freeship(base_fee);
///
/// assert!(!resolution.has_freeship());
/// assert_eq!(resolution.final_fee(), base_fee);
/// assert_eq!(resolution.max_shipping_discount().value(), Decimal::ZERO);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShippingResolution {
    base_fee: FeeAmount,
    final_fee: FeeAmount,
    max_shipping_discount: FeeAmount,
    min_order_for_discount: OrderAmount,
    has_freeship: bool,
}

impl ShippingResolution {
    /// Creates a new `ShippingResolution`
    ///
    /// # Arguments
    ///
    /// * `base_fee` - Undiscounted delivery charge
    /// * `final_fee` - Payable fee after the discount
    /// * `max_shipping_discount` - Best applicable discount
    /// * `min_order_for_discount` - Selected voucher's minimum-order threshold
    /// * `has_freeship` - Whether a free-shipping voucher existed
    #[must_use]
    pub const fn new(
        base_fee: FeeAmount,
        final_fee: FeeAmount,
        max_shipping_discount: FeeAmount,
        min_order_for_discount: OrderAmount,
        has_freeship: bool,
    ) -> Self {
        Self {
            base_fee,
            final_fee,
            max_shipping_discount,
            min_order_for_discount,
            has_freeship,
        }
    }

    /// Creates the resolution for an input without any free-shipping voucher
    ///
    /// The fee stays at the base fee and the discount is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use delivery_checkout_sample::simple_types::FeeAmount;
    /// use delivery_checkout_sample::workflow::ShippingResolution;
    /// use rust_decimal::Decimal;
    ///
    /// let base_fee = FeeAmount::create(Decimal::from(18000)).unwrap();
    /// let resolution = ShippingResolution::without_freeship(base_fee);
    /// assert_eq!(resolution.final_fee(), base_fee);
    /// ```
    #[must_use]
    pub fn without_freeship(base_fee: FeeAmount) -> Self {
        Self {
            base_fee,
            final_fee: base_fee,
            max_shipping_discount: FeeAmount::unsafe_create(Decimal::ZERO),
            min_order_for_discount: OrderAmount::unsafe_create(Decimal::ZERO),
            has_freeship: false,
        }
    }

    /// Returns the undiscounted delivery charge
    #[must_use]
    pub const fn base_fee(&self) -> FeeAmount {
        self.base_fee
    }

    /// Returns the payable fee after the discount
    #[must_use]
    pub const fn final_fee(&self) -> FeeAmount {
        self.final_fee
    }

    /// Returns the best applicable shipping discount
    #[must_use]
    pub const fn max_shipping_discount(&self) -> FeeAmount {
        self.max_shipping_discount
    }

    /// Returns the selected voucher's minimum-order threshold (0 when absent)
    #[must_use]
    pub const fn min_order_for_discount(&self) -> OrderAmount {
        self.min_order_for_discount
    }

    /// Returns whether a free-shipping voucher existed in the input
    #[must_use]
    pub const fn has_freeship(&self) -> bool {
        self.has_freeship
    }
}

// =============================================================================
// Tests
// =============================================================================
