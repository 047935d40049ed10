//! Money type definitions
//!
//! Defines `FeeAmount` and `OrderAmount`.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::constrained_type;
use super::error::ValidationError;

// =============================================================================
// FeeAmount
// =============================================================================

/// A decimal type representing a delivery-fee amount
///
/// Constrained to the range 0.00 to 500000.00. Used for the base delivery
/// fee, the shipping discount, and the payable fee.
///
/// # Examples
///
/// ```
/// use delivery_checkout_sample::simple_types::FeeAmount;
/// use rust_decimal::Decimal;
///
/// let fee = FeeAmount::create(Decimal::from(30000)).unwrap();
/// assert_eq!(fee.value(), Decimal::from(30000));
///
/// // Out of range causes an error
/// assert!(FeeAmount::create(Decimal::from(-1)).is_err());
/// assert!(FeeAmount::create(Decimal::from(500001)).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FeeAmount(Decimal);

impl FeeAmount {
    /// Field name for `FeeAmount`
    const FIELD_NAME: &'static str = "FeeAmount";

    /// Returns the minimum value of `FeeAmount`
    fn min_value() -> Decimal {
        Decimal::from_str("0.0").expect("Valid decimal literal")
    }

    /// Returns the maximum value of `FeeAmount`
    fn max_value() -> Decimal {
        Decimal::from_str("500000.00").expect("Valid decimal literal")
    }

    /// Creates a `FeeAmount` from a decimal
    ///
    /// # Arguments
    ///
    /// * `value` - Input decimal
    ///
    /// # Returns
    ///
    /// * `Ok(FeeAmount)` - On successful validation
    /// * `Err(ValidationError)` - If out of range
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the value is less than 0.0 or greater
    /// than 500000.00.
    pub fn create(value: Decimal) -> Result<Self, ValidationError> {
        constrained_type::create_decimal(
            Self::FIELD_NAME,
            FeeAmount,
            Self::min_value(),
            Self::max_value(),
            value,
        )
    }

    /// Creates a `FeeAmount` without validation
    ///
    /// Use only when the value is known to be valid.
    ///
    /// # Panics
    ///
    /// Panics when an out-of-range value is passed.
    #[must_use]
    pub fn unsafe_create(value: Decimal) -> Self {
        Self::create(value)
            .unwrap_or_else(|error| panic!("Not expecting FeeAmount to be out of bounds: {error}"))
    }

    /// Returns the smaller of two fee amounts
    ///
    /// Both operands are in range, so the result always is too.
    ///
    /// # Examples
    ///
    /// ```
    /// use delivery_checkout_sample::simple_types::FeeAmount;
    /// use rust_decimal::Decimal;
    ///
    /// let base = FeeAmount::create(Decimal::from(30000)).unwrap();
    /// let cap = FeeAmount::create(Decimal::from(20000)).unwrap();
    /// assert_eq!(base.min(cap), cap);
    /// ```
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        if self.0 <= other.0 { self } else { other }
    }

    /// Subtracts another fee amount, clamping the result at zero
    ///
    /// # Examples
    ///
    /// ```
    /// use delivery_checkout_sample::simple_types::FeeAmount;
    /// use rust_decimal::Decimal;
    ///
    /// let base = FeeAmount::create(Decimal::from(30000)).unwrap();
    /// let discount = FeeAmount::create(Decimal::from(50000)).unwrap();
    /// assert_eq!(base.saturating_sub(discount).value(), Decimal::ZERO);
    /// ```
    #[must_use]
    pub fn saturating_sub(self, other: Self) -> Self {
        let difference = self.0 - other.0;
        if difference < Decimal::ZERO {
            Self(Decimal::ZERO)
        } else {
            Self(difference)
        }
    }

    /// Returns the inner decimal value
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}

// =============================================================================
// OrderAmount
// =============================================================================

/// A decimal type representing an order subtotal or threshold
///
/// Constrained to the range 0.00 to 10000000.00. Used for minimum-order
/// thresholds attached to vouchers and for order subtotals.
///
/// # Examples
///
/// ```
/// use delivery_checkout_sample::simple_types::OrderAmount;
/// use rust_decimal::Decimal;
///
/// let amount = OrderAmount::create(Decimal::from(150000)).unwrap();
/// assert_eq!(amount.value(), Decimal::from(150000));
///
/// // Out of range causes an error
/// assert!(OrderAmount::create(Decimal::from(-1)).is_err());
/// assert!(OrderAmount::create(Decimal::from(10000001)).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OrderAmount(Decimal);

impl OrderAmount {
    /// Field name for `OrderAmount`
    const FIELD_NAME: &'static str = "OrderAmount";

    /// Returns the minimum value of `OrderAmount`
    fn min_value() -> Decimal {
        Decimal::from_str("0.0").expect("Valid decimal literal")
    }

    /// Returns the maximum value of `OrderAmount`
    fn max_value() -> Decimal {
        Decimal::from_str("10000000.00").expect("Valid decimal literal")
    }

    /// Creates an `OrderAmount` from a decimal
    ///
    /// # Arguments
    ///
    /// * `value` - Input decimal
    ///
    /// # Returns
    ///
    /// * `Ok(OrderAmount)` - On successful validation
    /// * `Err(ValidationError)` - If out of range
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the value is less than 0.0 or greater
    /// than 10000000.00.
    pub fn create(value: Decimal) -> Result<Self, ValidationError> {
        constrained_type::create_decimal(
            Self::FIELD_NAME,
            OrderAmount,
            Self::min_value(),
            Self::max_value(),
            value,
        )
    }

    /// Creates an `OrderAmount` without validation
    ///
    /// Use only when the value is known to be valid.
    ///
    /// # Panics
    ///
    /// Panics when an out-of-range value is passed.
    #[must_use]
    pub fn unsafe_create(value: Decimal) -> Self {
        Self::create(value).unwrap_or_else(|error| {
            panic!("Not expecting OrderAmount to be out of bounds: {error}")
        })
    }

    /// Returns the inner decimal value
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}

// =============================================================================
// Tests
// =============================================================================
