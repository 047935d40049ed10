//! Compound type representing a voucher

use rust_decimal::Decimal;

use crate::simple_types::{
    DiscountType, FeeAmount, OrderAmount, ValidationError, VoucherCode, VoucherId,
};

/// A discount instrument granted to a customer
///
/// Combines the voucher identity with its discount terms. A missing
/// `max_discount_amount` means the discount is uncapped; a missing
/// `min_order_value` means no minimum-order threshold applies.
///
/// Only vouchers whose `discount_type` is `Freeship` participate in
/// shipping-fee resolution; the other kinds are carried for the item-subtotal
/// side of checkout, which lives outside this crate.
///
/// # Examples
///
/// ```
/// use delivery_checkout_sample::compound_types::Voucher;
/// use rust_decimal::Decimal;
///
/// let voucher = Voucher::create(
///     "vch-001",
///     "FREESHIP50",
///     "FREESHIP",
///     Some(Decimal::from(50000)),
///     Some(Decimal::from(150000)),
/// )
/// .unwrap();
///
/// assert!(voucher.discount_type().is_freeship());
/// assert_eq!(voucher.code().value(), "FREESHIP50");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Voucher {
    voucher_id: VoucherId,
    code: VoucherCode,
    discount_type: DiscountType,
    max_discount_amount: Option<FeeAmount>,
    min_order_value: Option<OrderAmount>,
}

impl Voucher {
    /// Creates a `Voucher` from raw field values
    ///
    /// # Arguments
    ///
    /// * `voucher_id` - Voucher ID string
    /// * `code` - Customer-facing voucher code
    /// * `discount_type` - Discount kind wire string ("PERCENTAGE", "FIXED", "FREESHIP")
    /// * `max_discount_amount` - Discount cap; `None` means uncapped
    /// * `min_order_value` - Minimum-order threshold; `None` means no threshold
    ///
    /// # Returns
    ///
    /// * `Ok(Voucher)` - On successful validation
    /// * `Err(ValidationError)` - When any field is invalid
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when any field is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use delivery_checkout_sample::compound_types::Voucher;
    /// use rust_decimal::Decimal;
    ///
    /// // Uncapped free-shipping voucher without a threshold
    /// let voucher = Voucher::create("vch-002", "SHIPFREE", "FREESHIP", None, None).unwrap();
    /// assert!(voucher.max_discount_amount().is_none());
    ///
    /// // Negative cap is invalid
    /// assert!(
    ///     Voucher::create("vch-003", "SHIPFREE", "FREESHIP", Some(Decimal::from(-1)), None)
    ///         .is_err()
    /// );
    /// ```
    pub fn create(
        voucher_id: &str,
        code: &str,
        discount_type: &str,
        max_discount_amount: Option<Decimal>,
        min_order_value: Option<Decimal>,
    ) -> Result<Self, ValidationError> {
        let voucher_id = VoucherId::create("VoucherId", voucher_id)?;
        let code = VoucherCode::create("VoucherCode", code)?;
        let discount_type = DiscountType::create("DiscountType", discount_type)?;
        let max_discount_amount = max_discount_amount.map(FeeAmount::create).transpose()?;
        let min_order_value = min_order_value.map(OrderAmount::create).transpose()?;

        Ok(Self {
            voucher_id,
            code,
            discount_type,
            max_discount_amount,
            min_order_value,
        })
    }

    /// Creates a `Voucher` from already-validated components
    ///
    /// # Arguments
    ///
    /// * `voucher_id` - Voucher ID
    /// * `code` - Voucher code
    /// * `discount_type` - Discount kind
    /// * `max_discount_amount` - Discount cap; `None` means uncapped
    /// * `min_order_value` - Minimum-order threshold; `None` means no threshold
    #[must_use]
    pub const fn new(
        voucher_id: VoucherId,
        code: VoucherCode,
        discount_type: DiscountType,
        max_discount_amount: Option<FeeAmount>,
        min_order_value: Option<OrderAmount>,
    ) -> Self {
        Self {
            voucher_id,
            code,
            discount_type,
            max_discount_amount,
            min_order_value,
        }
    }

    /// Returns a reference to the voucher ID
    #[must_use]
    pub const fn voucher_id(&self) -> &VoucherId {
        &self.voucher_id
    }

    /// Returns a reference to the voucher code
    #[must_use]
    pub const fn code(&self) -> &VoucherCode {
        &self.code
    }

    /// Returns the discount kind
    #[must_use]
    pub const fn discount_type(&self) -> DiscountType {
        self.discount_type
    }

    /// Returns the discount cap; `None` means uncapped
    #[must_use]
    pub const fn max_discount_amount(&self) -> Option<FeeAmount> {
        self.max_discount_amount
    }

    /// Returns the minimum-order threshold; `None` means no threshold
    #[must_use]
    pub const fn min_order_value(&self) -> Option<OrderAmount> {
        self.min_order_value
    }
}

// =============================================================================
// Tests
// =============================================================================
