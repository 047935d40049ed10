//! ID type definitions
//!
//! Defines `OrderId` and `VoucherId`.

use super::constrained_type;
use super::error::ValidationError;

// =============================================================================
// OrderId
// =============================================================================

/// An ID type that uniquely identifies an order
///
/// A non-empty string of 50 characters or fewer.
/// Can be used as a `HashMap` key (`Hash` is derived).
///
/// # Examples
///
/// ```
/// use delivery_checkout_sample::simple_types::OrderId;
///
/// let order_id = OrderId::create("OrderId", "ORD-2024-001").unwrap();
/// assert_eq!(order_id.value(), "ORD-2024-001");
///
/// // Empty string causes an error
/// assert!(OrderId::create("OrderId", "").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OrderId(String);

/// Maximum character count for `OrderId`
const ORDER_ID_MAX_LENGTH: usize = 50;

impl OrderId {
    /// Creates an `OrderId` from a string
    ///
    /// # Arguments
    ///
    /// * `field_name` - Field name used in error messages
    /// * `value` - Input string
    ///
    /// # Returns
    ///
    /// * `Ok(OrderId)` - On successful validation
    /// * `Err(ValidationError)` - When the string is empty or exceeds 50 characters
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the string is empty or exceeds 50 characters.
    pub fn create(field_name: &str, value: &str) -> Result<Self, ValidationError> {
        constrained_type::create_string(field_name, OrderId, ORDER_ID_MAX_LENGTH, value)
    }

    /// Returns a reference to the inner ID string
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// VoucherId
// =============================================================================

/// An ID type that uniquely identifies a voucher
///
/// A non-empty string of 50 characters or fewer.
///
/// # Examples
///
/// ```
/// use delivery_checkout_sample::simple_types::VoucherId;
///
/// let voucher_id = VoucherId::create("VoucherId", "vch-0042").unwrap();
/// assert_eq!(voucher_id.value(), "vch-0042");
///
/// // Empty string causes an error
/// assert!(VoucherId::create("VoucherId", "").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VoucherId(String);

/// Maximum character count for `VoucherId`
const VOUCHER_ID_MAX_LENGTH: usize = 50;

impl VoucherId {
    /// Creates a `VoucherId` from a string
    ///
    /// # Arguments
    ///
    /// * `field_name` - Field name used in error messages
    /// * `value` - Input string
    ///
    /// # Returns
    ///
    /// * `Ok(VoucherId)` - On successful validation
    /// * `Err(ValidationError)` - When the string is empty or exceeds 50 characters
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the string is empty or exceeds 50 characters.
    pub fn create(field_name: &str, value: &str) -> Result<Self, ValidationError> {
        constrained_type::create_string(field_name, VoucherId, VOUCHER_ID_MAX_LENGTH, value)
    }

    /// Returns a reference to the inner ID string
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // OrderId Tests
    // =========================================================================

    #[rstest]
    fn test_order_id_create_valid() {
        let result = OrderId::create("OrderId", "ORD-2024-001");

        assert!(result.is_ok());
        assert_eq!(result.unwrap().value(), "ORD-2024-001");
    }

    #[rstest]
    fn test_order_id_create_empty() {
        let result = OrderId::create("OrderId", "");

        assert!(result.is_err());
        let error = result.unwrap_err();
        assert_eq!(error.field_name, "OrderId");
        assert_eq!(error.message, "Must not be empty");
    }

    #[rstest]
    fn test_order_id_create_too_long() {
        let long_id = "a".repeat(51);
        let result = OrderId::create("OrderId", &long_id);

        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().message,
            "Must not be more than 50 chars"
        );
    }

    #[rstest]
    fn test_order_id_boundary_exactly_max() {
        let exact_id = "a".repeat(50);
        let result = OrderId::create("OrderId", &exact_id);

        assert!(result.is_ok());
    }

    #[rstest]
    fn test_order_id_eq() {
        let id1 = OrderId::create("OrderId", "ORD-1").unwrap();
        let id2 = OrderId::create("OrderId", "ORD-1").unwrap();
        let id3 = OrderId::create("OrderId", "ORD-2").unwrap();

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    // =========================================================================
    // VoucherId Tests
    // =========================================================================

    #[rstest]
    fn test_voucher_id_create_valid() {
        let result = VoucherId::create("VoucherId", "vch-0042");

        assert!(result.is_ok());
        assert_eq!(result.unwrap().value(), "vch-0042");
    }

    #[rstest]
    fn test_voucher_id_create_empty() {
        let result = VoucherId::create("VoucherId", "");

        assert!(result.is_err());
        let error = result.unwrap_err();
        assert_eq!(error.field_name, "VoucherId");
        assert_eq!(error.message, "Must not be empty");
    }

    #[rstest]
    fn test_voucher_id_create_too_long() {
        let long_id = "v".repeat(51);
        let result = VoucherId::create("VoucherId", &long_id);

        assert!(result.is_err());
    }

    #[rstest]
    fn test_voucher_id_clone() {
        let voucher_id = VoucherId::create("VoucherId", "vch-1").unwrap();
        let cloned = voucher_id.clone();

        assert_eq!(voucher_id, cloned);
    }
}
