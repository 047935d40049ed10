//! Other type definitions
//!
//! Defines `DiscountType`, `VoucherCode`, and `DistanceKm`.

use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::LazyLock;

use super::constrained_type;
use super::error::ValidationError;

// =============================================================================
// DiscountType
// =============================================================================

/// An enum representing the kind of discount a voucher grants
///
/// `Percentage` and `Fixed` vouchers reduce the item subtotal and never
/// participate in shipping-fee resolution; only `Freeship` vouchers do.
///
/// # Examples
///
/// ```
/// use delivery_checkout_sample::simple_types::DiscountType;
///
/// let freeship = DiscountType::create("DiscountType", "FREESHIP").unwrap();
/// assert!(freeship.is_freeship());
/// assert_eq!(freeship.value(), "FREESHIP");
///
/// // Invalid value causes an error
/// assert!(DiscountType::create("DiscountType", "BOGO").is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiscountType {
    /// Percentage off the item subtotal
    Percentage,
    /// Fixed amount off the item subtotal
    Fixed,
    /// Reduces the delivery fee instead of the item subtotal
    Freeship,
}

impl DiscountType {
    /// Creates a `DiscountType` from the backend's wire string
    ///
    /// Accepts "PERCENTAGE", "FIXED", and "FREESHIP".
    ///
    /// # Arguments
    ///
    /// * `field_name` - Field name used in error messages
    /// * `value` - Input string
    ///
    /// # Returns
    ///
    /// * `Ok(DiscountType)` - On successful validation
    /// * `Err(ValidationError)` - For an invalid value
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for values other than "PERCENTAGE", "FIXED",
    /// "FREESHIP".
    pub fn create(field_name: &str, value: &str) -> Result<Self, ValidationError> {
        match value {
            "PERCENTAGE" => Ok(Self::Percentage),
            "FIXED" => Ok(Self::Fixed),
            "FREESHIP" => Ok(Self::Freeship),
            _ => Err(ValidationError::new(
                field_name,
                "Must be one of 'PERCENTAGE', 'FIXED', 'FREESHIP'",
            )),
        }
    }

    /// Returns whether this is the `Percentage` variant
    #[must_use]
    pub const fn is_percentage(&self) -> bool {
        matches!(self, Self::Percentage)
    }

    /// Returns whether this is the `Fixed` variant
    #[must_use]
    pub const fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed)
    }

    /// Returns whether this is the `Freeship` variant
    ///
    /// # Examples
    ///
    /// ```
    /// use delivery_checkout_sample::simple_types::DiscountType;
    ///
    /// assert!(DiscountType::Freeship.is_freeship());
    /// assert!(!DiscountType::Fixed.is_freeship());
    /// ```
    #[must_use]
    pub const fn is_freeship(&self) -> bool {
        matches!(self, Self::Freeship)
    }

    /// Returns the `DiscountType` as its wire string
    #[must_use]
    pub const fn value(&self) -> &'static str {
        match self {
            Self::Percentage => "PERCENTAGE",
            Self::Fixed => "FIXED",
            Self::Freeship => "FREESHIP",
        }
    }
}

// =============================================================================
// VoucherCode
// =============================================================================

/// Regex pattern for `VoucherCode`
static VOUCHER_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]{3,20}$").expect("Invalid voucher code regex pattern"));

/// A type representing the customer-facing voucher code
///
/// Uppercase alphanumeric, 3 to 20 characters.
///
/// # Examples
///
/// ```
/// use delivery_checkout_sample::simple_types::VoucherCode;
///
/// let code = VoucherCode::create("VoucherCode", "FREESHIP50").unwrap();
/// assert_eq!(code.value(), "FREESHIP50");
///
/// // Lowercase causes an error
/// assert!(VoucherCode::create("VoucherCode", "freeship50").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VoucherCode(String);

impl VoucherCode {
    /// Creates a `VoucherCode` from a string
    ///
    /// # Arguments
    ///
    /// * `field_name` - Field name used in error messages
    /// * `value` - Input string
    ///
    /// # Returns
    ///
    /// * `Ok(VoucherCode)` - On successful validation
    /// * `Err(ValidationError)` - For an empty string or pattern mismatch
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the string is empty or does not match
    /// `^[A-Z0-9]{3,20}$`.
    pub fn create(field_name: &str, value: &str) -> Result<Self, ValidationError> {
        constrained_type::create_like(field_name, VoucherCode, &VOUCHER_CODE_PATTERN, value)
    }

    /// Returns a reference to the inner code string
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// DistanceKm
// =============================================================================

/// A decimal type representing a delivery distance in kilometers
///
/// Constrained to the range 0.00 to 100.00.
///
/// # Examples
///
/// ```
/// use delivery_checkout_sample::simple_types::DistanceKm;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let distance = DistanceKm::create(Decimal::from_str("3.4").unwrap()).unwrap();
/// assert_eq!(distance.value(), Decimal::from_str("3.4").unwrap());
///
/// // Out of range causes an error
/// assert!(DistanceKm::create(Decimal::from(-1)).is_err());
/// assert!(DistanceKm::create(Decimal::from(101)).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DistanceKm(Decimal);

impl DistanceKm {
    /// Field name for `DistanceKm`
    const FIELD_NAME: &'static str = "DistanceKm";

    /// Returns the minimum value of `DistanceKm`
    fn min_value() -> Decimal {
        Decimal::from_str("0.0").expect("Valid decimal literal")
    }

    /// Returns the maximum value of `DistanceKm`
    fn max_value() -> Decimal {
        Decimal::from_str("100.00").expect("Valid decimal literal")
    }

    /// Creates a `DistanceKm` from a decimal
    ///
    /// # Arguments
    ///
    /// * `value` - Input decimal
    ///
    /// # Returns
    ///
    /// * `Ok(DistanceKm)` - On successful validation
    /// * `Err(ValidationError)` - If out of range
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the value is less than 0.0 or greater
    /// than 100.00.
    pub fn create(value: Decimal) -> Result<Self, ValidationError> {
        constrained_type::create_decimal(
            Self::FIELD_NAME,
            DistanceKm,
            Self::min_value(),
            Self::max_value(),
            value,
        )
    }

    /// Creates a `DistanceKm` without validation
    ///
    /// Use only when the value is known to be valid.
    ///
    /// # Panics
    ///
    /// Panics when an out-of-range value is passed.
    #[must_use]
    pub fn unsafe_create(value: Decimal) -> Self {
        Self::create(value)
            .unwrap_or_else(|error| panic!("Not expecting DistanceKm to be out of bounds: {error}"))
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

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // DiscountType Tests
    // =========================================================================

    #[rstest]
    #[case("PERCENTAGE", DiscountType::Percentage)]
    #[case("FIXED", DiscountType::Fixed)]
    #[case("FREESHIP", DiscountType::Freeship)]
    fn test_discount_type_create_valid(#[case] input: &str, #[case] expected: DiscountType) {
        let result = DiscountType::create("DiscountType", input);

        assert!(result.is_ok());
        assert_eq!(result.unwrap(), expected);
    }

    #[rstest]
    #[case("BOGO")]
    #[case("freeship")]
    #[case("Freeship")]
    #[case("")]
    fn test_discount_type_create_invalid(#[case] input: &str) {
        let result = DiscountType::create("DiscountType", input);

        assert!(result.is_err());
        let error = result.unwrap_err();
        assert_eq!(error.field_name, "DiscountType");
        assert_eq!(
            error.message,
            "Must be one of 'PERCENTAGE', 'FIXED', 'FREESHIP'"
        );
    }

    #[rstest]
    fn test_discount_type_predicates() {
        assert!(DiscountType::Percentage.is_percentage());
        assert!(!DiscountType::Percentage.is_fixed());
        assert!(!DiscountType::Percentage.is_freeship());

        assert!(!DiscountType::Fixed.is_percentage());
        assert!(DiscountType::Fixed.is_fixed());
        assert!(!DiscountType::Fixed.is_freeship());

        assert!(!DiscountType::Freeship.is_percentage());
        assert!(!DiscountType::Freeship.is_fixed());
        assert!(DiscountType::Freeship.is_freeship());
    }

    #[rstest]
    #[case(DiscountType::Percentage, "PERCENTAGE")]
    #[case(DiscountType::Fixed, "FIXED")]
    #[case(DiscountType::Freeship, "FREESHIP")]
    fn test_discount_type_value(#[case] discount_type: DiscountType, #[case] expected: &str) {
        assert_eq!(discount_type.value(), expected);
    }

    #[rstest]
    fn test_discount_type_roundtrip() {
        for discount_type in [
            DiscountType::Percentage,
            DiscountType::Fixed,
            DiscountType::Freeship,
        ] {
            let recreated = DiscountType::create("DiscountType", discount_type.value()).unwrap();
            assert_eq!(recreated, discount_type);
        }
    }

    #[rstest]
    fn test_discount_type_copy() {
        let discount_type = DiscountType::Freeship;
        let copied = discount_type;

        assert_eq!(discount_type, copied);
    }

    // =========================================================================
    // VoucherCode Tests
    // =========================================================================

    #[rstest]
    #[case("FREESHIP50")]
    #[case("ABC")]
    #[case("SUMMER2024PROMO")]
    #[case("12345")]
    fn test_voucher_code_create_valid(#[case] input: &str) {
        let result = VoucherCode::create("VoucherCode", input);

        assert!(result.is_ok());
        assert_eq!(result.unwrap().value(), input);
    }

    #[rstest]
    fn test_voucher_code_create_empty() {
        let result = VoucherCode::create("VoucherCode", "");

        assert!(result.is_err());
        assert_eq!(result.unwrap_err().message, "Must not be empty");
    }

    #[rstest]
    #[case("freeship50")]
    #[case("AB")]
    #[case("TOOLONGTOOLONGTOOLONG")]
    #[case("FREE-SHIP")]
    #[case("FREE SHIP")]
    fn test_voucher_code_create_invalid(#[case] input: &str) {
        let result = VoucherCode::create("VoucherCode", input);

        assert!(result.is_err());
        let error = result.unwrap_err();
        assert_eq!(error.field_name, "VoucherCode");
        assert!(error.message.contains("must match the pattern"));
    }

    // =========================================================================
    // DistanceKm Tests
    // =========================================================================

    #[rstest]
    fn test_distance_km_create_valid() {
        let value = Decimal::from_str("3.4").unwrap();
        let result = DistanceKm::create(value);

        assert!(result.is_ok());
        assert_eq!(result.unwrap().value(), value);
    }

    #[rstest]
    fn test_distance_km_create_min() {
        let result = DistanceKm::create(Decimal::ZERO);

        assert!(result.is_ok());
    }

    #[rstest]
    fn test_distance_km_create_max() {
        let result = DistanceKm::create(Decimal::from(100));

        assert!(result.is_ok());
    }

    #[rstest]
    fn test_distance_km_create_below_min() {
        let result = DistanceKm::create(Decimal::from_str("-0.1").unwrap());

        assert!(result.is_err());
        let error = result.unwrap_err();
        assert_eq!(error.field_name, "DistanceKm");
        assert!(error.message.contains("Must not be less than"));
    }

    #[rstest]
    fn test_distance_km_create_above_max() {
        let result = DistanceKm::create(Decimal::from_str("100.01").unwrap());

        assert!(result.is_err());
        let error = result.unwrap_err();
        assert_eq!(error.field_name, "DistanceKm");
        assert!(error.message.contains("Must not be greater than"));
    }

    #[rstest]
    #[should_panic(expected = "Not expecting DistanceKm to be out of bounds")]
    fn test_distance_km_unsafe_create_panic() {
        let _distance = DistanceKm::unsafe_create(Decimal::from(101));
    }
}
