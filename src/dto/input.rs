//! Input DTOs
//!
//! Defines the DTO types used to deserialize API requests, and the
//! defensive-normalization boundary between raw backend data and the domain
//! types.
//!
//! The backend's voucher feed is permissive: the array may be missing or
//! `null`, and individual entries may lack fields or carry malformed values.
//! Normalization happens here so the domain types can stay strict: a missing
//! array becomes an empty list, missing numeric fields fall back to zero, and
//! entries that fail validation are dropped instead of failing the request.
//!
//! # Type List
//!
//! - [`VoucherDto`] - Voucher DTO
//! - [`DeliveryInfoDto`] - Delivery parameter DTO
//! - [`ShippingQuoteDto`] - Shipping-quote request DTO
//! - [`ProgressQueryDto`] - Order-progress request DTO

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::compound_types::{DeliveryInfo, Voucher};
use crate::simple_types::ValidationError;

// =============================================================================
// VoucherDto
// =============================================================================

/// Voucher DTO
///
/// Every field is optional: the backend feed may omit any of them. Entries
/// that do not survive validation are dropped by [`ShippingQuoteDto::normalized_vouchers`].
///
/// # Examples
///
/// ```
/// use delivery_checkout_sample::dto::VoucherDto;
///
/// let json = r#"{
///     "voucher_id": "vch-001",
///     "code": "FREESHIP50",
///     "discount_type": "FREESHIP",
///     "max_discount_amount": "50000"
/// }"#;
///
/// let dto: VoucherDto = serde_json::from_str(json).unwrap();
/// assert_eq!(dto.discount_type.as_deref(), Some("FREESHIP"));
/// assert!(dto.min_order_value.is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoucherDto {
    /// Voucher ID
    #[serde(default)]
    pub voucher_id: Option<String>,
    /// Customer-facing voucher code
    #[serde(default)]
    pub code: Option<String>,
    /// Discount kind ("PERCENTAGE", "FIXED", "FREESHIP")
    #[serde(default)]
    pub discount_type: Option<String>,
    /// Discount cap (string format); absent means uncapped
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub max_discount_amount: Option<Decimal>,
    /// Minimum-order threshold (string format); absent means no threshold
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub min_order_value: Option<Decimal>,
}

impl VoucherDto {
    /// Converts to a domain [`Voucher`], dropping the entry on failure
    ///
    /// Missing string fields are fed to validation as empty strings, so an
    /// entry without an ID, code, or discount kind does not survive.
    ///
    /// # Returns
    ///
    /// `Some(Voucher)` when every field validates, `None` otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use delivery_checkout_sample::dto::VoucherDto;
    ///
    /// let dto = VoucherDto {
    ///     voucher_id: Some("vch-001".to_string()),
    ///     code: Some("FREESHIP50".to_string()),
    ///     discount_type: Some("FREESHIP".to_string()),
    ///     max_discount_amount: None,
    ///     min_order_value: None,
    /// };
    /// assert!(dto.to_voucher().is_some());
    ///
    /// let malformed = VoucherDto::default();
    /// assert!(malformed.to_voucher().is_none());
    /// ```
    #[must_use]
    pub fn to_voucher(&self) -> Option<Voucher> {
        Voucher::create(
            self.voucher_id.as_deref().unwrap_or_default(),
            self.code.as_deref().unwrap_or_default(),
            self.discount_type.as_deref().unwrap_or_default(),
            self.max_discount_amount,
            self.min_order_value,
        )
        .ok()
    }
}

// =============================================================================
// DeliveryInfoDto
// =============================================================================

/// Delivery parameter DTO
///
/// Missing numeric fields fall back to zero rather than failing the request.
///
/// # Examples
///
/// ```
/// use delivery_checkout_sample::dto::DeliveryInfoDto;
/// use rust_decimal::Decimal;
///
/// let json = r#"{ "base_fee": "30000", "distance": "3.4" }"#;
/// let dto: DeliveryInfoDto = serde_json::from_str(json).unwrap();
/// assert_eq!(dto.base_fee, Decimal::from(30000));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryInfoDto {
    /// Undiscounted delivery charge (string format); missing means 0
    #[serde(default, with = "rust_decimal::serde::str")]
    pub base_fee: Decimal,
    /// Delivery distance in kilometers (string format); missing means 0
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub distance: Option<Decimal>,
}

impl DeliveryInfoDto {
    /// Converts to a domain [`DeliveryInfo`]
    ///
    /// A missing distance is normalized to zero. Out-of-range values are
    /// reported as validation errors rather than silently clamped.
    ///
    /// # Returns
    ///
    /// * `Ok(DeliveryInfo)` - On successful validation
    /// * `Err(ValidationError)` - When a field is out of range
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when a field is out of range.
    pub fn to_delivery_info(&self) -> Result<DeliveryInfo, ValidationError> {
        DeliveryInfo::create(self.base_fee, self.distance.unwrap_or_default())
    }
}

// =============================================================================
// ShippingQuoteDto
// =============================================================================

/// Shipping-quote request DTO
///
/// # Examples
///
/// ```
/// use delivery_checkout_sample::dto::ShippingQuoteDto;
///
/// let json = r#"{
///     "delivery_info": { "base_fee": "30000" },
///     "vouchers": null
/// }"#;
///
/// let dto: ShippingQuoteDto = serde_json::from_str(json).unwrap();
/// assert!(dto.normalized_vouchers().is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingQuoteDto {
    /// Delivery parameters; missing means zero fee and distance
    #[serde(default)]
    pub delivery_info: DeliveryInfoDto,
    /// Available vouchers; missing or `null` means none
    #[serde(default)]
    pub vouchers: Option<Vec<VoucherDto>>,
}

impl ShippingQuoteDto {
    /// Normalizes the voucher list into domain [`Voucher`]s
    ///
    /// A missing or `null` array becomes an empty list; malformed entries are
    /// dropped. Relative order of the surviving entries is preserved, which
    /// the resolver's tie-break depends on.
    #[must_use]
    pub fn normalized_vouchers(&self) -> Vec<Voucher> {
        self.vouchers
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter_map(VoucherDto::to_voucher)
            .collect()
    }
}

// =============================================================================
// ProgressQueryDto
// =============================================================================

/// Order-progress request DTO
///
/// # Examples
///
/// ```
/// use delivery_checkout_sample::dto::ProgressQueryDto;
///
/// let json = r#"{ "order_id": "ORD-2024-001", "status": "PREPARING" }"#;
/// let dto: ProgressQueryDto = serde_json::from_str(json).unwrap();
/// assert_eq!(dto.status.as_deref(), Some("PREPARING"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressQueryDto {
    /// Order ID; validated when present, omitted from the response otherwise
    #[serde(default)]
    pub order_id: Option<String>,
    /// Raw backend status; missing is treated like an unrecognized status
    #[serde(default)]
    pub status: Option<String>,
}

// =============================================================================
// Tests
// =============================================================================
