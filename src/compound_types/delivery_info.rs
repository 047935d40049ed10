//! Compound type representing delivery parameters

use rust_decimal::Decimal;

use crate::simple_types::{DistanceKm, FeeAmount, ValidationError};

/// Delivery parameters computed server-side for a restaurant/customer pair
///
/// Holds the undiscounted delivery charge and the delivery distance. The
/// distance is informational for this crate: the base fee already reflects
/// it, and the fee resolver works from the fee alone.
///
/// # Examples
///
/// ```
/// use delivery_checkout_sample::compound_types::DeliveryInfo;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let info = DeliveryInfo::create(
///     Decimal::from(30000),
///     Decimal::from_str("3.4").unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(info.base_fee().value(), Decimal::from(30000));
/// assert_eq!(info.distance().value(), Decimal::from_str("3.4").unwrap());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeliveryInfo {
    base_fee: FeeAmount,
    distance: DistanceKm,
}

impl DeliveryInfo {
    /// Creates a `DeliveryInfo` from raw decimals
    ///
    /// # Arguments
    ///
    /// * `base_fee` - Undiscounted delivery charge
    /// * `distance` - Delivery distance in kilometers
    ///
    /// # Returns
    ///
    /// * `Ok(DeliveryInfo)` - On successful validation
    /// * `Err(ValidationError)` - When either field is out of range
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when either field is out of range.
    pub fn create(base_fee: Decimal, distance: Decimal) -> Result<Self, ValidationError> {
        let base_fee = FeeAmount::create(base_fee)?;
        let distance = DistanceKm::create(distance)?;

        Ok(Self { base_fee, distance })
    }

    /// Creates a `DeliveryInfo` from already-validated components
    #[must_use]
    pub const fn new(base_fee: FeeAmount, distance: DistanceKm) -> Self {
        Self { base_fee, distance }
    }

    /// Returns the undiscounted delivery charge
    #[must_use]
    pub const fn base_fee(&self) -> FeeAmount {
        self.base_fee
    }

    /// Returns the delivery distance
    #[must_use]
    pub const fn distance(&self) -> DistanceKm {
        self.distance
    }
}

// =============================================================================
// Tests
// =============================================================================
