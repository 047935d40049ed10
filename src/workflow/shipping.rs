//! Shipping-fee resolution
//!
//! Selects the most advantageous free-shipping voucher from a candidate list
//! and computes the resulting delivery fee.
//!
//! # Function List
//!
//! - [`select_best_freeship`] - Picks the free-shipping voucher with the highest cap
//! - [`max_shipping_discount`] - Computes the discount a voucher grants against a base fee
//! - [`resolve_shipping`] - Main resolution function
//!
//! # Examples
//!
//! ```
//! use delivery_checkout_sample::compound_types::Voucher;
//! use delivery_checkout_sample::simple_types::FeeAmount;
//! use delivery_checkout_sample::workflow::resolve_shipping;
//! use rust_decimal::Decimal;
//!
//! let base_fee = FeeAmount::create(Decimal::from(30000)).unwrap();
//! let vouchers = vec![
//!     Voucher::create("vch-001", "SHIP20K", "FREESHIP", Some(Decimal::from(20000)), None)
//!         .unwrap(),
//! ];
//!
//! let resolution = resolve_shipping(base_fee, &vouchers);
//! assert!(resolution.has_freeship());
//! assert_eq!(resolution.final_fee().value(), Decimal::from(10000));
//! ```

use rust_decimal::Decimal;

use crate::compound_types::Voucher;
use crate::simple_types::{FeeAmount, OrderAmount};
use crate::workflow::shipping_types::ShippingResolution;

// =============================================================================
// select_best_freeship
// =============================================================================

/// Picks the free-shipping voucher with the highest discount cap
///
/// Non-freeship vouchers are ignored. An absent cap is treated as positive
/// infinity, so an uncapped voucher always beats a capped one. When two
/// candidates tie (equal caps, or both uncapped), the first one encountered
/// wins; the ordering of the input list is owned by the backend, so the
/// tie-break is implementation-defined rather than a business rule.
///
/// # Arguments
///
/// * `vouchers` - Candidate vouchers, in backend order
///
/// # Returns
///
/// The winning voucher, or `None` when no free-shipping voucher exists
///
/// # Examples
///
/// ```
/// use delivery_checkout_sample::compound_types::Voucher;
/// use delivery_checkout_sample::workflow::select_best_freeship;
/// use rust_decimal::Decimal;
///
/// let vouchers = vec![
///     Voucher::create("vch-001", "SHIP20K", "FREESHIP", Some(Decimal::from(20000)), None)
///         .unwrap(),
///     Voucher::create("vch-002", "SHIP50K", "FREESHIP", Some(Decimal::from(50000)), None)
///         .unwrap(),
/// ];
///
/// let best = select_best_freeship(&vouchers).unwrap();
/// assert_eq!(best.code().value(), "SHIP50K");
/// ```
#[must_use]
pub fn select_best_freeship(vouchers: &[Voucher]) -> Option<&Voucher> {
    vouchers
        .iter()
        .filter(|voucher| voucher.discount_type().is_freeship())
        .fold(None, |best, candidate| match best {
            None => Some(candidate),
            Some(current) => {
                if outranks(candidate, current) {
                    Some(candidate)
                } else {
                    Some(current)
                }
            }
        })
}

/// Whether `candidate` carries a strictly better cap than `current`
///
/// Strict comparison keeps the earlier candidate on ties.
fn outranks(candidate: &Voucher, current: &Voucher) -> bool {
    match (candidate.max_discount_amount(), current.max_discount_amount()) {
        (None, Some(_)) => true,
        (None | Some(_), None) => false,
        (Some(candidate_cap), Some(current_cap)) => candidate_cap.value() > current_cap.value(),
    }
}

// =============================================================================
// max_shipping_discount
// =============================================================================

/// Computes the discount a free-shipping voucher grants against a base fee
///
/// A capped voucher covers at most its cap; an uncapped voucher covers the
/// whole fee. The result never exceeds the base fee.
///
/// # Arguments
///
/// * `base_fee` - Undiscounted delivery charge
/// * `voucher` - The selected free-shipping voucher
///
/// # Examples
///
/// ```
/// use delivery_checkout_sample::compound_types::Voucher;
/// use delivery_checkout_sample::simple_types::FeeAmount;
/// use delivery_checkout_sample::workflow::max_shipping_discount;
/// use rust_decimal::Decimal;
///
/// let base_fee = FeeAmount::create(Decimal::from(30000)).unwrap();
/// let capped =
///     Voucher::create("vch-001", "SHIP20K", "FREESHIP", Some(Decimal::from(20000)), None)
///         .unwrap();
/// let uncapped = Voucher::create("vch-002", "SHIPFREE", "FREESHIP", None, None).unwrap();
///
/// assert_eq!(max_shipping_discount(&base_fee, &capped).value(), Decimal::from(20000));
/// assert_eq!(max_shipping_discount(&base_fee, &uncapped).value(), Decimal::from(30000));
/// ```
#[must_use]
pub fn max_shipping_discount(base_fee: &FeeAmount, voucher: &Voucher) -> FeeAmount {
    voucher
        .max_discount_amount()
        .map_or(*base_fee, |cap| base_fee.min(cap))
}

// =============================================================================
// resolve_shipping
// =============================================================================

/// Resolves the delivery fee against the available vouchers
///
/// # Resolution
///
/// 1. Only free-shipping vouchers participate; with none present the fee
///    stays at the base fee.
/// 2. The voucher with the highest cap wins (absent cap counts as infinite).
/// 3. The discount is `min(base_fee, cap)` for a capped voucher and the full
///    base fee for an uncapped one.
/// 4. The payable fee is the base fee minus the discount, clamped at zero.
/// 5. The winning voucher's minimum-order threshold is reported as-is;
///    checking it against the order subtotal is the caller's concern.
///
/// # Arguments
///
/// * `base_fee` - Undiscounted delivery charge
/// * `vouchers` - Candidate vouchers; an empty slice is a valid input
///
/// # Returns
///
/// A [`ShippingResolution`] with `final_fee <= base_fee`
///
/// # Examples
///
/// ```
/// use delivery_checkout_sample::compound_types::Voucher;
/// use delivery_checkout_sample::simple_types::FeeAmount;
/// use delivery_checkout_sample::workflow::resolve_shipping;
/// use rust_decimal::Decimal;
///
/// let base_fee = FeeAmount::create(Decimal::from(30000)).unwrap();
///
/// // No vouchers: the fee is unchanged
/// let resolution = resolve_shipping(base_fee, &[]);
/// assert!(!resolution.has_freeship());
/// assert_eq!(resolution.final_fee(), base_fee);
///
/// // An uncapped free-shipping voucher zeroes the fee
/// let vouchers = vec![Voucher::create("vch-001", "SHIPFREE", "FREESHIP", None, None).unwrap()];
/// let resolution = resolve_shipping(base_fee, &vouchers);
/// assert_eq!(resolution.final_fee().value(), Decimal::ZERO);
/// assert_eq!(resolution.max_shipping_discount(), base_fee);
/// ```
#[must_use]
pub fn resolve_shipping(base_fee: FeeAmount, vouchers: &[Voucher]) -> ShippingResolution {
    let Some(best) = select_best_freeship(vouchers) else {
        return ShippingResolution::without_freeship(base_fee);
    };

    let discount = max_shipping_discount(&base_fee, best);
    let final_fee = base_fee.saturating_sub(discount);
    let min_order_for_discount = best
        .min_order_value()
        .unwrap_or_else(|| OrderAmount::unsafe_create(Decimal::ZERO));

    ShippingResolution::new(base_fee, final_fee, discount, min_order_for_discount, true)
}

// =============================================================================
// Tests
// =============================================================================
