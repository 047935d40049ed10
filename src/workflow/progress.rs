//! Order progress projection
//!
//! Maps a raw backend order-status string onto the fixed delivery-progress
//! sequence.
//!
//! # Function List
//!
//! - [`active_step_for`] - Resolves a status string to its sequence step
//! - [`project_status`] - Main projection function
//!
//! # Examples
//!
//! ```
//! use delivery_checkout_sample::workflow::project_status;
//!
//! let projection = project_status("PREPARING");
//! assert_eq!(projection.active_index(), 2);
//! assert!(projection.steps()[0].is_completed());
//! assert!(projection.steps()[2].is_active());
//! ```

use crate::workflow::progress_types::{OrderStatusProjection, ProgressStep};

// =============================================================================
// Constant definitions
// =============================================================================

/// Driver-at-the-door sub-state reported by the backend
///
/// Has no dedicated visual step and renders as the pickup phase.
const ARRIVED_STATUS: &str = "ARRIVED";

/// Cancelled status reported by the backend
///
/// Shows no delivery progress; callers layer their own cancelled banner on
/// top rather than relying on the projected position.
const CANCELLED_STATUS: &str = "CANCELLED";

// =============================================================================
// active_step_for
// =============================================================================

/// Resolves a backend status string to its step in the progress sequence
///
/// # Matching rules, in order of precedence
///
/// 1. An exact sequence entry maps to itself.
/// 2. `"ARRIVED"` maps to the pickup step.
/// 3. `"CANCELLED"` maps to the first step.
/// 4. Anything else degrades to the first step.
///
/// # Examples
///
/// ```
/// use delivery_checkout_sample::workflow::{ProgressStep, active_step_for};
///
/// assert_eq!(active_step_for("READY"), ProgressStep::Ready);
/// assert_eq!(active_step_for("ARRIVED"), ProgressStep::PickedUp);
/// assert_eq!(active_step_for("CANCELLED"), ProgressStep::Pending);
/// assert_eq!(active_step_for("totally-unknown-value"), ProgressStep::Pending);
/// ```
#[must_use]
#[allow(clippy::match_same_arms)] // cancelled orders deliberately share the unknown-status fallback
pub fn active_step_for(status: &str) -> ProgressStep {
    if let Some(step) = ProgressStep::from_status(status) {
        return step;
    }

    match status {
        ARRIVED_STATUS => ProgressStep::PickedUp,
        CANCELLED_STATUS => ProgressStep::Pending,
        _ => ProgressStep::Pending,
    }
}

// =============================================================================
// project_status
// =============================================================================

/// Projects a backend order status onto the delivery-progress sequence
///
/// Total over arbitrary input: unrecognized statuses degrade to the first
/// step rather than failing, so a wrong guess never breaks the render path.
/// Callers that need to distinguish "unknown status" from "genuinely pending"
/// must inspect the raw string themselves.
///
/// # Arguments
///
/// * `status` - Raw status string as reported by the backend
///
/// # Returns
///
/// An [`OrderStatusProjection`] with the active index and every step
/// classified as completed, active, or upcoming
///
/// # Examples
///
/// ```
/// use delivery_checkout_sample::workflow::project_status;
///
/// // The driver-arrived sub-state renders as the pickup phase
/// let projection = project_status("ARRIVED");
/// assert_eq!(projection.active_index(), 4);
///
/// // Unknown statuses degrade gracefully
/// let projection = project_status("totally-unknown-value");
/// assert_eq!(projection.active_index(), 0);
/// ```
#[must_use]
pub fn project_status(status: &str) -> OrderStatusProjection {
    OrderStatusProjection::new(active_step_for(status))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // active_step_for tests
    // =========================================================================

    #[rstest]
    #[case("PENDING", ProgressStep::Pending)]
    #[case("PLACED", ProgressStep::Placed)]
    #[case("PREPARING", ProgressStep::Preparing)]
    #[case("READY", ProgressStep::Ready)]
    #[case("PICKED_UP", ProgressStep::PickedUp)]
    #[case("DELIVERED", ProgressStep::Delivered)]
    fn test_exact_sequence_statuses(#[case] status: &str, #[case] expected: ProgressStep) {
        assert_eq!(active_step_for(status), expected);
    }

    #[rstest]
    fn test_arrived_maps_to_pickup() {
        assert_eq!(active_step_for("ARRIVED"), ProgressStep::PickedUp);
    }

    #[rstest]
    fn test_cancelled_maps_to_first_step() {
        assert_eq!(active_step_for("CANCELLED"), ProgressStep::Pending);
    }

    #[rstest]
    #[case("totally-unknown-value")]
    #[case("pending")]
    #[case("Picked_Up")]
    #[case("")]
    #[case(" PENDING ")]
    fn test_unknown_statuses_degrade_to_first_step(#[case] status: &str) {
        assert_eq!(active_step_for(status), ProgressStep::Pending);
    }

    // =========================================================================
    // project_status tests
    // =========================================================================

    #[rstest]
    fn test_preparing_projection() {
        let projection = project_status("PREPARING");

        assert_eq!(projection.active_index(), 2);
        assert!(projection.steps()[0].is_completed());
        assert!(projection.steps()[1].is_completed());
        assert!(projection.steps()[2].is_active());
        assert!(projection.steps()[3].is_upcoming());
        assert!(projection.steps()[4].is_upcoming());
        assert!(projection.steps()[5].is_upcoming());
    }

    #[rstest]
    fn test_arrived_equals_picked_up() {
        let arrived = project_status("ARRIVED");
        let picked_up = project_status("PICKED_UP");

        assert_eq!(arrived.active_index(), picked_up.active_index());
        assert_eq!(arrived.active_index(), 4);
    }

    #[rstest]
    #[case("CANCELLED")]
    #[case("totally-unknown-value")]
    fn test_cancelled_and_unknown_show_no_progress(#[case] status: &str) {
        let projection = project_status(status);

        assert_eq!(projection.active_index(), 0);
        assert!(projection.steps()[0].is_active());
        for step in &projection.steps()[1..] {
            assert!(step.is_upcoming());
        }
    }

    #[rstest]
    fn test_delivered_completes_everything_before() {
        let projection = project_status("DELIVERED");

        assert_eq!(projection.active_index(), 5);
        for step in &projection.steps()[..5] {
            assert!(step.is_completed());
        }
        assert!(projection.steps()[5].is_active());
    }

    #[rstest]
    fn test_projection_is_pure() {
        let first = project_status("READY");
        let second = project_status("READY");

        assert_eq!(first, second);
    }

    #[rstest]
    fn test_active_index_always_in_range() {
        for status in [
            "PENDING",
            "PLACED",
            "PREPARING",
            "READY",
            "PICKED_UP",
            "DELIVERED",
            "ARRIVED",
            "CANCELLED",
            "garbage",
            "",
        ] {
            let projection = project_status(status);
            assert!(projection.active_index() <= 5);
        }
    }
}
