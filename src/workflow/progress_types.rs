//! Order progress types
//!
//! Defines the fixed delivery-progress sequence and the projection result.
//!
//! # Type List
//!
//! - [`ProgressStep`] - One step of the fixed six-step sequence
//! - [`ProjectedStep`] - A step classified relative to the active position
//! - [`OrderStatusProjection`] - The full projection of a backend status

// =============================================================================
// ProgressStep
// =============================================================================

/// One step of the customer-facing delivery-progress sequence
///
/// The sequence is fixed at six steps; its order and terminal semantics are
/// owned by the backend order lifecycle, not by this crate.
///
/// # Examples
///
/// ```
/// use delivery_checkout_sample::workflow::ProgressStep;
///
/// assert_eq!(ProgressStep::Preparing.index(), 2);
/// assert_eq!(ProgressStep::Preparing.value(), "PREPARING");
/// assert_eq!(ProgressStep::from_status("PREPARING"), Some(ProgressStep::Preparing));
/// assert_eq!(ProgressStep::from_status("ARRIVED"), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProgressStep {
    /// Order received, awaiting confirmation
    Pending,
    /// Order confirmed by the restaurant
    Placed,
    /// Food being prepared
    Preparing,
    /// Food ready for pickup by the driver
    Ready,
    /// Driver picked the order up
    PickedUp,
    /// Order delivered to the customer
    Delivered,
}

impl ProgressStep {
    /// The fixed progress sequence, in display order
    pub const SEQUENCE: [Self; 6] = [
        Self::Pending,
        Self::Placed,
        Self::Preparing,
        Self::Ready,
        Self::PickedUp,
        Self::Delivered,
    ];

    /// Returns this step's position in the sequence (0 to 5)
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Pending => 0,
            Self::Placed => 1,
            Self::Preparing => 2,
            Self::Ready => 3,
            Self::PickedUp => 4,
            Self::Delivered => 5,
        }
    }

    /// Returns the step as the backend's wire string
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Placed => "PLACED",
            Self::Preparing => "PREPARING",
            Self::Ready => "READY",
            Self::PickedUp => "PICKED_UP",
            Self::Delivered => "DELIVERED",
        }
    }

    /// Parses a backend status string into a sequence step
    ///
    /// Exact matches only; aliases and unknown statuses return `None` and are
    /// handled by [`project_status`](crate::workflow::project_status).
    #[must_use]
    pub fn from_status(status: &str) -> Option<Self> {
        match status {
            "PENDING" => Some(Self::Pending),
            "PLACED" => Some(Self::Placed),
            "PREPARING" => Some(Self::Preparing),
            "READY" => Some(Self::Ready),
            "PICKED_UP" => Some(Self::PickedUp),
            "DELIVERED" => Some(Self::Delivered),
            _ => None,
        }
    }

    /// Returns whether this is the `Pending` variant
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns whether this is the `Delivered` variant
    #[must_use]
    pub const fn is_delivered(self) -> bool {
        matches!(self, Self::Delivered)
    }
}

// =============================================================================
// ProjectedStep
// =============================================================================

/// A sequence step classified relative to the active position
///
/// Exactly one of `is_completed`/`is_active` can be true; a step that is
/// neither is upcoming.
///
/// # Examples
///
/// ```
/// use delivery_checkout_sample::workflow::{ProgressStep, ProjectedStep};
///
/// let step = ProjectedStep::new(ProgressStep::Placed, true, false);
/// assert!(step.is_completed());
/// assert!(!step.is_active());
/// assert!(!step.is_upcoming());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectedStep {
    step: ProgressStep,
    is_completed: bool,
    is_active: bool,
}

impl ProjectedStep {
    /// Creates a new `ProjectedStep`
    #[must_use]
    pub const fn new(step: ProgressStep, is_completed: bool, is_active: bool) -> Self {
        Self {
            step,
            is_completed,
            is_active,
        }
    }

    /// Returns the underlying sequence step
    #[must_use]
    pub const fn step(&self) -> ProgressStep {
        self.step
    }

    /// Returns whether the step lies before the active position
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Returns whether the step is the active position
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns whether the step lies after the active position
    #[must_use]
    pub const fn is_upcoming(&self) -> bool {
        !self.is_completed && !self.is_active
    }
}

// =============================================================================
// OrderStatusProjection
// =============================================================================

/// Projection of a backend order status onto the progress sequence
///
/// Recomputed from scratch for every status input; no state is retained
/// between calls.
///
/// # Invariants
///
/// - `active_index` is always 0 to 5
/// - steps before the active index are completed, the active index is active,
///   the rest are upcoming
///
/// # Examples
///
/// ```
/// use delivery_checkout_sample::workflow::{OrderStatusProjection, ProgressStep};
///
/// let projection = OrderStatusProjection::new(ProgressStep::Preparing);
/// assert_eq!(projection.active_index(), 2);
/// assert!(projection.steps()[0].is_completed());
/// assert!(projection.steps()[2].is_active());
/// assert!(projection.steps()[5].is_upcoming());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderStatusProjection {
    active_index: usize,
    steps: [ProjectedStep; 6],
}

impl OrderStatusProjection {
    /// Creates the projection for a given active step
    ///
    /// Every sequence step is classified against the active step's position.
    #[must_use]
    pub fn new(active_step: ProgressStep) -> Self {
        let active_index = active_step.index();
        let steps = ProgressStep::SEQUENCE.map(|step| {
            ProjectedStep::new(
                step,
                step.index() < active_index,
                step.index() == active_index,
            )
        });

        Self {
            active_index,
            steps,
        }
    }

    /// Returns the active position in the sequence (0 to 5)
    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.active_index
    }

    /// Returns the classified steps, in display order
    #[must_use]
    pub const fn steps(&self) -> &[ProjectedStep; 6] {
        &self.steps
    }

    /// Returns the active step
    #[must_use]
    pub const fn active_step(&self) -> ProgressStep {
        self.steps[self.active_index].step()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    mod progress_step_tests {
        use super::*;

        #[rstest]
        #[case(ProgressStep::Pending, 0, "PENDING")]
        #[case(ProgressStep::Placed, 1, "PLACED")]
        #[case(ProgressStep::Preparing, 2, "PREPARING")]
        #[case(ProgressStep::Ready, 3, "READY")]
        #[case(ProgressStep::PickedUp, 4, "PICKED_UP")]
        #[case(ProgressStep::Delivered, 5, "DELIVERED")]
        fn test_index_and_value(
            #[case] step: ProgressStep,
            #[case] expected_index: usize,
            #[case] expected_value: &str,
        ) {
            assert_eq!(step.index(), expected_index);
            assert_eq!(step.value(), expected_value);
        }

        #[rstest]
        fn test_sequence_order_matches_index() {
            for (position, step) in ProgressStep::SEQUENCE.iter().enumerate() {
                assert_eq!(step.index(), position);
            }
        }

        #[rstest]
        fn test_from_status_roundtrip() {
            for step in ProgressStep::SEQUENCE {
                assert_eq!(ProgressStep::from_status(step.value()), Some(step));
            }
        }

        #[rstest]
        #[case("ARRIVED")]
        #[case("CANCELLED")]
        #[case("picked_up")]
        #[case("")]
        fn test_from_status_rejects_non_sequence_strings(#[case] status: &str) {
            assert_eq!(ProgressStep::from_status(status), None);
        }

        #[rstest]
        fn test_predicates() {
            assert!(ProgressStep::Pending.is_pending());
            assert!(!ProgressStep::Pending.is_delivered());
            assert!(ProgressStep::Delivered.is_delivered());
            assert!(!ProgressStep::Delivered.is_pending());
        }
    }

    mod projected_step_tests {
        use super::*;

        #[rstest]
        fn test_completed_step() {
            let step = ProjectedStep::new(ProgressStep::Placed, true, false);

            assert!(step.is_completed());
            assert!(!step.is_active());
            assert!(!step.is_upcoming());
        }

        #[rstest]
        fn test_active_step() {
            let step = ProjectedStep::new(ProgressStep::Preparing, false, true);

            assert!(!step.is_completed());
            assert!(step.is_active());
            assert!(!step.is_upcoming());
        }

        #[rstest]
        fn test_upcoming_step() {
            let step = ProjectedStep::new(ProgressStep::Delivered, false, false);

            assert!(!step.is_completed());
            assert!(!step.is_active());
            assert!(step.is_upcoming());
        }
    }

    mod order_status_projection_tests {
        use super::*;

        #[rstest]
        fn test_projection_classifies_all_steps() {
            let projection = OrderStatusProjection::new(ProgressStep::Ready);

            assert_eq!(projection.active_index(), 3);
            for step in &projection.steps()[..3] {
                assert!(step.is_completed());
            }
            assert!(projection.steps()[3].is_active());
            for step in &projection.steps()[4..] {
                assert!(step.is_upcoming());
            }
        }

        #[rstest]
        fn test_projection_first_step_active() {
            let projection = OrderStatusProjection::new(ProgressStep::Pending);

            assert_eq!(projection.active_index(), 0);
            assert!(projection.steps()[0].is_active());
            for step in &projection.steps()[1..] {
                assert!(step.is_upcoming());
            }
        }

        #[rstest]
        fn test_projection_last_step_active() {
            let projection = OrderStatusProjection::new(ProgressStep::Delivered);

            assert_eq!(projection.active_index(), 5);
            for step in &projection.steps()[..5] {
                assert!(step.is_completed());
            }
            assert!(projection.steps()[5].is_active());
        }

        #[rstest]
        fn test_active_step_getter() {
            let projection = OrderStatusProjection::new(ProgressStep::PickedUp);

            assert_eq!(projection.active_step(), ProgressStep::PickedUp);
        }

        #[rstest]
        fn test_exactly_one_active_step() {
            for step in ProgressStep::SEQUENCE {
                let projection = OrderStatusProjection::new(step);
                let active_count = projection
                    .steps()
                    .iter()
                    .filter(|projected| projected.is_active())
                    .count();

                assert_eq!(active_count, 1);
            }
        }
    }
}
