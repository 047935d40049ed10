//! Validation error type definition

use thiserror::Error;

/// Struct representing a validation error
///
/// Used commonly by all constrained types.
/// Holds a field name and error message.
///
/// # Examples
///
/// ```
/// use delivery_checkout_sample::simple_types::ValidationError;
///
/// let error = ValidationError::new("VoucherId", "Must not be empty");
/// assert_eq!(error.field_name, "VoucherId");
/// assert_eq!(error.message, "Must not be empty");
/// assert_eq!(error.to_string(), "VoucherId: Must not be empty");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{field_name}: {message}")]
pub struct ValidationError {
    /// Name of the field where the error occurred
    pub field_name: String,
    /// Error message
    pub message: String,
}

impl ValidationError {
    /// Creates a new `ValidationError`
    ///
    /// # Arguments
    ///
    /// * `field_name` - Name of the field where the error occurred
    /// * `message` - error message
    ///
    /// # Returns
    ///
    /// A new `ValidationError` instance
    #[must_use]
    pub fn new(field_name: &str, message: &str) -> Self {
        Self {
            field_name: field_name.to_string(),
            message: message.to_string(),
        }
    }
}
