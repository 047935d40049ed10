//! Error DTOs
//!
//! Defines types for serializing API response errors.

use serde::{Deserialize, Serialize};

use crate::simple_types::ValidationError;

// =============================================================================
// QuoteErrorDto
// =============================================================================

/// Checkout API error DTO
///
/// Discriminated by the `type` field.
///
/// # Examples
///
/// ```
/// use delivery_checkout_sample::dto::QuoteErrorDto;
/// use delivery_checkout_sample::simple_types::ValidationError;
///
/// let error = ValidationError::new("FeeAmount", "Must not be less than 0.0");
/// let dto = QuoteErrorDto::from_domain(&error);
///
/// match dto {
///     QuoteErrorDto::Validation { field_name, .. } => {
///         assert_eq!(field_name, "FeeAmount");
///     }
///     QuoteErrorDto::JsonParse { .. } => panic!("Expected Validation error"),
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum QuoteErrorDto {
    /// Validation error
    Validation {
        /// Field name
        field_name: String,
        /// Error message
        message: String,
    },
    /// Request body could not be parsed as JSON
    JsonParse {
        /// Error message
        message: String,
    },
}

impl QuoteErrorDto {
    /// Creates a `QuoteErrorDto` from the domain `ValidationError`
    ///
    /// # Arguments
    ///
    /// * `error` - Source `ValidationError`
    #[must_use]
    pub fn from_domain(error: &ValidationError) -> Self {
        Self::Validation {
            field_name: error.field_name.clone(),
            message: error.message.clone(),
        }
    }

    /// Creates a `QuoteErrorDto` from a JSON parse error
    ///
    /// # Arguments
    ///
    /// * `error` - Source `serde_json` error
    #[must_use]
    pub fn from_json_error(error: &serde_json::Error) -> Self {
        Self::JsonParse {
            message: error.to_string(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
