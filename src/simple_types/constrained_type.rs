//! Helper functions for generating constrained types
//!
//! Each function is generic and can be used with any newtype.

use regex::Regex;
use rust_decimal::Decimal;

use super::error::ValidationError;

/// Creates a string type with a maximum length constraint
///
/// # Arguments
///
/// * `field_name` - Field name used in error messages
/// * `constructor` - Constructor that takes a string and produces type T
/// * `max_length` - Maximum character count
/// * `value` - Input string
///
/// # Returns
///
/// * `Ok(T)` - On successful validation
/// * `Err(ValidationError)` - For an empty string or exceeding maximum length
///
/// # Errors
///
/// Returns [`ValidationError`] in the following cases:
/// - When the input is an empty string
/// - When the input exceeds the maximum length
///
/// # Examples
///
/// ```
/// use delivery_checkout_sample::simple_types::ValidationError;
///
/// #[derive(Debug, PartialEq)]
/// struct Label(String);
///
/// fn create_label(value: &str) -> Result<Label, ValidationError> {
///     delivery_checkout_sample::simple_types::constrained_type::create_string(
///         "Label",
///         Label,
///         50,
///         value,
///     )
/// }
///
/// assert!(create_label("Lunch deal").is_ok());
/// assert!(create_label("").is_err());
/// ```
pub fn create_string<T, F>(
    field_name: &str,
    constructor: F,
    max_length: usize,
    value: &str,
) -> Result<T, ValidationError>
where
    F: FnOnce(String) -> T,
{
    if value.is_empty() {
        Err(ValidationError::new(field_name, "Must not be empty"))
    } else if value.len() > max_length {
        Err(ValidationError::new(
            field_name,
            &format!("Must not be more than {max_length} chars"),
        ))
    } else {
        Ok(constructor(value.to_string()))
    }
}

/// Creates a decimal type with range constraints
///
/// # Arguments
///
/// * `field_name` - Field name used in error messages
/// * `constructor` - Constructor that takes a decimal and produces type T
/// * `min_value` - Minimum value
/// * `max_value` - Maximum value
/// * `value` - Input decimal
///
/// # Returns
///
/// * `Ok(T)` - On successful validation
/// * `Err(ValidationError)` - If out of range
///
/// # Errors
///
/// Returns [`ValidationError`] in the following cases:
/// - When the input is less than the minimum value
/// - When the input exceeds the maximum value
pub fn create_decimal<T, F>(
    field_name: &str,
    constructor: F,
    min_value: Decimal,
    max_value: Decimal,
    value: Decimal,
) -> Result<T, ValidationError>
where
    F: FnOnce(Decimal) -> T,
{
    if value < min_value {
        Err(ValidationError::new(
            field_name,
            &format!("Must not be less than {min_value}"),
        ))
    } else if value > max_value {
        Err(ValidationError::new(
            field_name,
            &format!("Must not be greater than {max_value}"),
        ))
    } else {
        Ok(constructor(value))
    }
}

/// Creates a string type that matches a regular expression pattern
///
/// # Arguments
///
/// * `field_name` - Field name used in error messages
/// * `constructor` - Constructor that takes a string and produces type T
/// * `pattern` - Compiled regular expression pattern
/// * `value` - Input string
///
/// # Returns
///
/// * `Ok(T)` - On successful validation
/// * `Err(ValidationError)` - For an empty string or pattern mismatch
///
/// # Errors
///
/// Returns [`ValidationError`] in the following cases:
/// - When the input is an empty string
/// - When the input does not match the pattern
///
/// # Note
///
/// Without anchors (^$), the regex pattern performs partial matching.
/// If exact matching is needed, the caller should include anchors.
pub fn create_like<T, F>(
    field_name: &str,
    constructor: F,
    pattern: &Regex,
    value: &str,
) -> Result<T, ValidationError>
where
    F: FnOnce(String) -> T,
{
    if value.is_empty() {
        Err(ValidationError::new(field_name, "Must not be empty"))
    } else if pattern.is_match(value) {
        Ok(constructor(value.to_string()))
    } else {
        let pattern_str = pattern.as_str();
        Err(ValidationError::new(
            field_name,
            &format!("'{value}' must match the pattern '{pattern_str}'"),
        ))
    }
}
