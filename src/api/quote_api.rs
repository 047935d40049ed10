//! Checkout API endpoints
//!
//! HTTP API functions for the shipping-quote and order-progress computations.
//! Both are pure request-to-response functions; the axum layer only adapts
//! them to the framework.
//!
//! # Function List
//!
//! - [`shipping_quote_api`] - Resolves the delivery fee against vouchers
//! - [`order_progress_api`] - Projects a backend status onto the progress sequence

use crate::api::HttpRequest;
use crate::api::types::HttpResponse;
use crate::dto::{
    OrderStatusProjectionDto, ProgressQueryDto, QuoteErrorDto, ShippingQuoteDto,
    ShippingResolutionDto,
};
use crate::simple_types::{OrderId, ValidationError};
use crate::workflow::{project_status, resolve_shipping};

// =============================================================================
// shipping_quote_api
// =============================================================================

/// HTTP API endpoint for shipping-fee resolution
///
/// # Processing Flow
///
/// 1. Deserialize the request body into [`ShippingQuoteDto`]
/// 2. Validate the delivery parameters
/// 3. Normalize the voucher list (missing/`null` array becomes empty,
///    malformed entries are dropped)
/// 4. Resolve the fee and serialize a [`ShippingResolutionDto`] with 200
/// 5. On failure: serialize a [`QuoteErrorDto`] with 400
///
/// # Arguments
///
/// * `request` - HTTP request
///
/// # Examples
///
/// ```
/// use delivery_checkout_sample::api::{HttpRequest, shipping_quote_api};
///
/// let json = r#"{
///     "delivery_info": { "base_fee": "30000" },
///     "vouchers": [
///         { "voucher_id": "vch-001", "code": "SHIPFREE", "discount_type": "FREESHIP" }
///     ]
/// }"#;
///
/// let response = shipping_quote_api(&HttpRequest::new(json.to_string()));
/// assert!(response.is_success());
/// assert!(response.body().contains(r#""final_fee":"0""#));
/// ```
#[must_use]
pub fn shipping_quote_api(request: &HttpRequest) -> HttpResponse {
    // Step 1: Deserialize the request body
    let quote_dto: ShippingQuoteDto = match serde_json::from_str(request.body()) {
        Ok(dto) => dto,
        Err(error) => return json_parse_error_response(&error),
    };

    // Step 2: Validate the delivery parameters
    let delivery_info = match quote_dto.delivery_info.to_delivery_info() {
        Ok(info) => info,
        Err(error) => return validation_error_response(&error),
    };

    // Step 3: Normalize the voucher list
    let vouchers = quote_dto.normalized_vouchers();
    tracing::debug!(
        voucher_count = vouchers.len(),
        "resolving shipping fee against vouchers"
    );

    // Step 4: Resolve and respond
    let resolution = resolve_shipping(delivery_info.base_fee(), &vouchers);
    success_response(&ShippingResolutionDto::from_domain(&resolution))
}

// =============================================================================
// order_progress_api
// =============================================================================

/// HTTP API endpoint for order-progress projection
///
/// # Processing Flow
///
/// 1. Deserialize the request body into [`ProgressQueryDto`]
/// 2. Validate the order ID when one was supplied
/// 3. Project the raw status (missing status behaves like an unrecognized
///    one and degrades to the first step)
/// 4. Serialize an [`OrderStatusProjectionDto`] with 200
///
/// # Arguments
///
/// * `request` - HTTP request
///
/// # Examples
///
/// ```
/// use delivery_checkout_sample::api::{HttpRequest, order_progress_api};
///
/// let json = r#"{ "status": "ARRIVED" }"#;
/// let response = order_progress_api(&HttpRequest::new(json.to_string()));
///
/// assert!(response.is_success());
/// assert!(response.body().contains(r#""active_index":4"#));
/// ```
#[must_use]
pub fn order_progress_api(request: &HttpRequest) -> HttpResponse {
    // Step 1: Deserialize the request body
    let query_dto: ProgressQueryDto = match serde_json::from_str(request.body()) {
        Ok(dto) => dto,
        Err(error) => return json_parse_error_response(&error),
    };

    // Step 2: Validate the order ID when present
    let order_id = match query_dto
        .order_id
        .as_deref()
        .map(|raw| OrderId::create("OrderId", raw))
        .transpose()
    {
        Ok(id) => id,
        Err(error) => return validation_error_response(&error),
    };

    // Step 3-4: Project and respond
    let status = query_dto.status.as_deref().unwrap_or_default();
    let projection = project_status(status);
    tracing::debug!(status, active_index = projection.active_index(), "projected order status");

    success_response(&OrderStatusProjectionDto::from_domain(
        order_id.as_ref(),
        status,
        &projection,
    ))
}

// =============================================================================
// Response helpers
// =============================================================================

/// Creates a success response from a serializable DTO
fn success_response<T: serde::Serialize>(dto: &T) -> HttpResponse {
    serde_json::to_string(dto).map_or_else(
        |_| {
            HttpResponse::internal_server_error(
                r#"{"type":"SerializationError","message":"Failed to serialize response"}"#
                    .to_string(),
            )
        },
        HttpResponse::ok,
    )
}

/// Creates a validation error response
fn validation_error_response(error: &ValidationError) -> HttpResponse {
    error_response(&QuoteErrorDto::from_domain(error))
}

/// Creates a JSON parse error response
fn json_parse_error_response(error: &serde_json::Error) -> HttpResponse {
    error_response(&QuoteErrorDto::from_json_error(error))
}

/// Serializes an error DTO into a 400 response
fn error_response(error_dto: &QuoteErrorDto) -> HttpResponse {
    serde_json::to_string(error_dto).map_or_else(
        |_| {
            HttpResponse::internal_server_error(
                r#"{"type":"SerializationError","message":"Failed to serialize error"}"#
                    .to_string(),
            )
        },
        HttpResponse::bad_request,
    )
}

// =============================================================================
// Tests
// =============================================================================
