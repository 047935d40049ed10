//! axum handlers
//!
//! Provides handler functions for the axum framework. Each handler only
//! adapts the corresponding pure API function to axum's types.

use axum::{http::StatusCode, response::IntoResponse};

use crate::api::types::HttpResponse;
use crate::api::{HttpRequest, order_progress_api, shipping_quote_api};

/// POST /shipping-quote handler
///
/// # Arguments
///
/// * `body` - Request body (JSON string)
///
/// # Examples
///
/// ```ignore
/// use axum::{routing::post, Router};
/// use delivery_checkout_sample::api::axum_handler::shipping_quote_handler;
///
/// let app = Router::new().route("/shipping-quote", post(shipping_quote_handler));
/// ```
#[allow(clippy::unused_async)] // axum handlers must be async
pub async fn shipping_quote_handler(body: String) -> impl IntoResponse {
    let request = HttpRequest::new(body);
    let response = shipping_quote_api(&request);

    into_axum_response(response)
}

/// POST /order-progress handler
///
/// # Arguments
///
/// * `body` - Request body (JSON string)
///
/// # Examples
///
/// ```ignore
/// use axum::{routing::post, Router};
/// use delivery_checkout_sample::api::axum_handler::order_progress_handler;
///
/// let app = Router::new().route("/order-progress", post(order_progress_handler));
/// ```
#[allow(clippy::unused_async)] // axum handlers must be async
pub async fn order_progress_handler(body: String) -> impl IntoResponse {
    let request = HttpRequest::new(body);
    let response = order_progress_api(&request);

    into_axum_response(response)
}

/// Converts the abstract response into an axum response
fn into_axum_response(response: HttpResponse) -> impl IntoResponse {
    (
        StatusCode::from_u16(response.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        [(axum::http::header::CONTENT_TYPE, "application/json")],
        response.body().to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_shipping_quote_handler_with_valid_json() {
        let json = r#"{
            "delivery_info": { "base_fee": "30000", "distance": "3.4" },
            "vouchers": [
                {
                    "voucher_id": "vch-001",
                    "code": "SHIP20K",
                    "discount_type": "FREESHIP",
                    "max_discount_amount": "20000"
                }
            ]
        }"#;

        let response = shipping_quote_handler(json.to_string()).await;
        let response = response.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_shipping_quote_handler_with_invalid_json() {
        let invalid_json = "{ invalid json }";

        let response = shipping_quote_handler(invalid_json.to_string()).await;
        let response = response.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_shipping_quote_handler_with_validation_error() {
        // Negative base fee
        let json = r#"{ "delivery_info": { "base_fee": "-100" } }"#;

        let response = shipping_quote_handler(json.to_string()).await;
        let response = response.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_order_progress_handler_with_valid_json() {
        let json = r#"{ "status": "PICKED_UP" }"#;

        let response = order_progress_handler(json.to_string()).await;
        let response = response.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_order_progress_handler_with_invalid_json() {
        let response = order_progress_handler("not json".to_string()).await;
        let response = response.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
