//! HTTP request/response types
//!
//! Defines abstract HTTP types used in the API layer.

// =============================================================================
// HttpRequest
// =============================================================================

/// Abstract HTTP request type
///
/// A simple struct that holds the request body.
///
/// # Examples
///
/// ```
/// use delivery_checkout_sample::api::HttpRequest;
///
/// let request = HttpRequest::new(r#"{"status": "PREPARING"}"#.to_string());
/// assert!(request.body().contains("status"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// Request body
    body: String,
}

impl HttpRequest {
    /// Creates a new `HttpRequest`
    ///
    /// # Arguments
    ///
    /// * `body` - Request body
    ///
    /// # Returns
    ///
    /// An `HttpRequest` instance
    ///
    /// # Examples
    ///
    /// ```
    /// use delivery_checkout_sample::api::HttpRequest;
    ///
    /// let request = HttpRequest::new(r#"{"key": "value"}"#.to_string());
    /// ```
    #[must_use]
    pub const fn new(body: String) -> Self {
        Self { body }
    }

    /// Returns a reference to the request body
    ///
    /// # Examples
    ///
    /// ```
    /// use delivery_checkout_sample::api::HttpRequest;
    ///
    /// let request = HttpRequest::new("test body".to_string());
    /// assert_eq!(request.body(), "test body");
    /// ```
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}

// =============================================================================
// HttpResponse
// =============================================================================

/// Abstract HTTP response type
///
/// A struct that holds a status code and response body.
///
/// # Examples
///
/// ```
/// use delivery_checkout_sample::api::HttpResponse;
///
/// let response = HttpResponse::ok(r#"{"has_freeship": true}"#.to_string());
/// assert_eq!(response.status_code(), 200);
/// assert!(response.is_success());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    status_code: u16,
    /// Response body
    body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`
    ///
    /// # Arguments
    ///
    /// * `status_code` - HTTP status code
    /// * `body` - Response body
    ///
    /// # Examples
    ///
    /// ```
    /// use delivery_checkout_sample::api::HttpResponse;
    ///
    /// let response = HttpResponse::new(404, "Not Found".to_string());
    /// assert_eq!(response.status_code(), 404);
    /// ```
    #[must_use]
    pub const fn new(status_code: u16, body: String) -> Self {
        Self { status_code, body }
    }

    /// Creates a 200 OK response
    ///
    /// # Examples
    ///
    /// ```
    /// use delivery_checkout_sample::api::HttpResponse;
    ///
    /// let response = HttpResponse::ok(r#"{"success": true}"#.to_string());
    /// assert_eq!(response.status_code(), 200);
    /// ```
    #[must_use]
    pub const fn ok(body: String) -> Self {
        Self::new(200, body)
    }

    /// Creates a 400 Bad Request response
    ///
    /// # Examples
    ///
    /// ```
    /// use delivery_checkout_sample::api::HttpResponse;
    ///
    /// let response = HttpResponse::bad_request(r#"{"error": "Invalid input"}"#.to_string());
    /// assert_eq!(response.status_code(), 400);
    /// ```
    #[must_use]
    pub const fn bad_request(body: String) -> Self {
        Self::new(400, body)
    }

    /// Creates a 500 Internal Server Error response
    ///
    /// # Examples
    ///
    /// ```
    /// use delivery_checkout_sample::api::HttpResponse;
    ///
    /// let response = HttpResponse::internal_server_error("Server error".to_string());
    /// assert_eq!(response.status_code(), 500);
    /// ```
    #[must_use]
    pub const fn internal_server_error(body: String) -> Self {
        Self::new(500, body)
    }

    /// Returns the HTTP status code
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Returns a reference to the response body
    ///
    /// # Examples
    ///
    /// ```
    /// use delivery_checkout_sample::api::HttpResponse;
    ///
    /// let response = HttpResponse::ok("Success".to_string());
    /// assert_eq!(response.body(), "Success");
    /// ```
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns whether the response is a success (2xx)
    ///
    /// # Examples
    ///
    /// ```
    /// use delivery_checkout_sample::api::HttpResponse;
    ///
    /// let success = HttpResponse::ok("OK".to_string());
    /// assert!(success.is_success());
    ///
    /// let error = HttpResponse::bad_request("Error".to_string());
    /// assert!(!error.is_success());
    /// ```
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status_code >= 200 && self.status_code < 300
    }
}
