//! Error categorization.
//!
//! Maps HTTP status codes and `reqwest::Error` values onto `ErrorType`.

use super::types::ErrorType;

/// Categorizes a non-2xx HTTP status code.
pub fn categorize_status(status: u16) -> ErrorType {
    match status {
        // Client errors (4xx)
        400 => ErrorType::HttpRequestBadRequest,
        401 => ErrorType::HttpRequestUnauthorized,
        403 => ErrorType::HttpRequestForbidden,
        404 => ErrorType::HttpRequestNotFound,
        422 => ErrorType::HttpRequestUnprocessableEntity,
        429 => ErrorType::HttpRequestTooManyRequests,
        // Server errors (5xx)
        500 => ErrorType::HttpRequestInternalServerError,
        502 => ErrorType::HttpRequestBadGateway,
        503 => ErrorType::HttpRequestServiceUnavailable,
        504 => ErrorType::HttpRequestGatewayTimeout,
        _ => ErrorType::HttpRequestOtherError,
    }
}

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// Status codes are checked first; errors without a status fall back to the
/// `reqwest` error kind.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if let Some(status) = error.status() {
        return categorize_status(status.as_u16());
    }

    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_redirect() {
        ErrorType::HttpRequestRedirectError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_request() {
        ErrorType::HttpRequestRequestError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        ErrorType::HttpRequestDecodeError
    } else {
        ErrorType::HttpRequestOtherError
    }
}
