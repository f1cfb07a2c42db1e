//! Error type definitions.
//!
//! This module defines the error types used throughout the application and the
//! categories used when logging request failures.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::client::Endpoint;
use crate::config::GENERIC_REQUEST_ERROR;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The backend base URL cannot be used to build endpoint URLs.
    #[error("Invalid backend base URL '{0}'")]
    InvalidApiBase(String),
}

/// A failed call to one of the backend endpoints.
///
/// `Display` yields the message shown to the user: the server-provided
/// `detail` when there is one, otherwise a generic message. The underlying
/// cause stays reachable through `source()` for logging.
#[derive(Error, Debug)]
pub enum RequestError {
    /// The backend answered with a non-2xx status.
    #[error("{}", detail_or_generic(.detail))]
    Server {
        /// Endpoint that was called
        endpoint: Endpoint,
        /// HTTP status code
        status: u16,
        /// `detail` field of the error body, if any
        detail: Option<String>,
    },

    /// The request never produced a response (connect, timeout, body read).
    #[error("{}", GENERIC_REQUEST_ERROR)]
    Transport {
        /// Endpoint that was called
        endpoint: Endpoint,
        /// Category of the failure
        kind: ErrorType,
        /// Underlying error
        #[source]
        source: ReqwestError,
    },

    /// A 2xx response whose body does not match the expected shape.
    #[error("{}", GENERIC_REQUEST_ERROR)]
    Decode {
        /// Endpoint that was called
        endpoint: Endpoint,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },
}

impl RequestError {
    /// Endpoint the failed request was sent to.
    pub fn endpoint(&self) -> Endpoint {
        match self {
            RequestError::Server { endpoint, .. }
            | RequestError::Transport { endpoint, .. }
            | RequestError::Decode { endpoint, .. } => *endpoint,
        }
    }

    /// Category of the failure.
    pub fn error_type(&self) -> ErrorType {
        match self {
            RequestError::Server { status, .. } => super::categorize_status(*status),
            RequestError::Transport { kind, .. } => *kind,
            RequestError::Decode { .. } => ErrorType::ResponseDecodeError,
        }
    }

    /// Message shown to the user.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

fn detail_or_generic(detail: &Option<String>) -> &str {
    detail.as_deref().unwrap_or(GENERIC_REQUEST_ERROR)
}

/// Errors rejected at submit time, before any request is issued.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The input is unusable (empty URL, nothing selected, malformed URL).
    #[error("{0}")]
    Validation(String),

    /// A submission is already in flight on this session.
    #[error("An analysis is already in progress")]
    Busy,
}

/// Categories of request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // HTTP/Network errors
    HttpRequestBuilderError,
    HttpRequestRedirectError,
    HttpRequestTimeoutError,
    HttpRequestRequestError,
    HttpRequestConnectError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    // Status codes the backend is known to return
    HttpRequestBadRequest,          // 400 Bad Request (invalid URL)
    HttpRequestUnauthorized,        // 401 Unauthorized
    HttpRequestForbidden,           // 403 Forbidden
    HttpRequestNotFound,            // 404 Not Found
    HttpRequestUnprocessableEntity, // 422 missing/invalid query parameter
    HttpRequestTooManyRequests,     // 429 (PageSpeed quota)
    HttpRequestInternalServerError, // 500 analysis failed
    HttpRequestBadGateway,          // 502 Bad Gateway
    HttpRequestServiceUnavailable,  // 503 Service Unavailable
    HttpRequestGatewayTimeout,      // 504 Gateway Timeout
    // Body did not match the expected JSON shape
    ResponseDecodeError,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::HttpRequestBadRequest => "Bad Request (400)",
            ErrorType::HttpRequestUnauthorized => "Unauthorized (401)",
            ErrorType::HttpRequestForbidden => "Forbidden (403)",
            ErrorType::HttpRequestNotFound => "Not Found (404)",
            ErrorType::HttpRequestUnprocessableEntity => "Unprocessable Entity (422)",
            ErrorType::HttpRequestTooManyRequests => "Too many requests (429)",
            ErrorType::HttpRequestInternalServerError => "Internal Server Error (500)",
            ErrorType::HttpRequestBadGateway => "Bad Gateway (502)",
            ErrorType::HttpRequestServiceUnavailable => "Service Unavailable (503)",
            ErrorType::HttpRequestGatewayTimeout => "Gateway Timeout (504)",
            ErrorType::ResponseDecodeError => "Response body decode error",
        }
    }
}
