//! URL validation and normalization utilities.

use log::debug;

use crate::config::{EMPTY_URL_ERROR, MAX_URL_LENGTH};
use crate::error_handling::SubmitError;

/// Validates and normalizes a URL entered by the user.
///
/// Surrounding whitespace is trimmed and `https://` is added when no scheme is
/// given. The result must parse and use the http or https scheme.
///
/// # Errors
///
/// Returns `SubmitError::Validation` with a user-facing message when the input
/// is empty, too long, unparsable, or uses another scheme.
pub fn validate_and_normalize_url(url: &str) -> Result<String, SubmitError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(SubmitError::Validation(EMPTY_URL_ERROR.to_string()));
    }

    // Normalize: add https:// prefix if no scheme is present
    let normalized = match url.split_once("://") {
        Some((scheme, _)) if !scheme.eq_ignore_ascii_case("http")
            && !scheme.eq_ignore_ascii_case("https") =>
        {
            debug!("Rejecting unsupported scheme for URL: {url}");
            return Err(SubmitError::Validation(format!(
                "Unsupported URL scheme: {scheme}"
            )));
        }
        Some(_) => url.to_string(),
        None => format!("https://{url}"),
    };

    // Checked after normalization since the prefix can push it over the limit
    if normalized.len() > MAX_URL_LENGTH {
        debug!(
            "Rejecting URL exceeding maximum length ({} > {})",
            normalized.len(),
            MAX_URL_LENGTH
        );
        return Err(SubmitError::Validation(format!(
            "URL must be at most {MAX_URL_LENGTH} characters"
        )));
    }

    match url::Url::parse(&normalized) {
        Ok(parsed) if parsed.host_str().is_some_and(|h| !h.is_empty()) => Ok(normalized),
        Ok(_) | Err(_) => {
            debug!("Rejecting invalid URL: {url}");
            Err(SubmitError::Validation(format!("Invalid URL: {url}")))
        }
    }
}
