//! Client-side validation of a submission before it is sent.
//!
//! Pure functions: no I/O, deterministic.

use crate::error::ValidationError;
use url::Url;

/// Checks a draft's URL and validity field.
///
/// `validity` is the raw text of the minutes field; an empty or blank string means the
/// field was left out and the service default applies.
///
/// # Errors
///
/// - [`ValidationError::EmptyUrl`] if `url` is empty
/// - [`ValidationError::MalformedUrl`] if `url` is not absolute (scheme and host required)
/// - [`ValidationError::InvalidValidity`] if `validity` is given but not a positive integer
pub fn validate(url: &str, validity: &str) -> Result<(), ValidationError> {
    validate_url(url)?;
    parse_validity(validity)?;
    Ok(())
}

/// Rejects empty and non-absolute URLs.
pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    if url.is_empty() {
        return Err(ValidationError::EmptyUrl);
    }

    let parsed = Url::parse(url).map_err(|_| ValidationError::MalformedUrl)?;
    if !parsed.has_host() {
        return Err(ValidationError::MalformedUrl);
    }

    Ok(())
}

/// Parses the minutes field. Blank input yields `None`.
///
/// Only plain decimal digits are accepted: `"1.5"`, `"-3"`, `"0"` and `"1e3"` all fail.
pub fn parse_validity(validity: &str) -> Result<Option<u32>, ValidationError> {
    let validity = validity.trim();
    if validity.is_empty() {
        return Ok(None);
    }

    if !validity.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidValidity);
    }

    match validity.parse::<u32>() {
        Ok(0) | Err(_) => Err(ValidationError::InvalidValidity),
        Ok(minutes) => Ok(Some(minutes)),
    }
}
