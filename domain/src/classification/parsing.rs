//! Verdict parsing for the external classifier.
//!
//! The external classifier is instructed to answer with exactly one of the
//! status names. Anything else is not a verdict.

use crate::core::status::Status;

/// Parse a one-word verdict.
///
/// Surrounding whitespace is ignored and the comparison is case-insensitive.
/// Punctuation, extra words or unknown tokens yield `None`.
///
/// # Examples
///
/// ```
/// use ryg_domain::{Status, parse_verdict};
///
/// assert_eq!(parse_verdict("  clear\n"), Some(Status::Clear));
/// assert_eq!(parse_verdict("Caution."), None);
/// ```
pub fn parse_verdict(response: &str) -> Option<Status> {
    response.trim().parse().ok()
}
