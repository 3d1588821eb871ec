//! Email address validation against a fixed pattern.
//!
//! The pattern is intentionally loose: the top-level segment after the final
//! dot may be empty, so `user@example.` is accepted.

use regex::Regex;
use std::fmt;

/// Pattern every address must match, anchored at both ends.
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.]+@[a-zA-Z0-9]+\.[a-zA-Z0-9]*$";

/// Errors raised while validating addresses
#[derive(Debug)]
pub enum EmailError {
    /// The pattern could not be compiled
    Pattern(regex::Error),
}

impl fmt::Display for EmailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmailError::Pattern(err) => write!(f, "invalid email pattern: {}", err),
        }
    }
}

impl std::error::Error for EmailError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EmailError::Pattern(err) => Some(err),
        }
    }
}

impl From<regex::Error> for EmailError {
    fn from(err: regex::Error) -> Self {
        EmailError::Pattern(err)
    }
}

/// Check every address against [`EMAIL_PATTERN`].
///
/// Returns `Ok(false)` as soon as one address does not match; addresses after
/// it are never looked at. An empty input is valid.
pub fn validate_emails<I, S>(addresses: I) -> Result<bool, EmailError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    validate_emails_with_pattern(EMAIL_PATTERN, addresses)
}

/// Same as [`validate_emails`] but with a caller-supplied pattern.
pub fn validate_emails_with_pattern<I, S>(pattern: &str, addresses: I) -> Result<bool, EmailError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ok(first_mismatch(pattern, addresses)?.is_none())
}

/// Index of the first address that does not match `pattern`, if any.
///
/// The pattern is compiled before the first address is consumed, so a bad
/// pattern is reported even for an empty input.
pub fn first_mismatch<I, S>(pattern: &str, addresses: I) -> Result<Option<usize>, EmailError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let re = Regex::new(pattern)?;

    for (index, address) in addresses.into_iter().enumerate() {
        if !re.is_match(address.as_ref()) {
            return Ok(Some(index));
        }
    }

    Ok(None)
}
