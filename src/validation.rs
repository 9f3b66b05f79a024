//! Field-level checks shared by the profile, card and transaction inputs.

use email_address::EmailAddress;
use serde::{Deserialize, Deserializer};
use unicode_segmentation::UnicodeSegmentation;

use crate::Error;

/// The maximum number of characters allowed in a profile or card bio.
pub const MAX_BIO_LENGTH: usize = 150;

/// Check that `value` contains something other than whitespace.
///
/// # Errors
///
/// Returns [Error::EmptyField] naming `field` if `value` is blank.
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        Err(Error::EmptyField(field))
    } else {
        Ok(())
    }
}

/// Check that `email` is a syntactically valid email address.
///
/// # Errors
///
/// Returns [Error::InvalidEmail] if `email` cannot be parsed.
pub fn require_valid_email(email: &str) -> Result<(), Error> {
    if EmailAddress::is_valid(email) {
        Ok(())
    } else {
        Err(Error::InvalidEmail(email.to_owned()))
    }
}

/// Check that `bio`, if present, is at most [MAX_BIO_LENGTH] characters long.
///
/// Length is counted in graphemes so that accented letters and emoji count as
/// one character each.
///
/// # Errors
///
/// Returns [Error::BioTooLong] with the actual length if the bio is too long.
pub fn check_bio_length(bio: Option<&str>) -> Result<(), Error> {
    let Some(bio) = bio else {
        return Ok(());
    };

    let length = bio.graphemes(true).count();

    if length > MAX_BIO_LENGTH {
        Err(Error::BioTooLong(length))
    } else {
        Ok(())
    }
}

/// Deserialize a field of a partial update that may be explicitly cleared.
///
/// Use with `#[serde(default)]`: a missing key stays `None`, `null` becomes
/// `Some(None)` and any other value becomes `Some(Some(value))`.
pub fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
