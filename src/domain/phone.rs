//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Indonesian mobile numbers: `+62`/`62`/`0` prefix, `8`, a known operator
/// code, then 5-11 digits (spaces allowed).
static ID_MOBILE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\+?62|0)8(1[1-9]|2[1238]|3[1238]|5[1235-9]|7[78]|9[5-9]|8[1-9])[ \t0-9]{5,11}$")
        .expect("id-ID mobile pattern is valid")
});

/// A type-safe wrapper for Indonesian (id-ID) mobile phone numbers.
///
/// # Example
///
/// ```
/// use contact_app::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+6281234567890").unwrap();
/// assert_eq!(phone.as_str(), "+6281234567890");
/// assert!(PhoneNumber::new("+1-555-1234").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the number is not an id-ID
    /// mobile number.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !ID_MOBILE.is_match(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
