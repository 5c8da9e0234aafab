//! Field validation for contact submissions.
//!
//! Runs on create and update only. Every check runs, and failures
//! accumulate in submission order (name, email, phone) so the form can show
//! all of them at once.

use crate::domain::{EmailAddress, PhoneNumber};
use crate::error::StoreResult;
use crate::models::ContactFields;
use crate::repositories::ContactRepository;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

pub const NAME_REQUIRED: &str = "Name is required.";
pub const NAME_IN_USE: &str = "Name already in use.";
pub const EMAIL_INVALID: &str = "Email invalid.";
pub const PHONE_INVALID: &str = "Phone number invalid.";
pub const ID_MISSING: &str = "Contact id is missing.";

/// Raw contact fields as submitted by a form.
///
/// Kept as plain strings so a rejected submission can be echoed back into
/// the form unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// One failed check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Ordered list of failed checks for one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &'static str, message: &'static str) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    pub fn push(&mut self, field: &'static str, message: &'static str) {
        self.0.push(FieldError { field, message });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Messages reported for `field`, in order.
    pub fn messages_for(&self, field: &str) -> Vec<&'static str> {
        self.0
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message)
            .collect()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|e| e.message).collect();
        write!(f, "{}", messages.join(" "))
    }
}

/// Outcome of validating a submission: the write payload, or the errors.
pub type Validated = Result<ContactFields, ValidationErrors>;

/// Validate a new contact. The name must not belong to any stored contact.
pub async fn validate_create(
    repo: &dyn ContactRepository,
    input: &ContactInput,
) -> StoreResult<Validated> {
    validate(repo, input, None).await
}

/// Validate an edit of the contact currently named `old_name`.
///
/// Keeping the current name is allowed; taking another contact's name is not.
pub async fn validate_update(
    repo: &dyn ContactRepository,
    input: &ContactInput,
    old_name: &str,
) -> StoreResult<Validated> {
    validate(repo, input, Some(old_name)).await
}

async fn validate(
    repo: &dyn ContactRepository,
    input: &ContactInput,
    old_name: Option<&str>,
) -> StoreResult<Validated> {
    let mut errors = ValidationErrors::new();

    if input.name.trim().is_empty() {
        errors.push("name", NAME_REQUIRED);
    } else {
        let taken = repo.find_by_name(&input.name).await?.is_some();
        let renaming = old_name.map_or(true, |old| old != input.name);
        if taken && renaming {
            errors.push("name", NAME_IN_USE);
        }
    }

    let email = EmailAddress::new(input.email.as_str());
    if email.is_err() {
        errors.push("email", EMAIL_INVALID);
    }

    let phone = PhoneNumber::new(input.phone.as_str());
    if phone.is_err() {
        errors.push("phone", PHONE_INVALID);
    }

    match (email, phone) {
        (Ok(email), Ok(phone)) if errors.is_empty() => Ok(Ok(ContactFields {
            name: input.name.clone(),
            email,
            phone,
        })),
        _ => {
            warn!(name = %input.name, errors = %errors, "Contact submission rejected");
            Ok(Err(errors))
        }
    }
}
