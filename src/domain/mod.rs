//! Domain value objects and types.
//!
//! Type-safe wrappers for contact IDs, email addresses, and phone numbers.
//! Each one validates at construction, so a `Contact` holding them cannot
//! carry a malformed field.

pub mod contact_id;
pub mod email;
pub mod errors;
pub mod phone;

pub use contact_id::ContactId;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
