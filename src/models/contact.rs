//! Contact model: the single entity persisted by the app.

use crate::domain::{ContactId, EmailAddress, PhoneNumber};
use serde::{Deserialize, Serialize};

/// A stored contact.
///
/// `id` is assigned by the store on insert and never changes; the remaining
/// fields are replaced wholesale on update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
}

/// Validated write payload for insert and update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
}

impl Contact {
    /// Build a stored record from an id and its fields.
    pub fn from_fields(id: ContactId, fields: ContactFields) -> Self {
        Self {
            id,
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
        }
    }

    /// The mutable part of this record.
    pub fn fields(&self) -> ContactFields {
        ContactFields {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }

    /// Replace every field except `id`.
    pub fn apply(&mut self, fields: &ContactFields) {
        self.name = fields.name.clone();
        self.email = fields.email.clone();
        self.phone = fields.phone.clone();
    }
}

impl ContactFields {
    /// Construct fields from raw strings, validating email and phone.
    ///
    /// Mostly useful for fixtures; request input goes through
    /// `validation` so that every field error is reported at once.
    pub fn parse(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<Self, crate::domain::ValidationError> {
        Ok(Self {
            name: name.into(),
            email: EmailAddress::new(email)?,
            phone: PhoneNumber::new(phone)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ayu() -> ContactFields {
        ContactFields::parse("Ayu", "ayu@example.com", "+6281234567890").unwrap()
    }

    #[test]
    fn test_from_fields_roundtrip() {
        let id = ContactId::new("c1").unwrap();
        let contact = Contact::from_fields(id.clone(), ayu());
        assert_eq!(contact.id, id);
        assert_eq!(contact.fields(), ayu());
    }

    #[test]
    fn test_apply_keeps_id() {
        let id = ContactId::new("c1").unwrap();
        let mut contact = Contact::from_fields(id.clone(), ayu());
        let renamed =
            ContactFields::parse("Budi", "budi@example.com", "081298765432").unwrap();

        contact.apply(&renamed);

        assert_eq!(contact.id, id);
        assert_eq!(contact.name, "Budi");
        assert_eq!(contact.email.as_str(), "budi@example.com");
    }

    #[test]
    fn test_parse_rejects_bad_email() {
        let err = ContactFields::parse("Ayu", "not-an-email", "081234567890").unwrap_err();
        assert!(matches!(err, crate::domain::ValidationError::InvalidEmail(_)));
    }

    #[test]
    fn test_contact_serializes_flat() {
        let contact = Contact::from_fields(ContactId::new("c1").unwrap(), ayu());
        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(json["id"], "c1");
        assert_eq!(json["name"], "Ayu");
        assert_eq!(json["email"], "ayu@example.com");
        assert_eq!(json["phone"], "+6281234567890");
    }
}
