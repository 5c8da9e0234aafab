//! Typed `application/x-www-form-urlencoded` request bodies.

use crate::models::Contact;
use crate::validation::ContactInput;
use serde::Deserialize;

/// Body of `POST /contact`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl CreateContactForm {
    pub fn into_input(self) -> ContactInput {
        ContactInput {
            name: self.name,
            email: self.email,
            phone: self.phone,
        }
    }
}

/// Body of `PUT /contact`.
///
/// `old_name` is the name the contact had when the edit form was rendered.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateContactForm {
    pub id: String,
    #[serde(rename = "oldName")]
    pub old_name: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl UpdateContactForm {
    pub fn input(&self) -> ContactInput {
        ContactInput {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// Body of `DELETE /contact`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteContactForm {
    pub name: String,
}

/// Form values for editing an existing contact.
pub fn prefill(contact: &Contact) -> ContactInput {
    ContactInput {
        name: contact.name.clone(),
        email: contact.email.as_str().to_string(),
        phone: contact.phone.as_str().to_string(),
    }
}
