//! Data models for the contact collection.

pub mod contact;

pub use contact::{Contact, ContactFields};
