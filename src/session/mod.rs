//! Per-session one-shot messages.
//!
//! A mutating request leaves a message for its session; the next list-page
//! render takes it, which removes it.

pub mod flash_store;

pub use flash_store::FlashStore;

/// Cookie carrying the session id that keys the flash store.
pub const SESSION_COOKIE: &str = "contact_app_sid";
