//! Contact App - a small server-rendered contact manager.
//!
//! Lists, shows, adds, edits and deletes contacts (name, email, phone) through
//! HTML forms. Every change is validated before it reaches the store, and the
//! outcome is reported once on the next list page.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`ContactId`, `EmailAddress`, `PhoneNumber`)
//! - **models**: The `Contact` record and its write payload
//! - **repositories**: The contact store trait with SQLite and in-memory backends
//! - **validation**: Per-submission field checks
//! - **services**: Create/update/delete orchestration
//! - **session**: Read-once flash messages keyed by session cookie
//! - **server**: Axum routes, handlers and templates
//! - **config**: Configuration from environment variables
//! - **error**: Error types

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;
pub mod session;
pub mod validation;

pub use config::Config;
pub use error::{ConfigError, ServiceError, StoreError};
pub use models::{Contact, ContactFields};
pub use repositories::{ContactRepository, InMemoryContactRepository, SqliteContactRepository};
pub use server::{build_router, AppState, Views};
pub use services::{ContactService, ContactServiceImpl};
pub use session::FlashStore;
pub use validation::{ContactInput, ValidationErrors};
