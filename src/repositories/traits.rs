use crate::domain::ContactId;
use crate::error::{StoreError, StoreResult};
use crate::models::{Contact, ContactFields};
use async_trait::async_trait;

/// Repository for managing contacts.
///
/// Provides abstraction over contact storage and retrieval, enabling
/// different implementations (SQLite, in-memory, test doubles).
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Every stored contact, in insertion order.
    async fn list_all(&self) -> StoreResult<Vec<Contact>>;

    /// Exact-match lookup by name. `Ok(None)` when no contact has that name.
    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Contact>>;

    /// Store a new contact under a freshly assigned id.
    ///
    /// Fails with `StoreError::DuplicateName` if the name is taken.
    async fn insert(&self, fields: &ContactFields) -> StoreResult<Contact>;

    /// Replace the fields of the contact with the given id.
    ///
    /// An unknown id is a no-op. Fails with `StoreError::DuplicateName` if
    /// another contact already uses `fields.name`.
    async fn update(&self, id: &ContactId, fields: &ContactFields) -> StoreResult<()>;

    /// Remove the contact with the given id. An unknown id is a no-op.
    async fn delete(&self, id: &ContactId) -> StoreResult<()>;

    /// Resolve `name` to an id, then remove that contact.
    ///
    /// Fails with `StoreError::NotFound` if no contact has that name.
    async fn delete_by_name(&self, name: &str) -> StoreResult<Contact> {
        let contact = self
            .find_by_name(name)
            .await?
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;

        self.delete(&contact.id).await?;
        Ok(contact)
    }
}
