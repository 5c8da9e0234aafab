use async_trait::async_trait;
use contact_app::domain::ContactId;
use contact_app::error::{StoreError, StoreResult};
use contact_app::models::{Contact, ContactFields};
use contact_app::repositories::ContactRepository;

/// A store whose every call fails, as if the database were unreachable.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct FailingContactRepository;

fn unavailable<T>() -> StoreResult<T> {
    Err(StoreError::Storage("database unavailable".to_string()))
}

#[async_trait]
impl ContactRepository for FailingContactRepository {
    async fn list_all(&self) -> StoreResult<Vec<Contact>> {
        unavailable()
    }

    async fn find_by_name(&self, _name: &str) -> StoreResult<Option<Contact>> {
        unavailable()
    }

    async fn insert(&self, _fields: &ContactFields) -> StoreResult<Contact> {
        unavailable()
    }

    async fn update(&self, _id: &ContactId, _fields: &ContactFields) -> StoreResult<()> {
        unavailable()
    }

    async fn delete(&self, _id: &ContactId) -> StoreResult<()> {
        unavailable()
    }
}
