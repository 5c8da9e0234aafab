use crate::domain::ContactId;
use crate::error::{StoreError, StoreResult};
use crate::models::{Contact, ContactFields};
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};

/// In-memory contact repository.
///
/// Keeps contacts in insertion order behind a mutex. Name uniqueness is
/// checked under the same lock as the write, so it holds even when two
/// inserts race.
#[derive(Clone, Default)]
pub struct InMemoryContactRepository {
    contacts: Arc<Mutex<Vec<Contact>>>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.lock().map(|contacts| contacts.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Vec<Contact>>> {
        self.contacts
            .lock()
            .map_err(|_| StoreError::Storage("contact store lock poisoned".to_string()))
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn list_all(&self) -> StoreResult<Vec<Contact>> {
        Ok(self.lock()?.clone())
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Contact>> {
        let contacts = self.lock()?;
        Ok(contacts.iter().find(|c| c.name == name).cloned())
    }

    async fn insert(&self, fields: &ContactFields) -> StoreResult<Contact> {
        let mut contacts = self.lock()?;

        if contacts.iter().any(|c| c.name == fields.name) {
            return Err(StoreError::DuplicateName(fields.name.clone()));
        }

        let contact = Contact::from_fields(ContactId::generate(), fields.clone());
        contacts.push(contact.clone());
        Ok(contact)
    }

    async fn update(&self, id: &ContactId, fields: &ContactFields) -> StoreResult<()> {
        let mut contacts = self.lock()?;

        let Some(index) = contacts.iter().position(|c| &c.id == id) else {
            return Ok(());
        };

        if contacts
            .iter()
            .enumerate()
            .any(|(i, c)| i != index && c.name == fields.name)
        {
            return Err(StoreError::DuplicateName(fields.name.clone()));
        }

        contacts[index].apply(fields);
        Ok(())
    }

    async fn delete(&self, id: &ContactId) -> StoreResult<()> {
        let mut contacts = self.lock()?;
        contacts.retain(|c| &c.id != id);
        Ok(())
    }
}
