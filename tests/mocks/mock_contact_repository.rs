use async_trait::async_trait;
use contact_app::domain::ContactId;
use contact_app::error::{StoreError, StoreResult};
use contact_app::models::{Contact, ContactFields};
use contact_app::repositories::ContactRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Keeps contacts in memory and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<Vec<Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Seed a contact without counting a call.
    pub fn add_contact(&self, contact: Contact) {
        self.contacts.lock().unwrap().push(contact);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.lock().unwrap().clear();
    }

    pub fn len(&self) -> usize {
        self.contacts.lock().unwrap().len()
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn list_all(&self) -> StoreResult<Vec<Contact>> {
        self.track_call("list_all");
        Ok(self.contacts.lock().unwrap().clone())
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Contact>> {
        self.track_call("find_by_name");

        let contacts = self.contacts.lock().unwrap();
        Ok(contacts.iter().find(|c| c.name == name).cloned())
    }

    async fn insert(&self, fields: &ContactFields) -> StoreResult<Contact> {
        self.track_call("insert");

        let mut contacts = self.contacts.lock().unwrap();
        if contacts.iter().any(|c| c.name == fields.name) {
            return Err(StoreError::DuplicateName(fields.name.clone()));
        }

        let contact = Contact::from_fields(ContactId::generate(), fields.clone());
        contacts.push(contact.clone());
        Ok(contact)
    }

    async fn update(&self, id: &ContactId, fields: &ContactFields) -> StoreResult<()> {
        self.track_call("update");

        let mut contacts = self.contacts.lock().unwrap();
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
        self.track_call("delete");

        self.contacts.lock().unwrap().retain(|c| &c.id != id);
        Ok(())
    }
}
