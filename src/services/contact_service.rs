//! Contact service layer.
//!
//! Business logic for the contact CRUD flow: validation first, then a single
//! store call.

use crate::domain::ContactId;
use crate::error::{ServiceError, ServiceResult, StoreError};
use crate::models::Contact;
use crate::repositories::ContactRepository;
use crate::validation::{self, ContactInput, ValidationErrors, ID_MISSING, NAME_IN_USE};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Every contact, in insertion order.
    async fn list_contacts(&self) -> ServiceResult<Vec<Contact>>;

    /// The contact with exactly this name, if any.
    async fn find_contact(&self, name: &str) -> ServiceResult<Option<Contact>>;

    /// Validate and store a new contact.
    async fn create_contact(&self, input: &ContactInput) -> ServiceResult<Contact>;

    /// Validate and apply an edit to the contact with `id`, currently
    /// named `old_name`.
    async fn update_contact(
        &self,
        id: &str,
        old_name: &str,
        input: &ContactInput,
    ) -> ServiceResult<()>;

    /// Remove the contact with this name. Fails with `StoreError::NotFound`
    /// if there is none.
    async fn delete_contact(&self, name: &str) -> ServiceResult<Contact>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    repo: Arc<dyn ContactRepository>,
}

impl ContactServiceImpl {
    /// Create a new contact service.
    pub fn new(repo: Arc<dyn ContactRepository>) -> Self {
        Self { repo }
    }
}

/// The store's unique index caught a name that slipped past the pre-check;
/// report it like the pre-check would have.
fn duplicate_as_invalid(err: StoreError) -> ServiceError {
    match err {
        StoreError::DuplicateName(_) => {
            ServiceError::Invalid(ValidationErrors::single("name", NAME_IN_USE))
        }
        other => ServiceError::Store(other),
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn list_contacts(&self) -> ServiceResult<Vec<Contact>> {
        Ok(self.repo.list_all().await?)
    }

    async fn find_contact(&self, name: &str) -> ServiceResult<Option<Contact>> {
        Ok(self.repo.find_by_name(name).await?)
    }

    async fn create_contact(&self, input: &ContactInput) -> ServiceResult<Contact> {
        let fields = validation::validate_create(self.repo.as_ref(), input)
            .await?
            .map_err(ServiceError::Invalid)?;

        let contact = self
            .repo
            .insert(&fields)
            .await
            .map_err(duplicate_as_invalid)?;

        info!(id = %contact.id, name = %contact.name, "Contact created");
        Ok(contact)
    }

    async fn update_contact(
        &self,
        id: &str,
        old_name: &str,
        input: &ContactInput,
    ) -> ServiceResult<()> {
        let id = ContactId::new(id).ok();
        let outcome = validation::validate_update(self.repo.as_ref(), input, old_name).await?;

        let (id, fields) = match (id, outcome) {
            (Some(id), Ok(fields)) => (id, fields),
            (id, outcome) => {
                let mut errors = outcome.err().unwrap_or_default();
                if id.is_none() {
                    errors.push("id", ID_MISSING);
                }
                return Err(ServiceError::Invalid(errors));
            }
        };

        self.repo
            .update(&id, &fields)
            .await
            .map_err(duplicate_as_invalid)?;

        info!(id = %id, old_name = %old_name, name = %fields.name, "Contact updated");
        Ok(())
    }

    async fn delete_contact(&self, name: &str) -> ServiceResult<Contact> {
        let removed = self.repo.delete_by_name(name).await?;
        info!(id = %removed.id, name = %removed.name, "Contact deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryContactRepository;

    fn service() -> (ContactServiceImpl, InMemoryContactRepository) {
        let repo = InMemoryContactRepository::new();
        let service = ContactServiceImpl::new(Arc::new(repo.clone()));
        (service, repo)
    }

    fn input(name: &str, email: &str, phone: &str) -> ContactInput {
        ContactInput {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_list_contains_record_once() {
        let (service, _) = service();
        let created = service
            .create_contact(&input("Ayu", "ayu@example.com", "+6281234567890"))
            .await
            .unwrap();

        let all = service.list_contacts().await.unwrap();
        assert_eq!(all.iter().filter(|c| c.id == created.id).count(), 1);
    }

    #[tokio::test]
    async fn test_invalid_email_leaves_store_untouched() {
        let (service, repo) = service();
        let err = service
            .create_contact(&input("Ayu", "not-an-email", "+6281234567890"))
            .await
            .unwrap_err();

        match err {
            ServiceError::Invalid(errors) => assert!(errors.has_field("email")),
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn test_blank_id_on_update_is_reported_with_other_errors() {
        let (service, _) = service();
        let err = service
            .update_contact("", "Ayu", &input("Ayu", "bad", "081234567890"))
            .await
            .unwrap_err();

        match err {
            ServiceError::Invalid(errors) => {
                assert!(errors.has_field("email"));
                assert!(errors.has_field("id"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_unknown_name_is_not_found() {
        let (service, _) = service();
        let err = service.delete_contact("nobody").await.unwrap_err();
        assert_eq!(err, ServiceError::Store(StoreError::NotFound("nobody".into())));
    }

    #[test]
    fn test_duplicate_maps_to_name_error() {
        let err = duplicate_as_invalid(StoreError::DuplicateName("Ayu".into()));
        assert_eq!(
            err,
            ServiceError::Invalid(ValidationErrors::single("name", NAME_IN_USE))
        );

        let err = duplicate_as_invalid(StoreError::Storage("disk".into()));
        assert!(matches!(err, ServiceError::Store(StoreError::Storage(_))));
    }
}
