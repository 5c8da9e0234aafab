//! Service behaviour observed through a call-counting repository.

mod mocks;

use contact_app::error::{ServiceError, StoreError};
use contact_app::models::{Contact, ContactFields};
use contact_app::domain::ContactId;
use contact_app::services::{ContactService, ContactServiceImpl};
use contact_app::validation::{ContactInput, NAME_IN_USE};
use mocks::{FailingContactRepository, MockContactRepository};
use std::sync::Arc;

fn sample_contact(name: &str) -> Contact {
    let fields = ContactFields::parse(name, "someone@example.com", "081234567890").unwrap();
    Contact::from_fields(ContactId::generate(), fields)
}

fn input(name: &str, email: &str, phone: &str) -> ContactInput {
    ContactInput {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
    }
}

fn service_over(repo: &MockContactRepository) -> ContactServiceImpl {
    ContactServiceImpl::new(Arc::new(repo.clone()))
}

#[tokio::test]
async fn test_create_checks_name_then_inserts_once() {
    let repo = MockContactRepository::new();
    let service = service_over(&repo);

    service
        .create_contact(&input("Ayu", "ayu@example.com", "+6281234567890"))
        .await
        .unwrap();

    assert_eq!(repo.get_call_count("find_by_name"), 1);
    assert_eq!(repo.get_call_count("insert"), 1);
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_rejected_create_never_writes() {
    let repo = MockContactRepository::new();
    repo.add_contact(sample_contact("Ayu"));
    let service = service_over(&repo);

    let err = service
        .create_contact(&input("Ayu", "not-an-email", "+6281234567890"))
        .await
        .unwrap_err();

    match err {
        ServiceError::Invalid(errors) => {
            assert_eq!(errors.messages_for("name"), vec![NAME_IN_USE]);
            assert!(errors.has_field("email"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
    assert_eq!(repo.get_call_count("insert"), 0);
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_update_keeps_id_and_replaces_fields() {
    let repo = MockContactRepository::new();
    let ayu = sample_contact("Ayu");
    repo.add_contact(ayu.clone());
    let service = service_over(&repo);

    service
        .update_contact(
            ayu.id.as_str(),
            "Ayu",
            &input("Ayu Lestari", "ayu@example.com", "081298765432"),
        )
        .await
        .unwrap();

    let updated = service.find_contact("Ayu Lestari").await.unwrap().unwrap();
    assert_eq!(updated.id, ayu.id);
    assert_eq!(updated.phone.as_str(), "081298765432");
    assert!(service.find_contact("Ayu").await.unwrap().is_none());
    assert_eq!(repo.get_call_count("update"), 1);
}

#[tokio::test]
async fn test_delete_resolves_name_then_deletes_by_id() {
    let repo = MockContactRepository::new();
    repo.add_contact(sample_contact("Ayu"));
    let service = service_over(&repo);

    let removed = service.delete_contact("Ayu").await.unwrap();

    assert_eq!(removed.name, "Ayu");
    assert_eq!(repo.get_call_count("find_by_name"), 1);
    assert_eq!(repo.get_call_count("delete"), 1);
    assert_eq!(repo.len(), 0);
}

#[tokio::test]
async fn test_delete_unknown_name_skips_delete() {
    let repo = MockContactRepository::new();
    repo.add_contact(sample_contact("Ayu"));
    let service = service_over(&repo);

    let err = service.delete_contact("Budi").await.unwrap_err();

    assert_eq!(err, ServiceError::Store(StoreError::NotFound("Budi".to_string())));
    assert_eq!(repo.get_call_count("delete"), 0);
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_reads_do_not_validate() {
    let repo = MockContactRepository::new();
    let service = service_over(&repo);

    service.list_contacts().await.unwrap();
    service.find_contact("Ayu").await.unwrap();

    assert_eq!(repo.get_call_count("list_all"), 1);
    assert_eq!(repo.get_call_count("find_by_name"), 1);
    assert_eq!(repo.get_call_count("insert"), 0);
}

#[tokio::test]
async fn test_storage_failure_propagates() {
    let service = ContactServiceImpl::new(Arc::new(FailingContactRepository));

    let err = service.list_contacts().await.unwrap_err();
    assert!(matches!(err, ServiceError::Store(StoreError::Storage(_))));

    // The uniqueness lookup fails before any field is reported
    let err = service
        .create_contact(&input("Ayu", "ayu@example.com", "081234567890"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Store(StoreError::Storage(_))));
}
