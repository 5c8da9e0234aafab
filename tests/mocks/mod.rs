mod failing_contact_repository;
mod mock_contact_repository;

#[allow(unused_imports)]
pub use failing_contact_repository::FailingContactRepository;
#[allow(unused_imports)]
pub use mock_contact_repository::MockContactRepository;
