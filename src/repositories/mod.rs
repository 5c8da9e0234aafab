mod memory_contact_repository;
mod sqlite_contact_repository;
mod traits;

pub use memory_contact_repository::InMemoryContactRepository;
pub use sqlite_contact_repository::SqliteContactRepository;
pub use traits::ContactRepository;
