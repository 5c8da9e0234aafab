use crate::domain::{ContactId, EmailAddress, PhoneNumber};
use crate::error::{StoreError, StoreResult};
use crate::models::{Contact, ContactFields};
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use rusqlite::{ffi, params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::debug;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS contacts (
    seq   INTEGER PRIMARY KEY AUTOINCREMENT,
    id    TEXT NOT NULL UNIQUE,
    name  TEXT NOT NULL UNIQUE,
    email TEXT NOT NULL,
    phone TEXT NOT NULL
);
";

const SELECT_COLUMNS: &str = "SELECT id, name, email, phone FROM contacts";

/// Contact repository backed by a SQLite database.
///
/// The `name` column carries a UNIQUE index, so a duplicate name is refused
/// by the write itself rather than only by the pre-write lookup. The
/// connection is synchronous; every statement runs on tokio's blocking pool.
#[derive(Clone)]
pub struct SqliteContactRepository {
    conn: Arc<Mutex<Connection>>,
}

/// Raw column values of one `contacts` row.
type ContactRow = (String, String, String, String);

impl SqliteContactRepository {
    /// Open (or create) the database file at `path` and ensure the schema.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Self::with_connection(Connection::open(path)?)
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Run `op` against the connection on the blocking pool.
    async fn with_conn<T, F>(&self, op: F) -> StoreResult<T>
    where
        F: FnOnce(&Connection) -> StoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = self.conn.clone();

        tokio::task::spawn_blocking(move || {
            let conn = conn
                .lock()
                .map_err(|_| StoreError::Storage("sqlite connection lock poisoned".to_string()))?;
            op(&conn)
        })
        .await?
    }
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<ContactRow> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
}

fn into_contact((id, name, email, phone): ContactRow) -> StoreResult<Contact> {
    let corrupt = |e: crate::domain::ValidationError| {
        StoreError::Storage(format!("corrupt contact row '{}': {}", name, e))
    };

    Ok(Contact {
        id: ContactId::new(id).map_err(corrupt)?,
        email: EmailAddress::new(email).map_err(corrupt)?,
        phone: PhoneNumber::new(phone).map_err(corrupt)?,
        name,
    })
}

/// Map a failed write. Only a unique-index violation on `contacts.name`
/// becomes `DuplicateName`; every other failure is `Storage`.
fn write_error(err: rusqlite::Error, name: &str) -> StoreError {
    match &err {
        rusqlite::Error::SqliteFailure(failure, Some(message))
            if failure.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
                && message.contains("contacts.name") =>
        {
            StoreError::DuplicateName(name.to_string())
        }
        _ => StoreError::from(err),
    }
}

#[async_trait]
impl ContactRepository for SqliteContactRepository {
    async fn list_all(&self) -> StoreResult<Vec<Contact>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!("{} ORDER BY seq", SELECT_COLUMNS))?;
            let rows = stmt
                .query_map([], read_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;

            debug!(count = rows.len(), "Listed contacts");
            rows.into_iter().map(into_contact).collect()
        })
        .await
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Contact>> {
        let name = name.to_string();

        self.with_conn(move |conn| {
            let row = conn
                .query_row(
                    &format!("{} WHERE name = ?1", SELECT_COLUMNS),
                    params![name],
                    read_row,
                )
                .optional()?;

            debug!(name = %name, found = row.is_some(), "Looked up contact by name");
            row.map(into_contact).transpose()
        })
        .await
    }

    async fn insert(&self, fields: &ContactFields) -> StoreResult<Contact> {
        let fields = fields.clone();

        self.with_conn(move |conn| {
            let id = ContactId::generate();
            conn.execute(
                "INSERT INTO contacts (id, name, email, phone) VALUES (?1, ?2, ?3, ?4)",
                params![
                    id.as_str(),
                    fields.name,
                    fields.email.as_str(),
                    fields.phone.as_str()
                ],
            )
            .map_err(|e| write_error(e, &fields.name))?;

            debug!(id = %id, name = %fields.name, "Inserted contact");
            Ok(Contact::from_fields(id, fields))
        })
        .await
    }

    async fn update(&self, id: &ContactId, fields: &ContactFields) -> StoreResult<()> {
        let id = id.clone();
        let fields = fields.clone();

        self.with_conn(move |conn| {
            let changed = conn
                .execute(
                    "UPDATE contacts SET name = ?2, email = ?3, phone = ?4 WHERE id = ?1",
                    params![
                        id.as_str(),
                        fields.name,
                        fields.email.as_str(),
                        fields.phone.as_str()
                    ],
                )
                .map_err(|e| write_error(e, &fields.name))?;

            debug!(id = %id, changed, "Updated contact");
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: &ContactId) -> StoreResult<()> {
        let id = id.clone();

        self.with_conn(move |conn| {
            let removed = conn.execute("DELETE FROM contacts WHERE id = ?1", params![id.as_str()])?;
            debug!(id = %id, removed, "Deleted contact");
            Ok(())
        })
        .await
    }
}
