//! Person record store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide durable CRUD over the `persons` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Every write either fully commits or reports failure with prior state
//!   unchanged (single-statement SQLite writes).
//! - Rename and delete match rows by stable identity, never by field value.
//! - `fetch_all` ordering is deterministic: name ascending with absent names
//!   treated as empty, ties broken by ID.

use crate::db::{migrations::latest_version, DbError};
use crate::model::person::{Person, PersonId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const PERSON_SELECT_SQL: &str = "SELECT uuid, name FROM persons";

const REQUIRED_COLUMNS: &[&str] = &["uuid", "name", "created_at", "updated_at"];

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for person persistence and readiness checks.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    NotFound(PersonId),
    InvalidData(String),
    /// Connection has no schema applied yet (migrations never ran).
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "person not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted person data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "store not ready: schema version {actual_version}, expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "store not ready: missing required table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "store not ready: missing required column `{table}.{column}`"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Record store interface the coordinator depends on.
pub trait PersonRepository {
    /// Returns every person ordered by name ascending, absent names first as
    /// empty strings, ties broken by ID. Read-only.
    fn fetch_all(&self) -> StoreResult<Vec<Person>>;

    /// Creates and durably persists a person with the given name.
    ///
    /// By the time this returns `Ok`, the record is committed.
    fn create(&self, name: &str) -> StoreResult<Person>;

    /// Persists a new name for the person with the given identity.
    fn update_name(&self, id: PersonId, name: &str) -> StoreResult<()>;

    /// Removes the person with the given identity from durable storage.
    fn delete(&self, id: PersonId) -> StoreResult<()>;
}

/// SQLite-backed person store.
pub struct SqlitePersonStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePersonStore<'conn> {
    /// Wraps a connection after verifying the schema is ready for use.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations never ran.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the schema
    ///   does not carry the `persons` shape this store expects.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        let expected_version = latest_version();
        let actual_version: u32 =
            conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if actual_version == 0 {
            return Err(StoreError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let table_exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master
                WHERE type = 'table' AND name = 'persons'
            );",
            [],
            |row| row.get(0),
        )?;
        if table_exists == 0 {
            return Err(StoreError::MissingRequiredTable("persons"));
        }

        let mut stmt = conn.prepare("SELECT name FROM pragma_table_info('persons');")?;
        let mut rows = stmt.query([])?;
        let mut columns = Vec::new();
        while let Some(row) = rows.next()? {
            columns.push(row.get::<_, String>(0)?);
        }
        for &column in REQUIRED_COLUMNS {
            if !columns.iter().any(|name| name.as_str() == column) {
                return Err(StoreError::MissingRequiredColumn {
                    table: "persons",
                    column,
                });
            }
        }

        Ok(Self { conn })
    }
}

impl PersonRepository for SqlitePersonStore<'_> {
    fn fetch_all(&self) -> StoreResult<Vec<Person>> {
        let mut stmt = self.conn.prepare(&format!(
            "{PERSON_SELECT_SQL} ORDER BY COALESCE(name, '') ASC, uuid ASC;"
        ))?;

        let mut rows = stmt.query([])?;
        let mut persons = Vec::new();
        while let Some(row) = rows.next()? {
            persons.push(parse_person_row(row)?);
        }

        Ok(persons)
    }

    fn create(&self, name: &str) -> StoreResult<Person> {
        let person = Person::new(name);

        self.conn.execute(
            "INSERT INTO persons (uuid, name) VALUES (?1, ?2);",
            params![person.id.to_string(), person.name.as_deref()],
        )?;

        Ok(person)
    }

    fn update_name(&self, id: PersonId, name: &str) -> StoreResult<()> {
        let changed = self.conn.execute(
            "UPDATE persons
             SET
                name = ?1,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE uuid = ?2;",
            params![name, id.to_string()],
        )?;

        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }

    fn delete(&self, id: PersonId) -> StoreResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM persons WHERE uuid = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_person_row(row: &Row<'_>) -> StoreResult<Person> {
    let uuid_text: String = row.get("uuid")?;
    let id = Uuid::parse_str(&uuid_text).map_err(|_| {
        StoreError::InvalidData(format!("invalid uuid value `{uuid_text}` in persons.uuid"))
    })?;

    Ok(Person::with_id(id, row.get("name")?))
}
