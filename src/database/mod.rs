//! All things related to the storage of notes

use core::fmt;
use std::time::Duration;

use chrono::Utc;
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePoolOptions;

pub use Config as DatabaseConfig;
pub use form_types::*;

use crate::notes::Note;
use crate::utils::env_var_or_else;

mod form_types;

/// Fallback database, a file right next to the server
const DEFAULT_DATABASE_URL: &str = "sqlite:notes.db?mode=rwc";

/// Embedded migrations, see the `migrations` directory
static MIGRATOR: Migrator = sqlx::migrate!();

/// Storage errors
#[derive(Debug)]
pub enum Error {
    /// A connection error with the storage
    Connection(String),

    /// Migrations could not be applied
    Migration(String),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Connection(error) => write!(f, "Connection error: {error}"),
            Error::Migration(error) => write!(f, "Migration error: {error}"),
        }
    }
}

/// Result type for all storage interactions
pub type Result<T> = core::result::Result<T, Error>;

/// Database configuration
pub enum Config {
    /// Detect configuration from environment
    DetectConfig,

    /// Use existing connection
    ExistingConnection(SqlitePool),
}

/// `SQLite` storage
#[derive(Clone)]
pub struct Database {
    /// Pool of connections
    connection_pool: SqlitePool,
}

impl Database {
    /// Create a new `SQLite` storage
    pub async fn from_config(config: Config) -> Result<Self> {
        match config {
            Config::DetectConfig => Self::new().await,
            Config::ExistingConnection(pool) => Self::new_with_pool(pool).await,
        }
    }

    /// Create `SQLite` storage
    ///
    /// Uses the `DATABASE_URL` environment variable, with a local
    /// `notes.db` file as fallback
    ///
    /// Migrations will be run
    async fn new() -> Result<Self> {
        let database_connection_string =
            env_var_or_else("DATABASE_URL", || String::from(DEFAULT_DATABASE_URL));

        let connection_pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_connection_string)
            .await
            .map_err(connection_error)?;

        Self::new_with_pool(connection_pool).await
    }

    /// Create `SQLite` storage with existing pool
    ///
    /// Migrations will be run
    async fn new_with_pool(connection_pool: SqlitePool) -> Result<Self> {
        MIGRATOR
            .run(&connection_pool)
            .await
            .map_err(|err| Error::Migration(err.to_string()))?;

        Ok(Self { connection_pool })
    }
}

impl Database {
    /// Find all notes
    ///
    /// An optional search term restricts the result to notes whose title or
    /// body contains the term, case-insensitively. An optional sort key
    /// orders the result; without one the storage order is kept.
    pub async fn find_all_notes(&self, values: &ListNotesValues<'_>) -> Result<Vec<Note>> {
        let mut sql = String::from(
            "
            SELECT id, title, body, created_at
            FROM notes
            ",
        );

        if values.search_term.is_some() {
            sql.push_str(
                "
                WHERE lower(title) LIKE '%' || lower($1) || '%'
                    OR lower(body) LIKE '%' || lower($2) || '%'
                ",
            );
        }

        if let Some(sort) = values.sort {
            sql.push_str(" ORDER BY ");
            sql.push_str(sort.order_by_clause());
        }

        let mut query = sqlx::query_as::<_, Note>(&sql);

        if let Some(search_term) = values.search_term {
            query = query.bind(search_term).bind(search_term);
        }

        let notes = query
            .fetch_all(&self.connection_pool)
            .await
            .map_err(connection_error)?;

        Ok(notes)
    }

    /// Find a single note by its ID
    pub async fn find_single_note_by_id(&self, id: i64) -> Result<Option<Note>> {
        let note = sqlx::query_as::<_, Note>(
            r"
            SELECT id, title, body, created_at
            FROM notes
            WHERE id = $1
            LIMIT 1
            ",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(note)
    }

    /// Create a note
    ///
    /// The storage assigns the ID, the creation timestamp is set here
    pub async fn create_note(&self, values: &CreateNoteValues<'_>) -> Result<Note> {
        let note = sqlx::query_as::<_, Note>(
            r"
            INSERT INTO notes (title, body, created_at)
            VALUES ($1, $2, $3)
            RETURNING id, title, body, created_at
            ",
        )
        .bind(values.title)
        .bind(values.body)
        .bind(Utc::now().naive_utc())
        .fetch_one(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(note)
    }

    /// Delete a note
    pub async fn delete_note(&self, note: &Note) -> Result<()> {
        sqlx::query(
            r"
            DELETE FROM notes
            WHERE id = $1
            ",
        )
        .bind(note.id)
        .execute(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(())
    }
}

/// Convert `SQLx` to storage connection error
fn connection_error<E>(err: E) -> Error
where
    E: std::error::Error,
{
    Error::Connection(err.to_string())
}
