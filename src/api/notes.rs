//! Notes API endpoints
//!
//! Everything related to creating, listing, fetching and deleting notes

use axum::Extension;
use axum::extract::Query;
use chrono::NaiveDateTime;
use serde::Deserialize;
use serde::Serialize;

use crate::database::CreateNoteValues;
use crate::database::Database;
use crate::database::ListNotesValues;
use crate::notes::Note;
use crate::notes::SortKey;

use super::Error;
use super::Form;
use super::PathParameters;
use super::Success;
use super::parse_body;
use super::parse_title;

/// Note response going to the user
#[derive(Debug, Serialize)]
pub struct NoteResponse {
    /// Note ID
    pub id: i64,

    /// Title of the note
    pub title: String,

    /// Body of the note
    pub body: String,

    /// Creation date, ISO-8601
    pub created_at: NaiveDateTime,
}

impl NoteResponse {
    /// Create a response from a [`Note`](Note)
    fn from_note(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            body: note.body,
            created_at: note.created_at,
        }
    }

    /// Create a response from multiple [`Note`](Note)s
    fn from_note_multiple(mut notes: Vec<Note>) -> Vec<Self> {
        notes.drain(..).map(Self::from_note).collect::<Vec<Self>>()
    }
}

/// Query parameters for listing notes
#[derive(Debug, Deserialize)]
pub struct ListNotesParameters {
    /// Optional search term
    q: Option<String>,

    /// Optional sort key, `-` prefix for descending
    sort: Option<String>,
}

/// List all notes
///
/// Request:
/// ```sh
/// curl -v 'http://localhost:8000/api/items?q=milk&sort=-created_at'
/// ```
///
/// Response:
/// ```json
/// [ { "id": 1, "title": "Groceries", ... } ]
/// ```
pub async fn list(
    Extension(database): Extension<Database>,
    Query(parameters): Query<ListNotesParameters>,
) -> Result<Success<Vec<NoteResponse>>, Error> {
    let sort = match parameters.sort.as_deref() {
        // without the parameter the original ordering is by creation date,
        // unrecognized values keep the storage order
        None => Some(SortKey::CreatedAtAsc),
        Some(value) => SortKey::parse(value),
    };

    let values = ListNotesValues {
        search_term: parameters.q.as_deref(),
        sort,
    };

    let notes = database
        .find_all_notes(&values)
        .await
        .map_err(Error::internal_server_error)?;

    Ok(Success::ok(NoteResponse::from_note_multiple(notes)))
}

/// Get a single note
///
/// Request:
/// ```sh
/// curl -v http://localhost:8000/api/items/1
/// ```
pub async fn single(
    Extension(database): Extension<Database>,
    PathParameters(note_id): PathParameters<i64>,
) -> Result<Success<NoteResponse>, Error> {
    get_note(&database, note_id)
        .await
        .map(|note| Success::ok(NoteResponse::from_note(note)))
}

#[derive(Debug, Deserialize)]
pub struct CreateNoteForm {
    title: String,
    body: String,
}

/// Create a note
///
/// Request:
/// ```sh
/// curl -v -H 'Content-Type: application/json' \
///     -d '{"title": "Groceries", "body": "pick up milk"}' \
///     http://localhost:8000/api/items
/// ```
pub async fn create(
    Extension(database): Extension<Database>,
    Form(form): Form<CreateNoteForm>,
) -> Result<Success<NoteResponse>, Error> {
    let values = CreateNoteValues {
        title: parse_title(&form.title)?,
        body: parse_body(&form.body)?,
    };

    let note = database
        .create_note(&values)
        .await
        .map_err(Error::internal_server_error)?;

    Ok(Success::created(NoteResponse::from_note(note)))
}

/// Delete a note
///
/// Request:
/// ```sh
/// curl -v -X DELETE http://localhost:8000/api/items/1
/// ```
pub async fn delete(
    Extension(database): Extension<Database>,
    PathParameters(note_id): PathParameters<i64>,
) -> Result<Success<&'static str>, Error> {
    let note = get_note(&database, note_id).await?;

    database
        .delete_note(&note)
        .await
        .map_err(Error::internal_server_error)?;

    Ok(Success::<&'static str>::no_content())
}

async fn get_note(database: &Database, note_id: i64) -> Result<Note, Error> {
    database
        .find_single_note_by_id(note_id)
        .await
        .map_err(Error::internal_server_error)?
        .map_or_else(|| Err(Error::not_found("Item not found")), Ok)
}
