//! Form types

use crate::notes::SortKey;

/// Values to create a Note
pub struct CreateNoteValues<'a> {
    /// Title of the note, already validated
    pub title: &'a str,

    /// Body of the note, already validated
    pub body: &'a str,
}

/// Values to list Notes
pub struct ListNotesValues<'a> {
    /// Case-insensitive substring to match against title or body
    pub search_term: Option<&'a str>,

    /// Requested ordering
    ///
    /// `None` keeps the storage order
    pub sort: Option<SortKey>,
}
