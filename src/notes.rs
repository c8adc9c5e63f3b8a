use chrono::naive::NaiveDateTime;

/// Maximum length of a note title, in characters
pub const MAX_TITLE_LENGTH: usize = 200;

/// A persisted note
#[derive(Clone, Debug, sqlx::FromRow)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub created_at: NaiveDateTime,
}

/// Recognized sort keys for listing notes
///
/// Every key maps to a fixed `ORDER BY` fragment, nothing outside this
/// enumeration ever reaches the storage layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    IdAsc,
    IdDesc,
    TitleAsc,
    TitleDesc,
    CreatedAtAsc,
    CreatedAtDesc,
}

impl SortKey {
    /// Parse a sort key from a query parameter value
    ///
    /// A leading `-` marks a descending sort. Unrecognized values yield
    /// `None`, the caller keeps the default order.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "id" => Some(Self::IdAsc),
            "-id" => Some(Self::IdDesc),
            "title" => Some(Self::TitleAsc),
            "-title" => Some(Self::TitleDesc),
            "created_at" => Some(Self::CreatedAtAsc),
            "-created_at" => Some(Self::CreatedAtDesc),
            _ => None,
        }
    }

    /// The `ORDER BY` fragment for this sort key
    pub fn order_by_clause(self) -> &'static str {
        match self {
            Self::IdAsc => "id ASC",
            Self::IdDesc => "id DESC",
            Self::TitleAsc => "title ASC",
            Self::TitleDesc => "title DESC",
            Self::CreatedAtAsc => "created_at ASC",
            Self::CreatedAtDesc => "created_at DESC",
        }
    }
}
