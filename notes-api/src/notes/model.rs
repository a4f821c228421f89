use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::categories::Category;

#[derive(Debug, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub category: Category,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateNote {
    pub title: String,
    pub body: String,
    pub category_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNote {
    pub title: Option<String>,
    pub body: Option<String>,
    pub category_id: Option<Uuid>,
}

/// `GET /api/notes/` query string. `category` filters by name
/// (case-insensitive), `search` matches title or body substrings,
/// the date bounds apply to `created_at`.
#[derive(Debug, Default, Deserialize)]
pub struct NotesQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}
