use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub color: String,
    /// Only populated by the list endpoint; absent when embedded in a note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_count: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    pub color: String,
}
