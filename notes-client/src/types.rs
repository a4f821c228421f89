use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub color: String,
    /// Absent when the category is embedded in a note.
    #[serde(default)]
    pub note_count: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub category: Category,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Color a note renders with when its category reference does not resolve.
pub const DEFAULT_CATEGORY_COLOR: &str = "#ef9c66";

/// The category color a note card should use: the note's own category when
/// it still resolves against the fetched category list, else the default.
pub fn category_color<'a>(note: &'a Note, categories: &'a [Category]) -> &'a str {
    categories
        .iter()
        .find(|c| c.id == note.category.id)
        .map(|c| c.color.as_str())
        .unwrap_or(DEFAULT_CATEGORY_COLOR)
}
