mod auth;
mod categories;
mod client;
mod notes;

pub use client::{extract_message, ApiClient};
pub use notes::{CreateNote, NotesFilter, UpdateNote, ALL_CATEGORIES};
