//! The dashboard controller: current filter state, cached query results,
//! and the mutations that invalidate them.

use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::api::{ApiClient, CreateNote, NotesFilter, UpdateNote, ALL_CATEGORIES};
use crate::debounce::Debouncer;
use crate::queries::QueryCache;
use crate::types::{Category, Note};
use crate::{validate, Result};

pub const NOTE_SAVE_FALLBACK: &str = "Failed to save note. Please try again.";

pub struct Dashboard {
    api: Arc<ApiClient>,
    cache: Arc<Mutex<QueryCache>>,
    filter: Mutex<NotesFilter>,
    debouncer: Mutex<Debouncer>,
}

impl Dashboard {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api: Arc::new(api),
            cache: Arc::new(Mutex::new(QueryCache::new())),
            filter: Mutex::new(NotesFilter::default()),
            debouncer: Mutex::new(Debouncer::default()),
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn filter(&self) -> NotesFilter {
        self.filter.lock().unwrap().clone()
    }

    /// Fresh cached notes for the current filter, for rendering without
    /// a round trip.
    pub fn cached_notes(&self) -> Option<Vec<Note>> {
        let filter = self.filter();
        self.cache.lock().unwrap().notes(&filter).map(<[Note]>::to_vec)
    }

    /// Notes for the current filter: cache hit when fresh, fetch otherwise.
    pub async fn notes(&self) -> Result<Vec<Note>> {
        let filter = self.filter();

        if let Some(notes) = self.cache.lock().unwrap().notes(&filter) {
            return Ok(notes.to_vec());
        }

        let epoch = self.cache.lock().unwrap().begin_notes_fetch(&filter);
        let notes = self.api.get_notes(&filter).await?;
        self.cache.lock().unwrap().store_notes(&filter, epoch, notes.clone());

        Ok(notes)
    }

    pub async fn categories(&self) -> Result<Vec<Category>> {
        if let Some(categories) = self.cache.lock().unwrap().categories() {
            return Ok(categories.to_vec());
        }

        let categories = self.api.get_categories().await?;
        self.cache.lock().unwrap().store_categories(categories.clone());

        Ok(categories)
    }

    /// Switches the category filter and fetches immediately.
    pub async fn select_category(&self, name: &str) -> Result<Vec<Note>> {
        {
            let mut filter = self.filter.lock().unwrap();
            filter.category = if name == ALL_CATEGORIES {
                None
            } else {
                Some(name.to_string())
            };
        }
        self.notes().await
    }

    /// Updates the search text and schedules a debounced fetch. The result
    /// lands in the cache; `cached_notes` (or `notes`) picks it up.
    pub fn set_search(&self, text: &str) {
        let filter = {
            let mut filter = self.filter.lock().unwrap();
            filter.search = if text.is_empty() { None } else { Some(text.to_string()) };
            filter.clone()
        };

        let api = self.api.clone();
        let cache = self.cache.clone();

        self.debouncer.lock().unwrap().call(move || async move {
            let epoch = cache.lock().unwrap().begin_notes_fetch(&filter);
            match api.get_notes(&filter).await {
                Ok(notes) => {
                    cache.lock().unwrap().store_notes(&filter, epoch, notes);
                }
                Err(err) => tracing::debug!("search fetch failed: {err}"),
            }
        });
    }

    /// Validates locally, creates the note, and marks both lists stale.
    pub async fn create_note(&self, title: &str, body: &str, category_id: Option<Uuid>) -> Result<Note> {
        let category_id = validate::note_form(title, body, category_id)?;

        let note = self
            .api
            .create_note(&CreateNote {
                title: title.trim().to_string(),
                body: body.trim().to_string(),
                category_id,
            })
            .await?;

        self.invalidate();
        Ok(note)
    }

    pub async fn update_note(&self, id: Uuid, update: UpdateNote) -> Result<Note> {
        let note = self.api.update_note(id, &update).await?;
        self.invalidate();
        Ok(note)
    }

    pub async fn delete_note(&self, id: Uuid) -> Result<()> {
        self.api.delete_note(id).await?;
        self.invalidate();
        Ok(())
    }

    pub async fn create_category(&self, name: &str, color: &str) -> Result<Category> {
        let category = self.api.create_category(name, color).await?;
        self.cache.lock().unwrap().invalidate_categories();
        Ok(category)
    }

    /// Note and category lists can no longer be trusted: note counts may
    /// have changed.
    fn invalidate(&self) {
        let mut cache = self.cache.lock().unwrap();
        cache.invalidate_notes();
        cache.invalidate_categories();
    }
}
