//! Query cache with "mark stale, refetch on next read" invalidation.
//!
//! Results are keyed by the filter parameters that produced them. Every
//! fetch takes an epoch for its key; a response carrying an epoch older
//! than the key's current one lost the race and is discarded, so a slow
//! superseded request can never overwrite newer data.

use std::collections::HashMap;

use crate::api::NotesFilter;
use crate::types::{Category, Note};

#[derive(Debug)]
struct Entry<T> {
    data: T,
    stale: bool,
}

#[derive(Debug, Default)]
pub struct QueryCache {
    notes: HashMap<NotesFilter, Entry<Vec<Note>>>,
    categories: Option<Entry<Vec<Category>>>,
    epochs: HashMap<NotesFilter, u64>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh cached notes for the filter, if any.
    pub fn notes(&self, filter: &NotesFilter) -> Option<&[Note]> {
        self.notes
            .get(filter)
            .filter(|entry| !entry.stale)
            .map(|entry| entry.data.as_slice())
    }

    pub fn categories(&self) -> Option<&[Category]> {
        self.categories
            .as_ref()
            .filter(|entry| !entry.stale)
            .map(|entry| entry.data.as_slice())
    }

    /// Registers a fetch for the filter and returns its epoch.
    pub fn begin_notes_fetch(&mut self, filter: &NotesFilter) -> u64 {
        let epoch = self.epochs.entry(filter.clone()).or_insert(0);
        *epoch += 1;
        *epoch
    }

    /// Stores a response unless a newer fetch for the same filter has
    /// started since. Returns whether the response was applied.
    pub fn store_notes(&mut self, filter: &NotesFilter, epoch: u64, notes: Vec<Note>) -> bool {
        if self.epochs.get(filter).copied().unwrap_or(0) > epoch {
            return false;
        }
        self.notes.insert(filter.clone(), Entry { data: notes, stale: false });
        true
    }

    pub fn store_categories(&mut self, categories: Vec<Category>) {
        self.categories = Some(Entry {
            data: categories,
            stale: false,
        });
    }

    /// Marks every cached notes list stale; counts may have changed.
    pub fn invalidate_notes(&mut self) {
        for entry in self.notes.values_mut() {
            entry.stale = true;
        }
    }

    pub fn invalidate_categories(&mut self) {
        if let Some(entry) = &mut self.categories {
            entry.stale = true;
        }
    }

    pub fn clear(&mut self) {
        self.notes.clear();
        self.categories = None;
        self.epochs.clear();
    }
}
