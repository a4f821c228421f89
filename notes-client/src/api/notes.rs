use chrono::NaiveDate;
use reqwest::Method;
use serde::Serialize;
use uuid::Uuid;

use crate::{types::Note, Result};

use super::ApiClient;

/// Category selection meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All Categories";

/// Filter parameters for `GET /notes/`. Doubles as the query cache key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NotesFilter {
    pub category: Option<String>,
    pub search: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl NotesFilter {
    /// Query parameters with the sentinel category and blank search omitted.
    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(category) = &self.category {
            if category != ALL_CATEGORIES {
                params.push(("category", category.clone()));
            }
        }
        if let Some(search) = &self.search {
            if !search.is_empty() {
                params.push(("search", search.clone()));
            }
        }
        if let Some(date_from) = self.date_from {
            params.push(("date_from", date_from.to_string()));
        }
        if let Some(date_to) = self.date_to {
            params.push(("date_to", date_to.to_string()));
        }

        params
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateNote {
    pub title: String,
    pub body: String,
    pub category_id: Uuid,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateNote {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
}

impl ApiClient {
    pub async fn get_notes(&self, filter: &NotesFilter) -> Result<Vec<Note>> {
        let response = self
            .send(self.request(Method::GET, "/notes/").query(&filter.query_params()))
            .await?;
        Ok(response.json().await?)
    }

    pub async fn create_note(&self, data: &CreateNote) -> Result<Note> {
        let response = self.send(self.request(Method::POST, "/notes/").json(data)).await?;
        Ok(response.json().await?)
    }

    pub async fn update_note(&self, id: Uuid, data: &UpdateNote) -> Result<Note> {
        let response = self
            .send(self.request(Method::PATCH, &format!("/notes/{id}/")).json(data))
            .await?;
        Ok(response.json().await?)
    }

    pub async fn delete_note(&self, id: Uuid) -> Result<()> {
        self.send(self.request(Method::DELETE, &format!("/notes/{id}/"))).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_and_blank_values_are_omitted() {
        let filter = NotesFilter {
            category: Some(ALL_CATEGORIES.into()),
            search: Some(String::new()),
            ..Default::default()
        };
        assert!(filter.query_params().is_empty());
    }

    #[test]
    fn set_values_are_forwarded() {
        let filter = NotesFilter {
            category: Some("Work".into()),
            search: Some("milk".into()),
            date_from: NaiveDate::from_ymd_opt(2026, 1, 1),
            date_to: None,
        };
        assert_eq!(
            filter.query_params(),
            vec![
                ("category", "Work".to_string()),
                ("search", "milk".to_string()),
                ("date_from", "2026-01-01".to_string()),
            ]
        );
    }
}
