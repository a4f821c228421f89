use reqwest::Method;
use serde_json::json;

use crate::{types::Category, Result};

use super::ApiClient;

impl ApiClient {
    pub async fn get_categories(&self) -> Result<Vec<Category>> {
        let response = self.send(self.request(Method::GET, "/categories/")).await?;
        Ok(response.json().await?)
    }

    /// `POST /categories/`. The backend expects a 7-char `#RRGGBB` value, so
    /// a trailing alpha channel is stripped before sending.
    pub async fn create_category(&self, name: &str, color: &str) -> Result<Category> {
        let color = strip_alpha(color);
        let response = self
            .send(
                self.request(Method::POST, "/categories/")
                    .json(&json!({ "name": name, "color": color })),
            )
            .await?;
        Ok(response.json().await?)
    }
}

fn strip_alpha(color: &str) -> &str {
    if color.len() == 9 && color.starts_with('#') && color[1..].bytes().all(|b| b.is_ascii_hexdigit()) {
        &color[..7]
    } else {
        color
    }
}
