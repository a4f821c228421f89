use std::sync::{Arc, Mutex};

use reqwest::{
    header::{HeaderMap, ACCEPT, CONTENT_TYPE},
    Method, RequestBuilder, Response, StatusCode,
};
use serde_json::Value;

use crate::{session::SessionStore, Error, Result};

/// HTTP client for the notes API. Attaches the session token to every
/// request and turns a 401 anywhere into a cleared session.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<Mutex<SessionStore>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = {
            let mut headers = HeaderMap::new();
            headers.insert(ACCEPT, "application/json".parse().unwrap());
            headers.insert(CONTENT_TYPE, "application/json".parse().unwrap());

            reqwest::Client::builder().default_headers(headers).build().unwrap()
        };

        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session: Arc::new(Mutex::new(SessionStore::new())),
        }
    }

    pub fn session(&self) -> Arc<Mutex<SessionStore>> {
        self.session.clone()
    }

    pub fn token(&self) -> Option<String> {
        self.session.lock().unwrap().token().map(str::to_string)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.lock().unwrap().is_authenticated()
    }

    pub(crate) fn store_token(&self, token: &str) {
        self.session.lock().unwrap().set_token(token);
    }

    pub(crate) fn clear_session(&self) {
        self.session.lock().unwrap().clear();
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.http.request(method, url);

        if let Some(token) = self.token() {
            builder = builder.header("Authorization", format!("Token {token}"));
        }

        builder
    }

    /// Sends the request and maps non-success statuses into [`Error`].
    /// A 401 clears the session before surfacing [`Error::Unauthorized`].
    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            self.clear_session();
            tracing::debug!("session rejected, logging out");
            return Err(Error::Unauthorized);
        }

        if !status.is_success() {
            let body = response.json::<Value>().await.unwrap_or(Value::Null);
            return Err(Error::Api {
                status: status.as_u16(),
                message: extract_message(&body).unwrap_or_default(),
            });
        }

        Ok(response)
    }
}

/// Pulls the first human-readable error out of the known response shapes:
/// `{"non_field_errors": [...]}`, `{"detail": "..."}`, or DRF-style
/// field-keyed error arrays.
pub fn extract_message(body: &Value) -> Option<String> {
    if let Some(message) = body["non_field_errors"][0].as_str() {
        return Some(message.to_string());
    }
    if let Some(message) = body["detail"].as_str() {
        return Some(message.to_string());
    }
    if let Some(fields) = body.as_object() {
        for value in fields.values() {
            if let Some(message) = value[0].as_str() {
                return Some(message.to_string());
            }
            if let Some(message) = value.as_str() {
                return Some(message.to_string());
            }
        }
    }
    None
}
