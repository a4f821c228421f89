use reqwest::Method;
use serde_json::json;

use crate::{types::AuthResponse, Result};

use super::ApiClient;

impl ApiClient {
    /// `POST /auth/login/`. Persists the returned token for the session.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let response = self
            .send(
                self.request(Method::POST, "/auth/login/")
                    .json(&json!({ "email": email, "password": password })),
            )
            .await?;

        let auth = response.json::<AuthResponse>().await?;
        self.store_token(&auth.token);
        Ok(auth)
    }

    /// `POST /auth/signup/`. The server logs the new user straight in, so
    /// the token is persisted the same way login does it.
    pub async fn signup(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let response = self
            .send(
                self.request(Method::POST, "/auth/signup/")
                    .json(&json!({ "email": email, "password": password })),
            )
            .await?;

        let auth = response.json::<AuthResponse>().await?;
        self.store_token(&auth.token);
        Ok(auth)
    }

    /// `POST /auth/logout/`, best-effort, then drops the stored token.
    /// Guard enforcement happens on the next navigation.
    pub async fn logout(&self) {
        if let Err(err) = self.send(self.request(Method::POST, "/auth/logout/")).await {
            tracing::debug!("logout request failed: {err}");
        }
        self.clear_session();
    }
}
