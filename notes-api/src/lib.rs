pub mod app;
pub mod auth;
pub mod categories;
pub mod config;
pub mod ctx;
pub mod db;
pub mod errors;
pub mod notes;
pub mod state;

pub use config::config;
pub use db::{init_db, init_test_db, DB};
pub use errors::{Error, Result};

#[cfg(test)]
pub mod tests {
    use crate::{app, db, errors::Result};
    use axum_test::{TestServer, TestServerConfig, Transport};
    use serde_json::json;

    pub async fn test_server() -> Result<TestServer> {
        let db = db::init_test_db().await?;

        let app = app::create(db).await?;

        let config = TestServerConfig {
            expect_success_by_default: true,
            transport: Some(Transport::MockHttp),
            ..Default::default()
        };

        Ok(TestServer::new_with_config(app, config).unwrap())
    }

    /// Registers a user and returns their token.
    pub async fn signup(server: &TestServer, email: &str) -> String {
        let response = server
            .post("/api/auth/signup/")
            .json(&json!({ "email": email, "password": "password123" }))
            .await;

        assert_eq!(response.status_code(), 201);
        response.json::<serde_json::Value>()["token"]
            .as_str()
            .unwrap()
            .to_string()
    }
}
