use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};

use crate::{ctx::BaseParams, state::AppState, Result};

use super::{handlers, CreateCategory};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/categories/", get(find_categories).post(create_category))
        .with_state(state)
}

async fn find_categories(base: BaseParams) -> Result<impl IntoResponse> {
    handlers::find_categories(base).await.map(Json)
}

async fn create_category(base: BaseParams, Json(args): Json<CreateCategory>) -> Result<impl IntoResponse> {
    handlers::create_category(args, base)
        .await
        .map(|r| (StatusCode::CREATED, Json(r)))
}

#[cfg(test)]
mod tests {
    use crate::{errors::Result, tests::test_server};
    use axum::http::{header::AUTHORIZATION, HeaderValue};
    use serde_json::{json, Value};

    #[tokio::test]
    async fn listing_requires_authentication() -> Result<()> {
        let server = test_server().await?;

        let response = server.get("/api/categories/").expect_failure().await;

        assert_eq!(response.status_code(), 401);
        assert_eq!(
            response.json::<Value>()["detail"],
            "Authentication credentials were not provided."
        );
        Ok(())
    }

    #[tokio::test]
    async fn new_users_get_default_categories() -> Result<()> {
        let server = test_server().await?;
        let token = crate::tests::signup(&server, "test@example.com").await;

        let response = server
            .get("/api/categories/")
            .add_header(AUTHORIZATION, auth_header(&token))
            .await;

        assert_eq!(response.status_code(), 200);
        let categories = response.json::<Vec<Value>>();
        let names: Vec<&str> = categories.iter().map(|c| c["name"].as_str().unwrap()).collect();
        assert_eq!(names, ["Random Thoughts", "School", "Personal"]);
        assert!(categories.iter().all(|c| c["note_count"] == 0));
        Ok(())
    }

    #[tokio::test]
    async fn create_category() -> Result<()> {
        let server = test_server().await?;
        let token = crate::tests::signup(&server, "test@example.com").await;

        let response = server
            .post("/api/categories/")
            .add_header(AUTHORIZATION, auth_header(&token))
            .json(&json!({ "name": "Work", "color": "#ef9c66" }))
            .await;

        assert_eq!(response.status_code(), 201);
        let body = response.json::<Value>();
        assert_eq!(body["name"], "Work");
        assert_eq!(body["color"], "#ef9c66");
        assert_eq!(body["note_count"], 0);
        Ok(())
    }

    #[tokio::test]
    async fn create_category_rejects_duplicate_name() -> Result<()> {
        let server = test_server().await?;
        let token = crate::tests::signup(&server, "test@example.com").await;

        let response = server
            .post("/api/categories/")
            .add_header(AUTHORIZATION, auth_header(&token))
            .json(&json!({ "name": "Personal", "color": "#ef9c66" }))
            .expect_failure()
            .await;

        assert_eq!(response.status_code(), 400);
        assert_eq!(
            response.json::<Value>()["name"][0],
            "A category with this name already exists."
        );
        Ok(())
    }

    #[tokio::test]
    async fn categories_are_scoped_to_their_user() -> Result<()> {
        let server = test_server().await?;
        let token = crate::tests::signup(&server, "one@example.com").await;
        let other = crate::tests::signup(&server, "two@example.com").await;

        server
            .post("/api/categories/")
            .add_header(AUTHORIZATION, auth_header(&token))
            .json(&json!({ "name": "Work", "color": "#ef9c66" }))
            .await;

        let response = server
            .get("/api/categories/")
            .add_header(AUTHORIZATION, auth_header(&other))
            .await;

        let names: Vec<String> = response
            .json::<Vec<Value>>()
            .iter()
            .map(|c| c["name"].as_str().unwrap().to_string())
            .collect();
        assert!(!names.contains(&"Work".to_string()));
        Ok(())
    }

    fn auth_header(token: &str) -> HeaderValue {
        format!("Token {token}").parse().unwrap()
    }
}
