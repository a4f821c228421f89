use axum::{http::StatusCode, response::IntoResponse, routing::post, Json, Router};

use crate::{ctx::BaseParams, state::AppState, Result};

use super::{handlers, LoginRequest, SignupRequest};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/signup/", post(signup))
        .route("/api/auth/login/", post(login))
        .route("/api/auth/logout/", post(logout))
        .with_state(state)
}

async fn signup(base: BaseParams, Json(args): Json<SignupRequest>) -> Result<impl IntoResponse> {
    handlers::signup(args, base).await.map(|r| (StatusCode::CREATED, Json(r)))
}

async fn login(base: BaseParams, Json(args): Json<LoginRequest>) -> Result<impl IntoResponse> {
    handlers::login(args, base).await.map(Json)
}

async fn logout(base: BaseParams) -> Result<impl IntoResponse> {
    handlers::logout(base).await.map(|_| Json(serde_json::json!({})))
}
