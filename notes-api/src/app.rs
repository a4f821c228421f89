use axum::{middleware, response::IntoResponse, routing::get, Extension, Json, Router};
use tower::ServiceBuilder;

use rand::Rng;
use serde_json::json;

use crate::{
    auth, categories,
    config::config,
    db::DB,
    errors::{self, on_error},
    notes,
    state::AppState,
};

pub async fn create(db: DB) -> errors::Result<Router> {
    let state = AppState { conn: db.clone() };

    let app = Router::new()
        .route("/__version__", get(version))
        .route("/__heartbeat__", get(heartbeat))
        .route("/__lbheartbeat__", get(lbheartbeat))
        .merge(auth::router(state.clone()))
        .merge(categories::router(state.clone()))
        .merge(notes::router(state))
        .layer(
            ServiceBuilder::new()
                .layer(Extension(db))
                .layer(middleware::from_fn(on_error)),
        );

    Ok(app)
}

async fn version() -> impl IntoResponse {
    let config = &config();
    Json(json!({
        "source" : config.source,
        "version": config.version,
        "commit" : config.git_commit,
    }))
}

async fn heartbeat() -> impl IntoResponse {
    let mut rng = rand::thread_rng();
    let random: u32 = rng.gen_range(0..=10000);

    Json(json!({
        "status" : "ok",
        "random": random,
    }))
}

async fn lbheartbeat() -> impl IntoResponse {
    ""
}
