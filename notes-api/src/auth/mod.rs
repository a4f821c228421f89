mod handlers;
mod model;
mod password;
mod routes;

use model::*;

use crate::state::AppState;
use axum::Router;

pub fn router(state: AppState) -> Router {
    Router::new().merge(routes::router(state.clone()))
}
