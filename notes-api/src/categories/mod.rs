mod handlers;
mod model;
mod routes;

use model::*;

pub use model::Category;

use crate::state::AppState;
use axum::Router;

pub fn router(state: AppState) -> Router {
    Router::new().merge(routes::router(state.clone()))
}
