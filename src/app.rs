use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/view", get(handlers::get_view))
        .route("/api/date", post(handlers::set_date_field))
        .route("/api/trigger", post(handlers::trigger))
        .with_state(state)
}
