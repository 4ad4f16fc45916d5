use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/date", post(handlers::change_date))
        .route("/save", post(handlers::save))
        .route("/tab", post(handlers::switch_tab))
        .route("/export", post(handlers::export))
        .route("/api/today", get(handlers::get_today))
        .route("/api/ratings", get(handlers::get_ratings).post(handlers::save_rating))
        .route("/api/export", get(handlers::get_export))
        .with_state(state)
}
