use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/entries",
            get(handlers::list_entries).post(handlers::create_entry),
        )
        .route(
            "/api/entries/:id",
            delete(handlers::delete_entry).put(handlers::update_entry),
        )
        .route("/api/metrics", get(handlers::get_metrics))
        .route("/api/calendar", get(handlers::get_month_grid))
        .route("/api/calendar/week", get(handlers::get_week_grid))
        .with_state(state)
}
