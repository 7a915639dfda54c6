use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/tasks", get(handlers::list_tasks).post(handlers::add_task))
        .route("/api/tasks/:name", delete(handlers::delete_task))
        .route("/api/select", post(handlers::select_task))
        .route("/api/calendar", get(handlers::get_calendar))
        .route("/api/toggle", post(handlers::toggle_day))
        .route("/api/options", get(handlers::get_options))
        .with_state(state)
}
