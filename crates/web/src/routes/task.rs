//! Route definitions for the `/tasks` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::task;
use crate::state::AppState;

/// Routes mounted at `/tasks`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(task::list))
        .route("/tasks/new", get(task::new_form).post(task::create))
        .route("/tasks/{id}", get(task::detail))
        .route("/tasks/{id}/edit", get(task::edit_form).post(task::update))
        .route(
            "/tasks/{id}/delete",
            get(task::delete_confirm).post(task::delete),
        )
}
