//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(project::list))
        .route(
            "/projects/new",
            get(project::new_form).post(project::create),
        )
}
