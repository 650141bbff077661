pub mod health;
pub mod project;
pub mod task;

use axum::response::Redirect;
use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Build the page route tree (everything except `/health`).
///
/// ```text
/// GET  /                       -> redirect to /tasks
///
/// GET  /tasks                  -> list
/// GET  /tasks/new              -> empty form
/// POST /tasks/new              -> create
/// GET  /tasks/{id}             -> detail
/// GET  /tasks/{id}/edit        -> pre-populated form
/// POST /tasks/{id}/edit        -> update
/// GET  /tasks/{id}/delete      -> confirmation page
/// POST /tasks/{id}/delete      -> delete
///
/// GET  /projects               -> list
/// GET  /projects/new           -> empty form
/// POST /projects/new           -> create
/// ```
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .merge(task::router())
        .merge(project::router())
}

/// GET / -- the task list is the landing page.
async fn index() -> Redirect {
    Redirect::to("/tasks")
}
