//! Handlers for the `/projects` pages.
//!
//! Projects are created via a form and listed; they are never edited or
//! deleted over HTTP. Removing a project (and cascading to its tasks) is a
//! record-store operation, see `taskboard_db::repositories::ProjectRepo`.

use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use validator::Validate;

use taskboard_db::models::project::{CreateProject, Project};
use taskboard_db::repositories::ProjectRepo;

use crate::error::AppResult;
use crate::forms::{ProjectForm, ProjectFormErrors};
use crate::state::AppState;

#[derive(Template)]
#[template(path = "project_list.html")]
struct ProjectListTemplate {
    projects: Vec<Project>,
}

#[derive(Template)]
#[template(path = "project_form.html")]
struct ProjectFormTemplate {
    form: ProjectForm,
    errors: ProjectFormErrors,
}

/// GET /projects
pub async fn list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Html(ProjectListTemplate { projects }.render()?))
}

/// GET /projects/new
pub async fn new_form() -> AppResult<Html<String>> {
    let page = ProjectFormTemplate {
        form: ProjectForm::default(),
        errors: ProjectFormErrors::default(),
    }
    .render()?;
    Ok(Html(page))
}

/// POST /projects/new
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<ProjectForm>,
) -> AppResult<Response> {
    if let Err(e) = form.validate() {
        let errors = ProjectFormErrors::from_validation(&e);
        let page = ProjectFormTemplate { form, errors }.render()?;
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response());
    }

    let input = CreateProject {
        name: form.name.trim().to_string(),
    };
    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::debug!(project_id = project.id, "Created project");
    Ok(Redirect::to("/projects").into_response())
}
