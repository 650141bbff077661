//! Handlers for the `/tasks` pages.
//!
//! Create and update share one form template; both follow the same shape:
//! GET renders the form, POST validates and either redirects back to the
//! list (303) or re-renders the form with field errors (422).

use askama::Template;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use validator::Validate;

use taskboard_core::error::CoreError;
use taskboard_core::types::DbId;
use taskboard_db::models::project::Project;
use taskboard_db::models::task::{CreateTask, TaskWithProject, UpdateTask};
use taskboard_db::repositories::{ProjectRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::forms::{TaskForm, TaskFormErrors, INVALID_CHOICE, REQUIRED};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

#[derive(Template)]
#[template(path = "task_list.html")]
struct TaskListTemplate {
    tasks: Vec<TaskWithProject>,
}

#[derive(Template)]
#[template(path = "task_detail.html")]
struct TaskDetailTemplate {
    task: TaskWithProject,
}

#[derive(Template)]
#[template(path = "task_form.html")]
struct TaskFormTemplate {
    title: &'static str,
    action: String,
    form: TaskForm,
    errors: TaskFormErrors,
    projects: Vec<Project>,
}

#[derive(Template)]
#[template(path = "task_confirm_delete.html")]
struct TaskConfirmDeleteTemplate {
    task: TaskWithProject,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /tasks
pub async fn list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let tasks = TaskRepo::list(&state.pool).await?;
    Ok(Html(TaskListTemplate { tasks }.render()?))
}

/// GET /tasks/{id}
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let task = find_detail(&state, id).await?;
    Ok(Html(TaskDetailTemplate { task }.render()?))
}

/// GET /tasks/new
pub async fn new_form(State(state): State<AppState>) -> AppResult<Response> {
    render_form(
        &state,
        StatusCode::OK,
        "New task",
        "/tasks/new".to_string(),
        TaskForm::default(),
        TaskFormErrors::default(),
    )
    .await
}

/// POST /tasks/new
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<TaskForm>,
) -> AppResult<Response> {
    match check_form(&state, &form).await? {
        Ok(input) => {
            let task = TaskRepo::create(&state.pool, &input).await?;
            tracing::debug!(task_id = task.id, "Created task");
            Ok(Redirect::to("/tasks").into_response())
        }
        Err(errors) => {
            render_form(
                &state,
                StatusCode::UNPROCESSABLE_ENTITY,
                "New task",
                "/tasks/new".to_string(),
                form,
                errors,
            )
            .await
        }
    }
}

/// GET /tasks/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(not_found(id))?;

    let form = TaskForm {
        project_id: task.project_id.to_string(),
        description: task.description,
    };
    render_form(
        &state,
        StatusCode::OK,
        "Edit task",
        format!("/tasks/{id}/edit"),
        form,
        TaskFormErrors::default(),
    )
    .await
}

/// POST /tasks/{id}/edit
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(form): Form<TaskForm>,
) -> AppResult<Response> {
    // 404 before validation, like the GET side.
    TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(not_found(id))?;

    match check_form(&state, &form).await? {
        Ok(input) => {
            let update = UpdateTask {
                project_id: Some(input.project_id),
                description: Some(input.description),
            };
            TaskRepo::update(&state.pool, id, &update)
                .await?
                .ok_or(not_found(id))?;
            Ok(Redirect::to("/tasks").into_response())
        }
        Err(errors) => {
            render_form(
                &state,
                StatusCode::UNPROCESSABLE_ENTITY,
                "Edit task",
                format!("/tasks/{id}/edit"),
                form,
                errors,
            )
            .await
        }
    }
}

/// GET /tasks/{id}/delete
pub async fn delete_confirm(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Html<String>> {
    let task = find_detail(&state, id).await?;
    Ok(Html(TaskConfirmDeleteTemplate { task }.render()?))
}

/// POST /tasks/{id}/delete
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Response> {
    let deleted = TaskRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Redirect::to("/tasks").into_response())
    } else {
        Err(not_found(id))
    }
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Task", id })
}

async fn find_detail(state: &AppState, id: DbId) -> AppResult<TaskWithProject> {
    TaskRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(not_found(id))
}

/// Validate the submitted form, including the cross-record check that the
/// selected project exists. Returns the typed create DTO on success, or the
/// per-field error messages for re-rendering.
async fn check_form(
    state: &AppState,
    form: &TaskForm,
) -> AppResult<Result<CreateTask, TaskFormErrors>> {
    let mut errors = match form.validate() {
        Ok(()) => TaskFormErrors::default(),
        Err(e) => TaskFormErrors::from_validation(&e),
    };

    let mut project_id = None;
    let raw = form.project_id.trim();
    if raw.is_empty() {
        errors.project_id.push(REQUIRED.to_string());
    } else {
        match raw.parse::<DbId>() {
            Ok(id) => {
                if ProjectRepo::find_by_id(&state.pool, id).await?.is_some() {
                    project_id = Some(id);
                } else {
                    errors.project_id.push(INVALID_CHOICE.to_string());
                }
            }
            Err(_) => errors.project_id.push(INVALID_CHOICE.to_string()),
        }
    }

    match (project_id, errors.is_empty()) {
        (Some(project_id), true) => Ok(Ok(CreateTask {
            project_id,
            // Stored stripped of surrounding whitespace, like the form check.
            description: form.description.trim().to_string(),
        })),
        _ => Ok(Err(errors)),
    }
}

async fn render_form(
    state: &AppState,
    status: StatusCode,
    title: &'static str,
    action: String,
    form: TaskForm,
    errors: TaskFormErrors,
) -> AppResult<Response> {
    let projects = ProjectRepo::list(&state.pool).await?;
    let page = TaskFormTemplate {
        title,
        action,
        form,
        errors,
        projects,
    }
    .render()?;
    Ok((status, Html(page)).into_response())
}
