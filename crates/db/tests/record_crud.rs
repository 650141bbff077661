//! Integration tests for the repository layer.
//!
//! Exercises the record store against a real (in-memory) SQLite database:
//! - Create and round-trip read of projects and tasks
//! - Partial updates (unsubmitted fields keep prior values)
//! - Delete, including the project -> task cascade
//! - Foreign key violations on orphan tasks

use assert_matches::assert_matches;
use sqlx::SqlitePool;
use taskboard_db::models::project::CreateProject;
use taskboard_db::models::task::{CreateTask, UpdateTask};
use taskboard_db::repositories::{ProjectRepo, TaskRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_project(name: &str) -> CreateProject {
    CreateProject {
        name: name.to_string(),
    }
}

fn new_task(project_id: i64, description: &str) -> CreateTask {
    CreateTask {
        project_id,
        description: description.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Project CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn create_and_list_projects(pool: SqlitePool) {
    let first = ProjectRepo::create(&pool, &new_project("Website"))
        .await
        .unwrap();
    let second = ProjectRepo::create(&pool, &new_project("Mobile app"))
        .await
        .unwrap();
    assert!(second.id > first.id);

    let all = ProjectRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "Website");
    assert_eq!(all[1].name, "Mobile app");
}

#[sqlx::test(migrations = "./migrations")]
async fn find_project_by_id(pool: SqlitePool) {
    let created = ProjectRepo::create(&pool, &new_project("Website"))
        .await
        .unwrap();

    let found = ProjectRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.name, "Website");

    let missing = ProjectRepo::find_by_id(&pool, 999_999).await.unwrap();
    assert!(missing.is_none());
}

// ---------------------------------------------------------------------------
// Task CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn create_task_round_trip(pool: SqlitePool) {
    let project = ProjectRepo::create(&pool, &new_project("Website"))
        .await
        .unwrap();
    let task = TaskRepo::create(&pool, &new_task(project.id, "Write the landing page"))
        .await
        .unwrap();

    let found = TaskRepo::find_by_id(&pool, task.id).await.unwrap().unwrap();
    assert_eq!(found.project_id, project.id);
    assert_eq!(found.description, "Write the landing page");

    let all = TaskRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].project_name, "Website");
}

#[sqlx::test(migrations = "./migrations")]
async fn create_task_with_missing_project_fails(pool: SqlitePool) {
    let result = TaskRepo::create(&pool, &new_task(999_999, "Orphan")).await;

    let err = result.expect_err("insert with dangling project_id must fail");
    assert_matches!(
        err,
        sqlx::Error::Database(ref db_err) if db_err.message().contains("FOREIGN KEY")
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn update_task_changes_only_submitted_fields(pool: SqlitePool) {
    let project = ProjectRepo::create(&pool, &new_project("Website"))
        .await
        .unwrap();
    let task = TaskRepo::create(&pool, &new_task(project.id, "Initial"))
        .await
        .unwrap();

    // Only the description is submitted; project_id must be untouched.
    let updated = TaskRepo::update(
        &pool,
        task.id,
        &UpdateTask {
            project_id: None,
            description: Some("Revised".to_string()),
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.description, "Revised");
    assert_eq!(updated.project_id, project.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn update_nonexistent_task_returns_none(pool: SqlitePool) {
    let updated = TaskRepo::update(
        &pool,
        999_999,
        &UpdateTask {
            project_id: None,
            description: Some("Ghost".to_string()),
        },
    )
    .await
    .unwrap();
    assert!(updated.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_task(pool: SqlitePool) {
    let project = ProjectRepo::create(&pool, &new_project("Website"))
        .await
        .unwrap();
    let task = TaskRepo::create(&pool, &new_task(project.id, "Ephemeral"))
        .await
        .unwrap();

    assert!(TaskRepo::delete(&pool, task.id).await.unwrap());
    assert!(TaskRepo::find_by_id(&pool, task.id).await.unwrap().is_none());

    // A second delete finds nothing.
    assert!(!TaskRepo::delete(&pool, task.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Cascade delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn deleting_project_removes_its_tasks(pool: SqlitePool) {
    let doomed = ProjectRepo::create(&pool, &new_project("Doomed"))
        .await
        .unwrap();
    let survivor = ProjectRepo::create(&pool, &new_project("Survivor"))
        .await
        .unwrap();

    TaskRepo::create(&pool, &new_task(doomed.id, "First"))
        .await
        .unwrap();
    TaskRepo::create(&pool, &new_task(doomed.id, "Second"))
        .await
        .unwrap();
    let kept = TaskRepo::create(&pool, &new_task(survivor.id, "Kept"))
        .await
        .unwrap();

    assert!(ProjectRepo::delete(&pool, doomed.id).await.unwrap());

    // Only the survivor's task remains.
    let all = TaskRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, kept.id);

    assert!(ProjectRepo::find_by_id(&pool, doomed.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn deleting_nonexistent_project_returns_false(pool: SqlitePool) {
    assert!(!ProjectRepo::delete(&pool, 999_999).await.unwrap());
}
