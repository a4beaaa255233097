//! Integration tests for the PostgreSQL task store.
//!
//! Exercises `TaskRepo` and `PgTaskStore` against a real database. These
//! need a reachable `DATABASE_URL` and are ignored by default:
//!
//! ```text
//! DATABASE_URL=postgres://postgres@localhost/postgres cargo test -p taskboard-db -- --ignored
//! ```

use assert_matches::assert_matches;
use sqlx::PgPool;
use taskboard_core::store::{StoreError, TaskStore};
use taskboard_core::task::Task;
use taskboard_core::types::new_task_id;
use taskboard_db::repositories::TaskRepo;
use taskboard_db::PgTaskStore;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_task(title: &str) -> Task {
    Task {
        id: new_task_id(),
        title: title.to_string(),
        done: false,
    }
}

// ---------------------------------------------------------------------------
// TaskRepo
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn insert_then_find_by_id(pool: PgPool) {
    let task = new_task("buy milk");
    TaskRepo::insert(&pool, &task).await.unwrap();

    let row = TaskRepo::find_by_id(&pool, task.id).await.unwrap().unwrap();
    assert_eq!(Task::from(row), task);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn list_on_empty_table_is_empty(pool: PgPool) {
    assert!(TaskRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn update_and_delete_report_rows_affected(pool: PgPool) {
    let task = new_task("walk dog");
    TaskRepo::insert(&pool, &task).await.unwrap();

    assert_eq!(TaskRepo::update(&pool, task.id, "walk cat", true).await.unwrap(), 1);
    assert_eq!(TaskRepo::update(&pool, new_task_id(), "x", true).await.unwrap(), 0);

    let row = TaskRepo::find_by_id(&pool, task.id).await.unwrap().unwrap();
    assert_eq!(row.title, "walk cat");
    assert!(row.done);

    assert_eq!(TaskRepo::delete(&pool, task.id).await.unwrap(), 1);
    assert_eq!(TaskRepo::delete(&pool, task.id).await.unwrap(), 0);
    assert!(TaskRepo::find_by_id(&pool, task.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn empty_title_violates_check_constraint(pool: PgPool) {
    let task = new_task("");
    assert!(TaskRepo::insert(&pool, &task).await.is_err());
}

// ---------------------------------------------------------------------------
// PgTaskStore
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn duplicate_primary_key_is_a_conflict(pool: PgPool) {
    let store = PgTaskStore::new(pool);
    let task = new_task("only once");
    store.insert(&task).await.unwrap();

    assert_matches!(store.insert(&task).await, Err(StoreError::Conflict(_)));
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn select_all_returns_every_task(pool: PgPool) {
    let store = PgTaskStore::new(pool);
    let first = new_task("first");
    let second = new_task("second");
    store.insert(&first).await.unwrap();
    store.insert(&second).await.unwrap();

    let titles: Vec<_> = store
        .select_all()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.title)
        .collect();
    assert_eq!(titles.len(), 2);
    assert!(titles.contains(&"first".to_string()));
    assert!(titles.contains(&"second".to_string()));
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn ping_succeeds_on_live_pool(pool: PgPool) {
    let store = PgTaskStore::new(pool);
    store.ping().await.unwrap();
}
