//! Integration tests for the `usuarios` repository.
//!
//! Exercises every statement against a real database:
//! - Create returns a generated id
//! - Keyed and unconditional reads
//! - Update touches only the targeted row
//! - Delete removes the row and reports whether anything was removed

use sqlx::PgPool;
use usuarios_db::models::user::{CreateUser, UpdateUser};
use usuarios_db::repositories::UserRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(name: &str, email: &str) -> CreateUser {
    CreateUser {
        name: Some(name.to_string()),
        email: Some(email.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_assigns_positive_id(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("Ana", "ana@x.com"))
        .await
        .unwrap();

    assert!(user.id > 0);
    assert_eq!(user.name.as_deref(), Some("Ana"));
    assert_eq!(user.email.as_deref(), Some("ana@x.com"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_persists_nulls_and_empty_strings(pool: PgPool) {
    let empty = UserRepo::create(&pool, &new_user("", "")).await.unwrap();
    let nulls = UserRepo::create(&pool, &CreateUser::default())
        .await
        .unwrap();

    let empty = UserRepo::find_by_id(&pool, empty.id).await.unwrap().unwrap();
    assert_eq!(empty.name.as_deref(), Some(""));
    assert_eq!(empty.email.as_deref(), Some(""));

    let nulls = UserRepo::find_by_id(&pool, nulls.id).await.unwrap().unwrap();
    assert_eq!(nulls.name, None);
    assert_eq!(nulls.email, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_by_id_round_trips(pool: PgPool) {
    let created = UserRepo::create(&pool, &new_user("Bia", "bia@x.com"))
        .await
        .unwrap();

    let found = UserRepo::find_by_id(&pool, created.id).await.unwrap();
    assert_eq!(found, Some(created));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_missing_returns_none(pool: PgPool) {
    let found = UserRepo::find_by_id(&pool, 999_999).await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_empty_store(pool: PgPool) {
    let users = UserRepo::list(&pool).await.unwrap();
    assert!(users.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_returns_all_in_id_order(pool: PgPool) {
    let a = UserRepo::create(&pool, &new_user("A", "a@x.com")).await.unwrap();
    let b = UserRepo::create(&pool, &new_user("B", "b@x.com")).await.unwrap();
    let c = UserRepo::create(&pool, &new_user("C", "c@x.com")).await.unwrap();

    let users = UserRepo::list(&pool).await.unwrap();
    assert_eq!(users, vec![a, b, c]);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_changes_only_target(pool: PgPool) {
    let target = UserRepo::create(&pool, &new_user("Old", "old@x.com"))
        .await
        .unwrap();
    let other = UserRepo::create(&pool, &new_user("Other", "other@x.com"))
        .await
        .unwrap();

    let update = UpdateUser {
        name: Some("New".into()),
        email: Some("new@x.com".into()),
    };
    let updated = UserRepo::update(&pool, target.id, &update)
        .await
        .unwrap()
        .expect("target row should exist");

    assert_eq!(updated.id, target.id);
    assert_eq!(updated.name.as_deref(), Some("New"));
    assert_eq!(updated.email.as_deref(), Some("new@x.com"));

    let untouched = UserRepo::find_by_id(&pool, other.id).await.unwrap();
    assert_eq!(untouched, Some(other));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_returns_none(pool: PgPool) {
    let result = UserRepo::update(&pool, 999_999, &new_user("X", "x@x.com"))
        .await
        .unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_removes_row(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("Gone", "gone@x.com"))
        .await
        .unwrap();

    assert!(UserRepo::delete(&pool, user.id).await.unwrap());
    assert!(UserRepo::find_by_id(&pool, user.id).await.unwrap().is_none());

    // Second delete finds nothing to remove.
    assert!(!UserRepo::delete(&pool, user.id).await.unwrap());
}
