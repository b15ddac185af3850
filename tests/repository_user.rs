mod common;

use contact_book::domain::entities::{ContactType, NewUser, UserUpdate};
use contact_book::domain::repositories::UserRepository;
use contact_book::error::AppError;
use contact_book::infrastructure::persistence::PgUserRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_create_and_get_user(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let user_id = repo
        .create(NewUser {
            name: "Frank Foobar".to_string(),
            creator_id: 100,
        })
        .await
        .unwrap();

    let user = repo.get(user_id).await.unwrap();
    assert_eq!(user.id, user_id);
    assert_eq!(user.name, "Frank Foobar");
    assert_eq!(user.creator_id, 100);
    assert!(user.contacts.is_empty());
}

#[sqlx::test]
async fn test_get_user_attaches_contacts_in_creation_order(pool: PgPool) {
    let frank = common::create_test_user(&pool, "Frank Foobar", 100).await;
    common::create_test_contact(&pool, frank, "+16502530000", "", 1).await;
    common::create_test_contact(&pool, frank, "", "frank@example.com", 2).await;

    let repo = PgUserRepository::new(Arc::new(pool));
    let user = repo.get(frank).await.unwrap();

    assert_eq!(user.contacts.len(), 2);
    assert_eq!(user.contacts[0].phone_no, "+16502530000");
    assert_eq!(user.contacts[0].contact_type, ContactType::Home);
    assert_eq!(user.contacts[1].email, "frank@example.com");
    assert_eq!(user.contacts[1].contact_type, ContactType::Work);
}

#[sqlx::test]
async fn test_get_user_not_found(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let err = repo.get(999).await.unwrap_err();

    match err {
        AppError::NotFound { message } => {
            assert_eq!(message, "User with id 999 was not found");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[sqlx::test]
async fn test_list_users_returns_window_and_unfiltered_total(pool: PgPool) {
    for i in 1..=3 {
        common::create_test_user(&pool, &format!("User {i}"), 100).await;
    }

    let repo = PgUserRepository::new(Arc::new(pool));

    let (users, total) = repo.list(2, 0).await.unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(total, 3);
    assert_eq!(users[0].name, "User 1");

    let (users, total) = repo.list(2, 2).await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(total, 3);
    assert_eq!(users[0].name, "User 3");
}

#[sqlx::test]
async fn test_list_users_empty(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let (users, total) = repo.list(100, 0).await.unwrap();

    assert!(users.is_empty());
    assert_eq!(total, 0);
}

#[sqlx::test]
async fn test_update_user_renames(pool: PgPool) {
    let frank = common::create_test_user(&pool, "Frank Foobar", 100).await;

    let repo = PgUserRepository::new(Arc::new(pool));

    repo.update(
        frank,
        UserUpdate {
            name: "Frank Renamed".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(repo.get(frank).await.unwrap().name, "Frank Renamed");
}

#[sqlx::test]
async fn test_update_user_not_found(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let err = repo
        .update(
            999,
            UserUpdate {
                name: "Ghost".to_string(),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound { .. }));
}

#[sqlx::test]
async fn test_delete_user_removes_contacts_in_one_unit(pool: PgPool) {
    let frank = common::create_test_user(&pool, "Frank Foobar", 100).await;
    common::create_test_contact(&pool, frank, "+16502530000", "", 1).await;
    common::create_test_contact(&pool, frank, "", "frank@example.com", 2).await;

    let repo = PgUserRepository::new(Arc::new(pool.clone()));

    repo.delete(frank).await.unwrap();

    let err = repo.get(frank).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));

    assert_eq!(common::count_contacts_for_user(&pool, frank).await, 0);
}

#[sqlx::test]
async fn test_delete_user_not_found(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let err = repo.delete(999).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound { .. }));
}

#[sqlx::test]
async fn test_delete_user_leaves_other_users_untouched(pool: PgPool) {
    let frank = common::create_test_user(&pool, "Frank Foobar", 100).await;
    let crash = common::create_test_user(&pool, "Crash Coredump", 200).await;
    common::create_test_contact(&pool, frank, "+16502530000", "", 1).await;
    common::create_test_contact(&pool, crash, "", "crash@example.com", 2).await;

    let repo = PgUserRepository::new(Arc::new(pool.clone()));

    repo.delete(frank).await.unwrap();

    let survivor = repo.get(crash).await.unwrap();
    assert_eq!(survivor.contacts.len(), 1);
    assert_eq!(survivor.contacts[0].email, "crash@example.com");
}
