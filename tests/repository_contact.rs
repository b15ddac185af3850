mod common;

use contact_book::domain::entities::{ContactType, ContactUpdate, NewContact};
use contact_book::domain::repositories::ContactRepository;
use contact_book::error::AppError;
use contact_book::infrastructure::persistence::PgContactRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_create_and_get_contact(pool: PgPool) {
    let frank = common::create_test_user(&pool, "Frank Foobar", 100).await;

    let repo = PgContactRepository::new(Arc::new(pool));

    let contact_id = repo
        .create(
            frank,
            NewContact {
                phone_no: "+16502530000".to_string(),
                email: String::new(),
                contact_type: ContactType::Home,
            },
        )
        .await
        .unwrap();

    let contact = repo.get(contact_id).await.unwrap();
    assert_eq!(contact.id, contact_id);
    assert_eq!(contact.phone_no, "+16502530000");
    assert_eq!(contact.email, "");
    assert_eq!(contact.contact_type, ContactType::Home);
    assert_eq!(contact.user_id, frank);
}

#[sqlx::test]
async fn test_create_contact_for_missing_user(pool: PgPool) {
    let repo = PgContactRepository::new(Arc::new(pool));

    let err = repo
        .create(
            999,
            NewContact {
                phone_no: String::new(),
                email: "frank@example.com".to_string(),
                contact_type: ContactType::Work,
            },
        )
        .await
        .unwrap_err();

    match err {
        AppError::NotFound { message } => {
            assert_eq!(message, "User with id 999 was not found");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[sqlx::test]
async fn test_get_contact_not_found(pool: PgPool) {
    let repo = PgContactRepository::new(Arc::new(pool));

    let err = repo.get(999).await.unwrap_err();

    match err {
        AppError::NotFound { message } => {
            assert_eq!(message, "Contact with id 999 was not found");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[sqlx::test]
async fn test_list_for_user_is_scoped(pool: PgPool) {
    let frank = common::create_test_user(&pool, "Frank Foobar", 100).await;
    let crash = common::create_test_user(&pool, "Crash Coredump", 200).await;
    common::create_test_contact(&pool, frank, "+16502530000", "", 1).await;
    common::create_test_contact(&pool, frank, "", "frank@example.com", 2).await;
    common::create_test_contact(&pool, crash, "", "crash@example.com", 3).await;

    let repo = PgContactRepository::new(Arc::new(pool));

    let (contacts, total) = repo.list_for_user(frank, 100, 0).await.unwrap();
    assert_eq!(contacts.len(), 2);
    assert_eq!(total, 2);
    assert!(contacts.iter().all(|c| c.user_id == frank));
}

#[sqlx::test]
async fn test_list_for_user_window_and_total(pool: PgPool) {
    let frank = common::create_test_user(&pool, "Frank Foobar", 100).await;
    for i in 1..=3 {
        common::create_test_contact(&pool, frank, "", &format!("c{i}@example.com"), 1).await;
    }

    let repo = PgContactRepository::new(Arc::new(pool));

    let (contacts, total) = repo.list_for_user(frank, 2, 0).await.unwrap();
    assert_eq!(contacts.len(), 2);
    assert_eq!(total, 3);
    assert_eq!(contacts[0].email, "c1@example.com");

    let (contacts, total) = repo.list_for_user(frank, 2, 2).await.unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(total, 3);
    assert_eq!(contacts[0].email, "c3@example.com");
}

#[sqlx::test]
async fn test_list_for_missing_user(pool: PgPool) {
    let repo = PgContactRepository::new(Arc::new(pool));

    let err = repo.list_for_user(999, 100, 0).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound { .. }));
}

#[sqlx::test]
async fn test_update_contact_replaces_fields(pool: PgPool) {
    let frank = common::create_test_user(&pool, "Frank Foobar", 100).await;
    let contact = common::create_test_contact(&pool, frank, "+16502530000", "", 1).await;

    let repo = PgContactRepository::new(Arc::new(pool));

    repo.update(
        contact,
        ContactUpdate {
            phone_no: String::new(),
            email: "frank@example.com".to_string(),
            contact_type: ContactType::Other,
        },
    )
    .await
    .unwrap();

    let updated = repo.get(contact).await.unwrap();
    assert_eq!(updated.phone_no, "");
    assert_eq!(updated.email, "frank@example.com");
    assert_eq!(updated.contact_type, ContactType::Other);
}

#[sqlx::test]
async fn test_update_contact_not_found(pool: PgPool) {
    let repo = PgContactRepository::new(Arc::new(pool));

    let err = repo
        .update(
            999,
            ContactUpdate {
                phone_no: String::new(),
                email: "frank@example.com".to_string(),
                contact_type: ContactType::Work,
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound { .. }));
}

#[sqlx::test]
async fn test_delete_contact(pool: PgPool) {
    let frank = common::create_test_user(&pool, "Frank Foobar", 100).await;
    let contact = common::create_test_contact(&pool, frank, "+16502530000", "", 1).await;

    let repo = PgContactRepository::new(Arc::new(pool));

    repo.delete(contact).await.unwrap();

    let err = repo.get(contact).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
}

#[sqlx::test]
async fn test_delete_contact_not_found(pool: PgPool) {
    let repo = PgContactRepository::new(Arc::new(pool));

    let err = repo.delete(999).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound { .. }));
}

#[sqlx::test]
async fn test_delete_all_for_user_keeps_the_user_row(pool: PgPool) {
    let frank = common::create_test_user(&pool, "Frank Foobar", 100).await;
    for i in 1..=3 {
        common::create_test_contact(&pool, frank, "", &format!("c{i}@example.com"), 1).await;
    }

    let repo = PgContactRepository::new(Arc::new(pool.clone()));

    repo.delete_all_for_user(frank).await.unwrap();

    assert_eq!(common::count_contacts_for_user(&pool, frank).await, 0);

    let still_there: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE id = $1")
        .bind(frank)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(still_there, 1);
}

#[sqlx::test]
async fn test_delete_all_for_missing_user(pool: PgPool) {
    let repo = PgContactRepository::new(Arc::new(pool));

    let err = repo.delete_all_for_user(999).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound { .. }));
}
