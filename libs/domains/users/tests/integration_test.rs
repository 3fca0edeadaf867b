//! Postgres integration tests for the Users domain
//!
//! Run against a throwaway container with migrations applied:
//! `cargo test -p domain_users -- --ignored`

use domain_users::*;
use test_utils::{TestDataBuilder, TestDatabase, assertions::assert_some};

fn dto(first: &str, last: &str, email: &str) -> UserDto {
    UserDto {
        id: None,
        first_name: Some(first.to_string()),
        last_name: Some(last.to_string()),
        email: Some(email.to_string()),
    }
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_create_and_fetch_user() {
    let db = TestDatabase::new().await;
    let service = UserService::new(PgUserRepository::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("pg_create_and_fetch");

    let created = service
        .create_user(dto("John", "Doe", &builder.email("john.doe")))
        .await
        .unwrap();
    let id = assert_some(created.id, "created user id");

    let fetched = service.get_user_by_id(id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_duplicate_email_is_conflict() {
    let db = TestDatabase::new().await;
    let service = UserService::new(PgUserRepository::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("pg_duplicate_email");
    let email = builder.email("john.doe");

    service
        .create_user(dto("John", "Doe", &email))
        .await
        .unwrap();

    let result = service.create_user(dto("Jane", "Doe", &email)).await;
    assert!(matches!(result, Err(UserError::Conflict(_))));
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_update_to_taken_email_is_conflict() {
    let db = TestDatabase::new().await;
    let service = UserService::new(PgUserRepository::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("pg_update_conflict");
    let john_email = builder.email("john.doe");

    service
        .create_user(dto("John", "Doe", &john_email))
        .await
        .unwrap();
    let jane = service
        .create_user(dto("Jane", "Doe", &builder.email("jane.doe")))
        .await
        .unwrap();
    let jane_id = assert_some(jane.id, "second user id");

    let result = service
        .update_user(jane_id, dto("Jane", "Doe", &john_email))
        .await;
    assert!(matches!(result, Err(UserError::Conflict(_))));

    // The failed update leaves the row untouched
    assert_eq!(service.get_user_by_id(jane_id).await.unwrap(), jane);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_users_without_email_never_collide() {
    let db = TestDatabase::new().await;
    let service = UserService::new(PgUserRepository::new(db.connection()));

    let first = UserDto {
        first_name: Some("Anon".to_string()),
        ..UserDto::default()
    };

    service.create_user(first.clone()).await.unwrap();
    service.create_user(first).await.unwrap();

    assert_eq!(service.get_all_users().await.unwrap().len(), 2);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_update_keeps_id_and_replaces_fields() {
    let db = TestDatabase::new().await;
    let service = UserService::new(PgUserRepository::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("pg_update");

    let created = service
        .create_user(dto("John", "Doe", &builder.email("john.doe")))
        .await
        .unwrap();
    let id = created.id.unwrap();

    let first_name = builder.name("first", "updated");
    let updated = service
        .update_user(id, dto(&first_name, "Doer", &builder.email("john.doer")))
        .await
        .unwrap();

    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.first_name.as_deref(), Some(first_name.as_str()));
    assert_eq!(updated.last_name.as_deref(), Some("Doer"));
    assert_eq!(service.get_user_by_id(id).await.unwrap(), updated);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_list_users_in_id_order() {
    let db = TestDatabase::new().await;
    let service = UserService::new(PgUserRepository::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("pg_list");

    for local in ["c", "a", "b"] {
        service
            .create_user(dto(local, local, &builder.email(local)))
            .await
            .unwrap();
    }

    let ids: Vec<i64> = service
        .get_all_users()
        .await
        .unwrap()
        .into_iter()
        .filter_map(|u| u.id)
        .collect();

    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
    assert_eq!(ids.len(), 3);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_delete_then_delete_again_is_not_found() {
    let db = TestDatabase::new().await;
    let service = UserService::new(PgUserRepository::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("pg_delete");

    let id = service
        .create_user(dto("John", "Doe", &builder.email("john.doe")))
        .await
        .unwrap()
        .id
        .unwrap();

    service.delete_user(id).await.unwrap();

    assert!(matches!(
        service.get_user_by_id(id).await,
        Err(UserError::NotFound(_))
    ));
    assert!(matches!(
        service.delete_user(id).await,
        Err(UserError::NotFound(_))
    ));
}
