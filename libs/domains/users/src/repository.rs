use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::User;

/// Repository trait for User persistence
///
/// Email uniqueness is enforced here, not by the service: a colliding save
/// fails with [`UserError::Conflict`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert when `user.id` is `None`, otherwise overwrite the stored row.
    ///
    /// Returns the stored user, with its generated id on insert.
    async fn save(&self, user: User) -> UserResult<User>;

    async fn find_by_id(&self, id: i64) -> UserResult<Option<User>>;

    /// All users in storage order
    async fn find_all(&self) -> UserResult<Vec<User>>;

    async fn exists_by_id(&self, id: i64) -> UserResult<bool>;

    /// Removing an id that does not exist is not an error.
    async fn delete_by_id(&self, id: i64) -> UserResult<()>;
}

#[derive(Debug, Default)]
struct Store {
    users: BTreeMap<i64, User>,
    last_id: i64,
}

/// In-memory implementation of UserRepository (for development/testing)
///
/// Ids are handed out sequentially, so iteration order is insertion order.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, mut user: User) -> UserResult<User> {
        let mut store = self.store.write().await;

        if let Some(email) = user.email.as_deref() {
            let taken = store
                .users
                .values()
                .any(|existing| existing.id != user.id && existing.email.as_deref() == Some(email));

            if taken {
                return Err(UserError::Conflict(format!(
                    "email '{}' already exists",
                    email
                )));
            }
        }

        let id = match user.id {
            Some(id) if store.users.contains_key(&id) => id,
            Some(id) => return Err(UserError::NotFound(id)),
            None => {
                store.last_id = store
                    .last_id
                    .checked_add(1)
                    .ok_or_else(|| UserError::Internal("user id sequence exhausted".to_string()))?;
                store.last_id
            }
        };

        user.id = Some(id);
        store.users.insert(id, user.clone());

        tracing::debug!(user_id = id, "Stored user in memory");
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store.users.get(&id).cloned())
    }

    async fn find_all(&self) -> UserResult<Vec<User>> {
        let store = self.store.read().await;
        Ok(store.users.values().cloned().collect())
    }

    async fn exists_by_id(&self, id: i64) -> UserResult<bool> {
        let store = self.store.read().await;
        Ok(store.users.contains_key(&id))
    }

    async fn delete_by_id(&self, id: i64) -> UserResult<()> {
        let mut store = self.store.write().await;
        store.users.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first: &str, email: Option<&str>) -> User {
        User {
            id: None,
            first_name: Some(first.to_string()),
            last_name: Some("Doe".to_string()),
            email: email.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let repo = InMemoryUserRepository::new();

        let first = repo.save(user("John", Some("john@example.com"))).await.unwrap();
        let second = repo.save(user("Jane", Some("jane@example.com"))).await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
    }

    #[tokio::test]
    async fn test_save_duplicate_email_conflicts() {
        let repo = InMemoryUserRepository::new();
        repo.save(user("John", Some("john@example.com"))).await.unwrap();

        let result = repo.save(user("Johnny", Some("john@example.com"))).await;
        assert!(matches!(result, Err(UserError::Conflict(_))));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_users_without_email_never_conflict() {
        let repo = InMemoryUserRepository::new();
        repo.save(user("John", None)).await.unwrap();
        repo.save(user("Jane", None)).await.unwrap();

        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_keeps_own_email() {
        let repo = InMemoryUserRepository::new();
        let mut saved = repo.save(user("John", Some("john@example.com"))).await.unwrap();

        saved.first_name = Some("Johnathan".to_string());
        let updated = repo.save(saved.clone()).await.unwrap();

        assert_eq!(updated, saved);
        assert_eq!(repo.find_by_id(1).await.unwrap(), Some(saved));
    }

    #[tokio::test]
    async fn test_update_to_other_users_email_conflicts() {
        let repo = InMemoryUserRepository::new();
        repo.save(user("John", Some("john@example.com"))).await.unwrap();
        let mut jane = repo.save(user("Jane", Some("jane@example.com"))).await.unwrap();

        jane.email = Some("john@example.com".to_string());
        let result = repo.save(jane).await;
        assert!(matches!(result, Err(UserError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_save_with_unknown_id_is_not_found() {
        let repo = InMemoryUserRepository::new();
        let mut ghost = user("Ghost", None);
        ghost.id = Some(5);

        let result = repo.save(ghost).await;
        assert!(matches!(result, Err(UserError::NotFound(5))));
    }

    #[tokio::test]
    async fn test_find_all_in_insertion_order() {
        let repo = InMemoryUserRepository::new();
        for name in ["A", "B", "C"] {
            repo.save(user(name, None)).await.unwrap();
        }

        let names: Vec<_> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .filter_map(|u| u.first_name)
            .collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = InMemoryUserRepository::new();
        let saved = repo.save(user("John", None)).await.unwrap();
        let id = saved.id.unwrap();

        assert!(repo.exists_by_id(id).await.unwrap());
        repo.delete_by_id(id).await.unwrap();
        assert!(!repo.exists_by_id(id).await.unwrap());

        repo.delete_by_id(id).await.unwrap();
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let repo = InMemoryUserRepository::new();
        let first = repo.save(user("John", None)).await.unwrap();
        repo.delete_by_id(first.id.unwrap()).await.unwrap();

        let second = repo.save(user("Jane", None)).await.unwrap();
        assert_eq!(second.id, Some(2));
    }

    #[tokio::test]
    async fn test_exhausted_id_sequence_is_internal_error() {
        let repo = InMemoryUserRepository {
            store: Arc::new(RwLock::new(Store {
                users: BTreeMap::new(),
                last_id: i64::MAX,
            })),
        };

        let result = repo.save(user("John", None)).await;

        assert!(matches!(result, Err(UserError::Internal(_))));
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
