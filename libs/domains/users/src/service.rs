use std::sync::Arc;

use crate::error::{UserError, UserResult};
use crate::models::{User, UserDto};
use crate::repository::UserRepository;

/// Service layer for User operations
///
/// Converts between [`UserDto`] and [`User`] and turns missing records into
/// [`UserError::NotFound`]. Storage errors pass through unchanged.
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Persist a new user. Any id in `dto` is ignored.
    pub async fn create_user(&self, dto: UserDto) -> UserResult<UserDto> {
        tracing::info!(email = ?dto.email, "Attempting to create a new user");

        let saved = self.repository.save(User::from(dto)).await?;

        tracing::info!(user_id = ?saved.id, "Successfully created user");
        Ok(saved.into())
    }

    pub async fn get_user_by_id(&self, id: i64) -> UserResult<UserDto> {
        tracing::debug!(user_id = id, "Fetching user");

        self.repository
            .find_by_id(id)
            .await?
            .map(UserDto::from)
            .ok_or(UserError::NotFound(id))
    }

    pub async fn get_all_users(&self) -> UserResult<Vec<UserDto>> {
        let users = self.repository.find_all().await?;
        tracing::debug!(count = users.len(), "Fetched all users");

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Overwrite first name, last name and email of an existing user.
    pub async fn update_user(&self, id: i64, dto: UserDto) -> UserResult<UserDto> {
        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        user.apply(dto);
        let saved = self.repository.save(user).await?;

        tracing::info!(user_id = id, "Updated user");
        Ok(saved.into())
    }

    /// Existence check and delete are separate calls; a concurrent delete of
    /// the same id between them goes unnoticed.
    pub async fn delete_user(&self, id: i64) -> UserResult<()> {
        if !self.repository.exists_by_id(id).await? {
            return Err(UserError::NotFound(id));
        }

        self.repository.delete_by_id(id).await?;

        tracing::info!(user_id = id, "Deleted user");
        Ok(())
    }
}
