use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder, SqlErr};

use crate::{
    entity,
    error::{UserError, UserResult},
    models::User,
    repository::UserRepository,
};

pub struct PgUserRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

/// Unique violations become [`UserError::Conflict`]; everything else stays a
/// database error.
fn map_db_err(err: DbErr) -> UserError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => UserError::Conflict(detail),
        _ => UserError::Database(err),
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn save(&self, user: User) -> UserResult<User> {
        let id = user.id;
        let active_model: entity::ActiveModel = user.into();

        let result = match id {
            None => self.base.insert(active_model).await,
            Some(_) => self.base.update(active_model).await,
        };

        let model = result.map_err(|e| match (e, id) {
            (DbErr::RecordNotUpdated, Some(id)) => UserError::NotFound(id),
            (e, _) => map_db_err(e),
        })?;

        tracing::debug!(user_id = model.id, "Saved user");
        Ok(model.into())
    }

    async fn find_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(Into::into))
    }

    async fn find_all(&self) -> UserResult<Vec<User>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(self.base.db())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn exists_by_id(&self, id: i64) -> UserResult<bool> {
        Ok(self.base.exists_by_id(id).await?)
    }

    async fn delete_by_id(&self, id: i64) -> UserResult<()> {
        let rows_affected = self.base.delete_by_id(id).await?;

        if rows_affected == 0 {
            tracing::debug!(user_id = id, "Delete matched no rows");
        }
        Ok(())
    }
}
