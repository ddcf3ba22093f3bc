use crate::{
    abstract_trait::UserRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateUserRequest, ListParams, UpdateUserRequest},
    errors::RepositoryError,
    model::User as UserModel,
    repository::sql::total_count,
};
use async_trait::async_trait;
use sqlx::FromRow;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct UserRepository {
    db: ConnectionPool,
}

impl UserRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn find_all(
        &self,
        params: &ListParams,
    ) -> Result<(Vec<UserModel>, i64), RepositoryError> {
        info!("🔍 Fetching users with search: {:?}", params.search);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let rows = sqlx::query(
            r#"
            SELECT id, first_name, last_name, login, password, phone_number,
                   created_at, updated_at,
                   COUNT(*) OVER() AS total_count
            FROM users
            WHERE ($1::TEXT IS NULL
                   OR login ILIKE '%' || $1 || '%'
                   OR first_name ILIKE '%' || $1 || '%'
                   OR last_name ILIKE '%' || $1 || '%')
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(params.search_pattern())
        .bind(params.limit)
        .bind(params.offset)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch users: {:?}", e);
            RepositoryError::from(e)
        })?;

        let total = total_count(&rows)?;
        let users = rows
            .iter()
            .map(UserModel::from_row)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((users, total))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, UserModel>(
            r#"
            SELECT id, first_name, last_name, login, password, phone_number,
                   created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch user {}: {:?}", id, err);
            RepositoryError::from(err)
        })
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<UserModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, UserModel>(
            r#"
            SELECT id, first_name, last_name, login, password, phone_number,
                   created_at, updated_at
            FROM users
            WHERE login = $1
            "#,
        )
        .bind(login)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch user by login {}: {:?}", login, err);
            RepositoryError::from(err)
        })
    }

    async fn create_user(
        &self,
        req: &CreateUserRequest,
        password_hash: &str,
    ) -> Result<Uuid, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let id = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO users (id, first_name, last_name, login, password, phone_number,
                               created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, current_timestamp, current_timestamp)
            "#,
        )
        .bind(id)
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.login)
        .bind(password_hash)
        .bind(&req.phone_number)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create user {}: {:?}", req.login, err);
            RepositoryError::classify(err)
        })?;

        info!("✅ Created user {} ({})", id, req.login);
        Ok(id)
    }

    async fn update_user(
        &self,
        id: Uuid,
        req: &UpdateUserRequest,
        password_hash: Option<&str>,
    ) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            UPDATE users
            SET first_name = $2,
                last_name = $3,
                login = $4,
                password = COALESCE($5, password),
                phone_number = $6,
                updated_at = current_timestamp
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.login)
        .bind(password_hash)
        .bind(&req.phone_number)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update user {}: {:?}", id, err);
            RepositoryError::classify(err)
        })?;

        info!("🔄 Updated user {} ({} rows)", id, result.rows_affected());
        Ok(result.rows_affected())
    }

    async fn delete_user(&self, id: Uuid) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete user {}: {:?}", id, err);
                RepositoryError::from(err)
            })?;

        info!("🗑️ Deleted user {} ({} rows)", id, result.rows_affected());
        Ok(result.rows_affected())
    }
}
