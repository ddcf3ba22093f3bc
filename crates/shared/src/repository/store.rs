use crate::{
    abstract_trait::StoreRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateStoreRequest, ListParams, UpdateStoreRequest},
    errors::RepositoryError,
    model::Store as StoreModel,
    repository::sql::{execute_patch, patch_statement, total_count},
};
use async_trait::async_trait;
use serde_json::{Map, Value, json};
use sqlx::FromRow;
use tracing::{error, info};

#[derive(Clone)]
pub struct StoreRepository {
    db: ConnectionPool,
}

impl StoreRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StoreRepositoryTrait for StoreRepository {
    async fn find_all(
        &self,
        params: &ListParams,
    ) -> Result<(Vec<StoreModel>, i64), RepositoryError> {
        info!("🔍 Fetching stores with search: {:?}", params.search);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let rows = sqlx::query(
            r#"
            SELECT store_id, store_name, phone, email, street, city, state, zip_code,
                   COUNT(*) OVER() AS total_count
            FROM stores
            WHERE ($1::TEXT IS NULL OR store_name ILIKE '%' || $1 || '%'
                   OR city ILIKE '%' || $1 || '%')
            ORDER BY store_id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(params.search_pattern())
        .bind(params.limit)
        .bind(params.offset)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch stores: {:?}", e);
            RepositoryError::from(e)
        })?;

        let total = total_count(&rows)?;
        let items = rows
            .iter()
            .map(StoreModel::from_row)
            .collect::<Result<Vec<_>, _>>()?;

        info!("✅ Found {} stores (total {})", items.len(), total);
        Ok((items, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<StoreModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, StoreModel>(
            "SELECT store_id, store_name, phone, email, street, city, state, zip_code FROM stores WHERE store_id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch store ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        Ok(result)
    }

    async fn create_store(&self, req: &CreateStoreRequest) -> Result<i32, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO stores (store_name, phone, email, street, city, state, zip_code)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING store_id
            "#,
        )
            .bind(&req.store_name)
            .bind(&req.phone)
            .bind(&req.email)
            .bind(&req.street)
            .bind(&req.city)
            .bind(&req.state)
            .bind(&req.zip_code)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create store {}: {:?}", req.store_name, err);
            RepositoryError::classify(err)
        })?;

        info!("✅ Created store ID {}", id);
        Ok(id)
    }

    async fn update_store(&self, id: i32, req: &UpdateStoreRequest) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            UPDATE stores
            SET store_name = $2,
                phone = $3,
                email = $4,
                street = $5,
                city = $6,
                state = $7,
                zip_code = $8
            WHERE store_id = $1
            "#,
        )
        .bind(id)
            .bind(&req.store_name)
            .bind(&req.phone)
            .bind(&req.email)
            .bind(&req.street)
            .bind(&req.city)
            .bind(&req.state)
            .bind(&req.zip_code)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update store ID {}: {:?}", id, err);
            RepositoryError::classify(err)
        })?;

        info!("🔄 Updated store ID {} ({} rows)", id, result.rows_affected());
        Ok(result.rows_affected())
    }

    async fn patch_store(
        &self,
        id: i32,
        fields: &Map<String, Value>,
    ) -> Result<u64, RepositoryError> {
        let (statement, args) =
            patch_statement("stores", StoreModel::PATCHABLE, fields, &[("store_id", json!(id))])?;

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;
        let affected = execute_patch(&mut conn, &statement, args).await?;

        info!("🩹 Patched store ID {} ({} rows)", id, affected);
        Ok(affected)
    }

    async fn delete_store(&self, id: i32) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM stores WHERE store_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete store ID {}: {:?}", id, err);
                RepositoryError::classify(err)
            })?;

        info!("🗑️ Deleted store ID {} ({} rows)", id, result.rows_affected());
        Ok(result.rows_affected())
    }
}
