use crate::{
    abstract_trait::BrandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateBrandRequest, ListParams, UpdateBrandRequest},
    errors::RepositoryError,
    model::Brand as BrandModel,
    repository::sql::{execute_patch, patch_statement, total_count},
};
use async_trait::async_trait;
use serde_json::{Map, Value, json};
use sqlx::FromRow;
use tracing::{error, info};

#[derive(Clone)]
pub struct BrandRepository {
    db: ConnectionPool,
}

impl BrandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BrandRepositoryTrait for BrandRepository {
    async fn find_all(
        &self,
        params: &ListParams,
    ) -> Result<(Vec<BrandModel>, i64), RepositoryError> {
        info!("🔍 Fetching brands with search: {:?}", params.search);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let rows = sqlx::query(
            r#"
            SELECT brand_id, brand_name,
                   COUNT(*) OVER() AS total_count
            FROM brands
            WHERE ($1::TEXT IS NULL OR brand_name ILIKE '%' || $1 || '%')
            ORDER BY brand_id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(params.search_pattern())
        .bind(params.limit)
        .bind(params.offset)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch brands: {:?}", e);
            RepositoryError::from(e)
        })?;

        let total = total_count(&rows)?;
        let items = rows
            .iter()
            .map(BrandModel::from_row)
            .collect::<Result<Vec<_>, _>>()?;

        info!("✅ Found {} brands (total {})", items.len(), total);
        Ok((items, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<BrandModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, BrandModel>(
            "SELECT brand_id, brand_name FROM brands WHERE brand_id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch brand ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        Ok(result)
    }

    async fn create_brand(&self, req: &CreateBrandRequest) -> Result<i32, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO brands (brand_name)
            VALUES ($1)
            RETURNING brand_id
            "#,
        )
            .bind(&req.brand_name)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create brand {}: {:?}", req.brand_name, err);
            RepositoryError::classify(err)
        })?;

        info!("✅ Created brand ID {}", id);
        Ok(id)
    }

    async fn update_brand(&self, id: i32, req: &UpdateBrandRequest) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            UPDATE brands
            SET brand_name = $2
            WHERE brand_id = $1
            "#,
        )
        .bind(id)
            .bind(&req.brand_name)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update brand ID {}: {:?}", id, err);
            RepositoryError::classify(err)
        })?;

        info!("🔄 Updated brand ID {} ({} rows)", id, result.rows_affected());
        Ok(result.rows_affected())
    }

    async fn patch_brand(
        &self,
        id: i32,
        fields: &Map<String, Value>,
    ) -> Result<u64, RepositoryError> {
        let (statement, args) =
            patch_statement("brands", BrandModel::PATCHABLE, fields, &[("brand_id", json!(id))])?;

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;
        let affected = execute_patch(&mut conn, &statement, args).await?;

        info!("🩹 Patched brand ID {} ({} rows)", id, affected);
        Ok(affected)
    }

    async fn delete_brand(&self, id: i32) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM brands WHERE brand_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete brand ID {}: {:?}", id, err);
                RepositoryError::classify(err)
            })?;

        info!("🗑️ Deleted brand ID {} ({} rows)", id, result.rows_affected());
        Ok(result.rows_affected())
    }
}
