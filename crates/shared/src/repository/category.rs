use crate::{
    abstract_trait::CategoryRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateCategoryRequest, ListParams, UpdateCategoryRequest},
    errors::RepositoryError,
    model::Category as CategoryModel,
    repository::sql::{execute_patch, patch_statement, total_count},
};
use async_trait::async_trait;
use serde_json::{Map, Value, json};
use sqlx::FromRow;
use tracing::{error, info};

#[derive(Clone)]
pub struct CategoryRepository {
    db: ConnectionPool,
}

impl CategoryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepositoryTrait for CategoryRepository {
    async fn find_all(
        &self,
        params: &ListParams,
    ) -> Result<(Vec<CategoryModel>, i64), RepositoryError> {
        info!("🔍 Fetching categories with search: {:?}", params.search);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let rows = sqlx::query(
            r#"
            SELECT category_id, category_name,
                   COUNT(*) OVER() AS total_count
            FROM categories
            WHERE ($1::TEXT IS NULL OR category_name ILIKE '%' || $1 || '%')
            ORDER BY category_id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(params.search_pattern())
        .bind(params.limit)
        .bind(params.offset)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch categories: {:?}", e);
            RepositoryError::from(e)
        })?;

        let total = total_count(&rows)?;
        let items = rows
            .iter()
            .map(CategoryModel::from_row)
            .collect::<Result<Vec<_>, _>>()?;

        info!("✅ Found {} categories (total {})", items.len(), total);
        Ok((items, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<CategoryModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, CategoryModel>(
            "SELECT category_id, category_name FROM categories WHERE category_id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch category ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        Ok(result)
    }

    async fn create_category(&self, req: &CreateCategoryRequest) -> Result<i32, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO categories (category_name)
            VALUES ($1)
            RETURNING category_id
            "#,
        )
            .bind(&req.category_name)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create category {}: {:?}", req.category_name, err);
            RepositoryError::classify(err)
        })?;

        info!("✅ Created category ID {}", id);
        Ok(id)
    }

    async fn update_category(&self, id: i32, req: &UpdateCategoryRequest) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            UPDATE categories
            SET category_name = $2
            WHERE category_id = $1
            "#,
        )
        .bind(id)
            .bind(&req.category_name)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update category ID {}: {:?}", id, err);
            RepositoryError::classify(err)
        })?;

        info!("🔄 Updated category ID {} ({} rows)", id, result.rows_affected());
        Ok(result.rows_affected())
    }

    async fn patch_category(
        &self,
        id: i32,
        fields: &Map<String, Value>,
    ) -> Result<u64, RepositoryError> {
        let (statement, args) =
            patch_statement("categories", CategoryModel::PATCHABLE, fields, &[("category_id", json!(id))])?;

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;
        let affected = execute_patch(&mut conn, &statement, args).await?;

        info!("🩹 Patched category ID {} ({} rows)", id, affected);
        Ok(affected)
    }

    async fn delete_category(&self, id: i32) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM categories WHERE category_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete category ID {}: {:?}", id, err);
                RepositoryError::classify(err)
            })?;

        info!("🗑️ Deleted category ID {} ({} rows)", id, result.rows_affected());
        Ok(result.rows_affected())
    }
}
