use crate::{
    abstract_trait::ProductRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateProductRequest, ListParams, UpdateProductRequest},
    errors::RepositoryError,
    model::Product as ProductModel,
    repository::sql::{execute_patch, patch_statement, total_count},
};
use async_trait::async_trait;
use serde_json::{Map, Value, json};
use sqlx::FromRow;
use tracing::{error, info};

const PRODUCT_SELECT: &str = r#"
    SELECT p.product_id, p.product_name,
           p.brand_id, b.brand_name,
           p.category_id, c.category_name,
           p.model_year, p.list_price
    FROM products p
    JOIN brands b ON b.brand_id = p.brand_id
    JOIN categories c ON c.category_id = p.category_id
"#;

#[derive(Clone)]
pub struct ProductRepository {
    db: ConnectionPool,
}

impl ProductRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepositoryTrait for ProductRepository {
    async fn find_all(
        &self,
        params: &ListParams,
    ) -> Result<(Vec<ProductModel>, i64), RepositoryError> {
        info!("🔍 Fetching products with search: {:?}", params.search);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let statement = format!(
            r#"
            SELECT product.*, COUNT(*) OVER() AS total_count
            FROM ({PRODUCT_SELECT}) product
            WHERE ($1::TEXT IS NULL
                   OR product.product_name ILIKE '%' || $1 || '%'
                   OR product.brand_name ILIKE '%' || $1 || '%'
                   OR product.category_name ILIKE '%' || $1 || '%')
            ORDER BY product.product_id
            LIMIT $2 OFFSET $3
            "#
        );

        let rows = sqlx::query(&statement)
            .bind(params.search_pattern())
            .bind(params.limit)
            .bind(params.offset)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch products: {:?}", e);
                RepositoryError::from(e)
            })?;

        let total = total_count(&rows)?;
        let products = rows
            .iter()
            .map(ProductModel::from_row)
            .collect::<Result<Vec<_>, _>>()?;

        info!("✅ Found {} products (total {})", products.len(), total);
        Ok((products, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let statement = format!("{PRODUCT_SELECT} WHERE p.product_id = $1");
        let result = sqlx::query_as::<_, ProductModel>(&statement)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to fetch product ID {}: {:?}", id, err);
                RepositoryError::from(err)
            })?;

        Ok(result)
    }

    async fn create_product(&self, req: &CreateProductRequest) -> Result<i32, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO products (product_name, brand_id, category_id, model_year, list_price)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING product_id
            "#,
        )
        .bind(&req.product_name)
        .bind(req.brand_id)
        .bind(req.category_id)
        .bind(req.model_year)
        .bind(req.list_price)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create product {}: {:?}", req.product_name, err);
            RepositoryError::classify(err)
        })?;

        info!("✅ Created product ID {} ({})", id, req.product_name);
        Ok(id)
    }

    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            UPDATE products
            SET product_name = $2,
                brand_id = $3,
                category_id = $4,
                model_year = $5,
                list_price = $6
            WHERE product_id = $1
            "#,
        )
        .bind(id)
        .bind(&req.product_name)
        .bind(req.brand_id)
        .bind(req.category_id)
        .bind(req.model_year)
        .bind(req.list_price)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product ID {}: {:?}", id, err);
            RepositoryError::classify(err)
        })?;

        info!("🔄 Updated product ID {} ({} rows)", id, result.rows_affected());
        Ok(result.rows_affected())
    }

    async fn patch_product(
        &self,
        id: i32,
        fields: &Map<String, Value>,
    ) -> Result<u64, RepositoryError> {
        let (statement, args) = patch_statement(
            "products",
            ProductModel::PATCHABLE,
            fields,
            &[("product_id", json!(id))],
        )?;

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;
        let affected = execute_patch(&mut conn, &statement, args).await?;

        info!("🩹 Patched product ID {} ({} rows)", id, affected);
        Ok(affected)
    }

    async fn delete_product(&self, id: i32) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete product ID {}: {:?}", id, err);
                RepositoryError::classify(err)
            })?;

        info!("🗑️ Deleted product ID {} ({} rows)", id, result.rows_affected());
        Ok(result.rows_affected())
    }
}
