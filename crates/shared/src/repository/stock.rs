use crate::{
    abstract_trait::StockRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateStockRequest, ListParams, UpdateStockRequest},
    errors::RepositoryError,
    model::Stock as StockModel,
    repository::sql::{execute_patch, patch_statement, total_count},
};
use async_trait::async_trait;
use serde_json::{Map, Value, json};
use sqlx::FromRow;
use tracing::{error, info};

const STOCK_SELECT: &str = r#"
    SELECT sk.store_id, sk.product_id, sk.quantity,
           st.store_name, st.phone AS store_phone, st.email AS store_email,
           st.street AS store_street, st.city AS store_city, st.state AS store_state,
           st.zip_code AS store_zip_code,
           p.product_name, p.brand_id, p.category_id, p.model_year, p.list_price
    FROM stocks sk
    JOIN stores st ON st.store_id = sk.store_id
    JOIN products p ON p.product_id = sk.product_id
"#;

#[derive(Clone)]
pub struct StockRepository {
    db: ConnectionPool,
}

impl StockRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StockRepositoryTrait for StockRepository {
    async fn find_all(
        &self,
        params: &ListParams,
    ) -> Result<(Vec<StockModel>, i64), RepositoryError> {
        info!("🔍 Fetching stocks with search: {:?}", params.search);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let statement = format!(
            r#"
            SELECT stock.*, COUNT(*) OVER() AS total_count
            FROM ({STOCK_SELECT}) stock
            WHERE ($1::TEXT IS NULL
                   OR stock.store_name ILIKE '%' || $1 || '%'
                   OR stock.product_name ILIKE '%' || $1 || '%')
            ORDER BY stock.store_id, stock.product_id
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
                error!("❌ Failed to fetch stocks: {:?}", e);
                RepositoryError::from(e)
            })?;

        let total = total_count(&rows)?;
        let stocks = rows
            .iter()
            .map(StockModel::from_row)
            .collect::<Result<Vec<_>, _>>()?;

        info!("✅ Found {} stocks (total {})", stocks.len(), total);
        Ok((stocks, total))
    }

    async fn find_by_id_product_stock(
        &self,
        store_id: i32,
        product_id: i32,
    ) -> Result<Option<StockModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let statement = format!("{STOCK_SELECT} WHERE sk.store_id = $1 AND sk.product_id = $2");
        let result = sqlx::query_as::<_, StockModel>(&statement)
            .bind(store_id)
            .bind(product_id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to fetch stock store={} product={}: {:?}",
                    store_id, product_id, err
                );
                RepositoryError::from(err)
            })?;

        Ok(result)
    }

    async fn create_stock(&self, req: &CreateStockRequest) -> Result<(i32, i32), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query("INSERT INTO stocks (store_id, product_id, quantity) VALUES ($1, $2, $3)")
            .bind(req.store_id)
            .bind(req.product_id)
            .bind(req.quantity)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to create stock store={} product={}: {:?}",
                    req.store_id, req.product_id, err
                );
                RepositoryError::classify(err)
            })?;

        info!(
            "✅ Created stock store={} product={} quantity={}",
            req.store_id, req.product_id, req.quantity
        );
        Ok((req.store_id, req.product_id))
    }

    async fn update_stock(
        &self,
        store_id: i32,
        product_id: i32,
        req: &UpdateStockRequest,
    ) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            "UPDATE stocks SET quantity = $3 WHERE store_id = $1 AND product_id = $2",
        )
        .bind(store_id)
        .bind(product_id)
        .bind(req.quantity)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to update stock store={} product={}: {:?}",
                store_id, product_id, err
            );
            RepositoryError::classify(err)
        })?;

        info!(
            "🔄 Updated stock store={} product={} ({} rows)",
            store_id,
            product_id,
            result.rows_affected()
        );
        Ok(result.rows_affected())
    }

    async fn patch_stock(
        &self,
        store_id: i32,
        product_id: i32,
        fields: &Map<String, Value>,
    ) -> Result<u64, RepositoryError> {
        let (statement, args) = patch_statement(
            "stocks",
            StockModel::PATCHABLE,
            fields,
            &[("store_id", json!(store_id)), ("product_id", json!(product_id))],
        )?;

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;
        execute_patch(&mut conn, &statement, args).await
    }

    async fn delete_stock(&self, store_id: i32, product_id: i32) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM stocks WHERE store_id = $1 AND product_id = $2")
            .bind(store_id)
            .bind(product_id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to delete stock store={} product={}: {:?}",
                    store_id, product_id, err
                );
                RepositoryError::classify(err)
            })?;

        info!(
            "🗑️ Deleted stock store={} product={} ({} rows)",
            store_id,
            product_id,
            result.rows_affected()
        );
        Ok(result.rows_affected())
    }
}
