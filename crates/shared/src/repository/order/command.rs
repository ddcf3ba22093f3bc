use crate::{
    abstract_trait::OrderCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateOrderRequest, NewOrderItem, UpdateOrderRequest},
    errors::RepositoryError,
    model::Order as OrderModel,
    repository::sql::{execute_patch, patch_statement},
};
use async_trait::async_trait;
use serde_json::{Map, Value, json};
use sqlx::{PgConnection, Row};
use tracing::{error, info, warn};

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

/// Locks the order row for the rest of the transaction and returns its store.
async fn lock_order(conn: &mut PgConnection, order_id: i32) -> Result<Option<i32>, RepositoryError> {
    sqlx::query_scalar::<_, i32>("SELECT store_id FROM orders WHERE order_id = $1 FOR UPDATE")
        .bind(order_id)
        .fetch_optional(conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to lock order ID {}: {:?}", order_id, err);
            RepositoryError::from(err)
        })
}

/// Rejects the pending write when it moved the order to another store while
/// items drawn from the locked store's stock are attached.
async fn ensure_store_kept(
    conn: &mut PgConnection,
    order_id: i32,
    locked_store: i32,
) -> Result<(), RepositoryError> {
    let moved_with_items = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT o.store_id <> $2
               AND EXISTS (SELECT 1 FROM order_items i WHERE i.order_id = o.order_id)
        FROM orders o
        WHERE o.order_id = $1
        "#,
    )
    .bind(order_id)
    .bind(locked_store)
    .fetch_optional(conn)
    .await
    .map_err(RepositoryError::from)?
    .unwrap_or(false);

    if moved_with_items {
        warn!(
            "⚠️ Order ID {} has items from store {}, store change rolled back",
            order_id, locked_store
        );
        return Err(RepositoryError::OrderHasItems);
    }
    Ok(())
}

/// Returns units to `(store_id, product_id)`, recreating the stock row when it
/// was removed in the meantime.
const RESTORE_STOCK: &str = r#"
    INSERT INTO stocks (store_id, product_id, quantity)
    VALUES ($1, $2, $3)
    ON CONFLICT (store_id, product_id)
    DO UPDATE SET quantity = stocks.quantity + EXCLUDED.quantity
"#;

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_order(&self, req: &CreateOrderRequest) -> Result<i32, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO orders (customer_id, order_status, order_date, required_date,
                                shipped_date, store_id, staff_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING order_id
            "#,
        )
        .bind(req.customer_id)
        .bind(req.order_status)
        .bind(req.order_date)
        .bind(req.required_date)
        .bind(req.shipped_date)
        .bind(req.store_id)
        .bind(req.staff_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to create order for customer {}: {:?}",
                req.customer_id, err
            );
            RepositoryError::classify(err)
        })?;

        info!("✅ Created order ID {} for customer {}", id, req.customer_id);
        Ok(id)
    }

    async fn update_order(
        &self,
        id: i32,
        req: &UpdateOrderRequest,
    ) -> Result<u64, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let Some(locked_store) = lock_order(&mut *tx, id).await? else {
            return Ok(0);
        };

        let result = sqlx::query(
            r#"
            UPDATE orders
            SET customer_id = $2,
                order_status = $3,
                order_date = $4,
                required_date = $5,
                shipped_date = $6,
                store_id = $7,
                staff_id = $8
            WHERE order_id = $1
            "#,
        )
        .bind(id)
        .bind(req.customer_id)
        .bind(req.order_status)
        .bind(req.order_date)
        .bind(req.required_date)
        .bind(req.shipped_date)
        .bind(req.store_id)
        .bind(req.staff_id)
        .execute(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to update order ID {}: {:?}", id, err);
            RepositoryError::classify(err)
        })?;

        ensure_store_kept(&mut *tx, id, locked_store).await?;
        tx.commit().await.map_err(RepositoryError::from)?;

        info!("🔄 Updated order ID {} ({} rows)", id, result.rows_affected());
        Ok(result.rows_affected())
    }

    async fn patch_order(
        &self,
        id: i32,
        fields: &Map<String, Value>,
    ) -> Result<u64, RepositoryError> {
        let (statement, args) =
            patch_statement("orders", OrderModel::PATCHABLE, fields, &[("order_id", json!(id))])?;

        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let Some(locked_store) = lock_order(&mut *tx, id).await? else {
            return Ok(0);
        };

        let affected = execute_patch(&mut *tx, &statement, args).await?;
        ensure_store_kept(&mut *tx, id, locked_store).await?;
        tx.commit().await.map_err(RepositoryError::from)?;

        info!("🩹 Patched order ID {} ({} rows)", id, affected);
        Ok(affected)
    }

    async fn delete_order(&self, id: i32) -> Result<u64, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let Some(store_id) = lock_order(&mut *tx, id).await? else {
            warn!("⚠️ Order ID {} not found for deletion", id);
            return Ok(0);
        };

        let restored = sqlx::query(
            r#"
            INSERT INTO stocks (store_id, product_id, quantity)
            SELECT $2, product_id, SUM(quantity)::INTEGER
            FROM order_items
            WHERE order_id = $1
            GROUP BY product_id
            ON CONFLICT (store_id, product_id)
            DO UPDATE SET quantity = stocks.quantity + EXCLUDED.quantity
            "#,
        )
        .bind(id)
        .bind(store_id)
        .execute(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to restore stock for order ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        sqlx::query("DELETE FROM order_items WHERE order_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete items of order ID {}: {:?}", id, err);
                RepositoryError::from(err)
            })?;

        let result = sqlx::query("DELETE FROM orders WHERE order_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete order ID {}: {:?}", id, err);
                RepositoryError::classify(err)
            })?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "🗑️ Deleted order ID {} (stock rows restored: {})",
            id,
            restored.rows_affected()
        );
        Ok(result.rows_affected())
    }

    async fn add_order_item(&self, item: &NewOrderItem) -> Result<i32, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let store_id = lock_order(&mut *tx, item.order_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let decremented = sqlx::query(
            r#"
            UPDATE stocks
            SET quantity = quantity - $1
            WHERE store_id = $2 AND product_id = $3 AND quantity >= $1
            "#,
        )
        .bind(item.quantity)
        .bind(store_id)
        .bind(item.product_id)
        .execute(&mut *tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to decrement stock store={} product={}: {:?}",
                store_id, item.product_id, err
            );
            RepositoryError::from(err)
        })?;

        if decremented.rows_affected() == 0 {
            warn!(
                "⚠️ Insufficient stock store={} product={} for quantity {}",
                store_id, item.product_id, item.quantity
            );
            return Err(RepositoryError::InsufficientStock);
        }

        let row = sqlx::query(
            "SELECT COALESCE(MAX(item_id), 0) + 1 AS next_id FROM order_items WHERE order_id = $1",
        )
        .bind(item.order_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(RepositoryError::from)?;
        let item_id: i32 = row.try_get("next_id")?;

        sqlx::query(
            r#"
            INSERT INTO order_items (order_id, item_id, product_id, quantity, list_price, discount)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(item.order_id)
        .bind(item_id)
        .bind(item.product_id)
        .bind(item.quantity)
        .bind(item.list_price)
        .bind(item.discount)
        .execute(&mut *tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to insert item into order ID {}: {:?}",
                item.order_id, err
            );
            RepositoryError::classify(err)
        })?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Added item {} to order ID {} (product {}, quantity {})",
            item_id, item.order_id, item.product_id, item.quantity
        );
        Ok(item_id)
    }

    async fn remove_order_item(
        &self,
        order_id: i32,
        item_id: i32,
    ) -> Result<u64, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let Some(store_id) = lock_order(&mut *tx, order_id).await? else {
            return Ok(0);
        };

        let removed = sqlx::query(
            r#"
            DELETE FROM order_items
            WHERE order_id = $1 AND item_id = $2
            RETURNING product_id, quantity
            "#,
        )
        .bind(order_id)
        .bind(item_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to delete item {} of order ID {}: {:?}",
                item_id, order_id, err
            );
            RepositoryError::from(err)
        })?;

        let Some(row) = removed else {
            return Ok(0);
        };
        let product_id: i32 = row.try_get("product_id")?;
        let quantity: i32 = row.try_get("quantity")?;

        sqlx::query(RESTORE_STOCK)
            .bind(store_id)
            .bind(product_id)
            .bind(quantity)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to restore stock store={} product={}: {:?}",
                    store_id, product_id, err
                );
                RepositoryError::from(err)
            })?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "🗑️ Removed item {} from order ID {} and returned {} units to stock",
            item_id, order_id, quantity
        );
        Ok(1)
    }
}
