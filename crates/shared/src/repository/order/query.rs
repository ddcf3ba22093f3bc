use crate::{
    abstract_trait::OrderQueryRepositoryTrait,
    config::ConnectionPool,
    domain::requests::ListParams,
    errors::RepositoryError,
    model::{Order as OrderModel, OrderItem as OrderItemModel},
    repository::sql::total_count,
};
use async_trait::async_trait;
use sqlx::FromRow;
use tracing::{error, info};

/// The denormalized order view: every order row with its customer, store and
/// staff member flattened into prefixed columns.
const ORDER_SELECT: &str = r#"
    SELECT o.order_id, o.customer_id, o.order_status,
           o.order_date, o.required_date, o.shipped_date,
           o.store_id, o.staff_id,
           c.first_name AS customer_first_name, c.last_name AS customer_last_name,
           c.phone AS customer_phone, c.email AS customer_email,
           c.street AS customer_street, c.city AS customer_city,
           c.state AS customer_state, c.zip_code AS customer_zip_code,
           st.store_name, st.phone AS store_phone, st.email AS store_email,
           st.street AS store_street, st.city AS store_city, st.state AS store_state,
           st.zip_code AS store_zip_code,
           sf.first_name AS staff_first_name, sf.last_name AS staff_last_name,
           sf.email AS staff_email, sf.phone AS staff_phone, sf.active AS staff_active,
           sf.store_id AS staff_store_id, sf.manager_id AS staff_manager_id
    FROM orders o
    JOIN customers c ON c.customer_id = o.customer_id
    JOIN stores st ON st.store_id = o.store_id
    JOIN staffs sf ON sf.staff_id = o.staff_id
"#;

#[derive(Clone)]
pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_all(
        &self,
        params: &ListParams,
    ) -> Result<(Vec<OrderModel>, i64), RepositoryError> {
        info!("🔍 Fetching all orders with search: {:?}", params.search);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let statement = format!(
            r#"
            SELECT o.*, COUNT(*) OVER() AS total_count
            FROM ({ORDER_SELECT}) o
            WHERE ($1::TEXT IS NULL
                   OR o.order_id::TEXT ILIKE '%' || $1 || '%'
                   OR o.customer_first_name ILIKE '%' || $1 || '%'
                   OR o.customer_last_name ILIKE '%' || $1 || '%'
                   OR o.store_name ILIKE '%' || $1 || '%'
                   OR o.staff_first_name ILIKE '%' || $1 || '%'
                   OR o.staff_last_name ILIKE '%' || $1 || '%')
            ORDER BY o.order_id DESC
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
                error!("❌ Failed to fetch orders: {:?}", e);
                RepositoryError::from(e)
            })?;

        let total = total_count(&rows)?;
        let orders = rows
            .iter()
            .map(OrderModel::from_row)
            .collect::<Result<Vec<_>, _>>()?;

        info!("✅ Found {} orders (total {})", orders.len(), total);
        Ok((orders, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<OrderModel>, RepositoryError> {
        info!("🆔 Fetching order by ID: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let statement = format!("{ORDER_SELECT} WHERE o.order_id = $1");
        let result = sqlx::query_as::<_, OrderModel>(&statement)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch order ID {}: {:?}", id, e);
                RepositoryError::from(e)
            })?;

        Ok(result)
    }

    async fn find_items(&self, order_ids: &[i32]) -> Result<Vec<OrderItemModel>, RepositoryError> {
        if order_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, OrderItemModel>(
            r#"
            SELECT order_id, item_id, product_id, quantity, list_price, discount
            FROM order_items
            WHERE order_id = ANY($1)
            ORDER BY order_id, item_id
            "#,
        )
        .bind(order_ids)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch items for orders {:?}: {:?}", order_ids, e);
            RepositoryError::from(e)
        })
    }
}
