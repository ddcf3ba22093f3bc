use crate::{
    abstract_trait::CustomerRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateCustomerRequest, ListParams, UpdateCustomerRequest},
    errors::RepositoryError,
    model::Customer as CustomerModel,
    repository::sql::{execute_patch, patch_statement, total_count},
};
use async_trait::async_trait;
use serde_json::{Map, Value, json};
use sqlx::FromRow;
use tracing::{error, info};

#[derive(Clone)]
pub struct CustomerRepository {
    db: ConnectionPool,
}

impl CustomerRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerRepositoryTrait for CustomerRepository {
    async fn find_all(
        &self,
        params: &ListParams,
    ) -> Result<(Vec<CustomerModel>, i64), RepositoryError> {
        info!("🔍 Fetching customers with search: {:?}", params.search);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let rows = sqlx::query(
            r#"
            SELECT customer_id, first_name, last_name, phone, email, street, city, state, zip_code,
                   COUNT(*) OVER() AS total_count
            FROM customers
            WHERE ($1::TEXT IS NULL OR first_name ILIKE '%' || $1 || '%'
                   OR last_name ILIKE '%' || $1 || '%'
                   OR email ILIKE '%' || $1 || '%')
            ORDER BY customer_id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(params.search_pattern())
        .bind(params.limit)
        .bind(params.offset)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch customers: {:?}", e);
            RepositoryError::from(e)
        })?;

        let total = total_count(&rows)?;
        let items = rows
            .iter()
            .map(CustomerModel::from_row)
            .collect::<Result<Vec<_>, _>>()?;

        info!("✅ Found {} customers (total {})", items.len(), total);
        Ok((items, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<CustomerModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, CustomerModel>(
            "SELECT customer_id, first_name, last_name, phone, email, street, city, state, zip_code FROM customers WHERE customer_id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch customer ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        Ok(result)
    }

    async fn create_customer(&self, req: &CreateCustomerRequest) -> Result<i32, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO customers (first_name, last_name, phone, email, street, city, state, zip_code)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING customer_id
            "#,
        )
            .bind(&req.first_name)
            .bind(&req.last_name)
            .bind(&req.phone)
            .bind(&req.email)
            .bind(&req.street)
            .bind(&req.city)
            .bind(&req.state)
            .bind(&req.zip_code)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create customer {}: {:?}", req.first_name, err);
            RepositoryError::classify(err)
        })?;

        info!("✅ Created customer ID {}", id);
        Ok(id)
    }

    async fn update_customer(&self, id: i32, req: &UpdateCustomerRequest) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            UPDATE customers
            SET first_name = $2,
                last_name = $3,
                phone = $4,
                email = $5,
                street = $6,
                city = $7,
                state = $8,
                zip_code = $9
            WHERE customer_id = $1
            "#,
        )
        .bind(id)
            .bind(&req.first_name)
            .bind(&req.last_name)
            .bind(&req.phone)
            .bind(&req.email)
            .bind(&req.street)
            .bind(&req.city)
            .bind(&req.state)
            .bind(&req.zip_code)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update customer ID {}: {:?}", id, err);
            RepositoryError::classify(err)
        })?;

        info!("🔄 Updated customer ID {} ({} rows)", id, result.rows_affected());
        Ok(result.rows_affected())
    }

    async fn patch_customer(
        &self,
        id: i32,
        fields: &Map<String, Value>,
    ) -> Result<u64, RepositoryError> {
        let (statement, args) =
            patch_statement("customers", CustomerModel::PATCHABLE, fields, &[("customer_id", json!(id))])?;

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;
        let affected = execute_patch(&mut conn, &statement, args).await?;

        info!("🩹 Patched customer ID {} ({} rows)", id, affected);
        Ok(affected)
    }

    async fn delete_customer(&self, id: i32) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM customers WHERE customer_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete customer ID {}: {:?}", id, err);
                RepositoryError::classify(err)
            })?;

        info!("🗑️ Deleted customer ID {} ({} rows)", id, result.rows_affected());
        Ok(result.rows_affected())
    }
}
