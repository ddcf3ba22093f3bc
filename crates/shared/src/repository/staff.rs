use crate::{
    abstract_trait::StaffRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateStaffRequest, ListParams, UpdateStaffRequest},
    errors::RepositoryError,
    model::Staff as StaffModel,
    repository::sql::{execute_patch, patch_statement, total_count},
};
use async_trait::async_trait;
use serde_json::{Map, Value, json};
use sqlx::FromRow;
use tracing::{error, info};

const STAFF_SELECT: &str = r#"
    SELECT s.staff_id, s.first_name, s.last_name, s.email, s.phone, s.active,
           s.store_id, s.manager_id,
           st.store_name, st.phone AS store_phone, st.email AS store_email,
           st.street AS store_street, st.city AS store_city, st.state AS store_state,
           st.zip_code AS store_zip_code
    FROM staffs s
    JOIN stores st ON st.store_id = s.store_id
"#;

#[derive(Clone)]
pub struct StaffRepository {
    db: ConnectionPool,
}

impl StaffRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StaffRepositoryTrait for StaffRepository {
    async fn find_all(
        &self,
        params: &ListParams,
    ) -> Result<(Vec<StaffModel>, i64), RepositoryError> {
        info!("🔍 Fetching staffs with search: {:?}", params.search);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let statement = format!(
            r#"
            SELECT staff.*, COUNT(*) OVER() AS total_count
            FROM ({STAFF_SELECT}) staff
            WHERE ($1::TEXT IS NULL
                   OR staff.first_name ILIKE '%' || $1 || '%'
                   OR staff.last_name ILIKE '%' || $1 || '%'
                   OR staff.email ILIKE '%' || $1 || '%'
                   OR staff.store_name ILIKE '%' || $1 || '%')
            ORDER BY staff.staff_id
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
                error!("❌ Failed to fetch staffs: {:?}", e);
                RepositoryError::from(e)
            })?;

        let total = total_count(&rows)?;
        let staffs = rows
            .iter()
            .map(StaffModel::from_row)
            .collect::<Result<Vec<_>, _>>()?;

        info!("✅ Found {} staffs (total {})", staffs.len(), total);
        Ok((staffs, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<StaffModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let statement = format!("{STAFF_SELECT} WHERE s.staff_id = $1");
        let result = sqlx::query_as::<_, StaffModel>(&statement)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to fetch staff ID {}: {:?}", id, err);
                RepositoryError::from(err)
            })?;

        Ok(result)
    }

    async fn create_staff(&self, req: &CreateStaffRequest) -> Result<i32, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO staffs (first_name, last_name, email, phone, active, store_id, manager_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING staff_id
            "#,
        )
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.email)
        .bind(&req.phone)
        .bind(req.active)
        .bind(req.store_id)
        .bind(req.manager_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create staff {}: {:?}", req.email, err);
            RepositoryError::classify(err)
        })?;

        info!("✅ Created staff ID {} ({})", id, req.email);
        Ok(id)
    }

    async fn update_staff(&self, id: i32, req: &UpdateStaffRequest) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            UPDATE staffs
            SET first_name = $2,
                last_name = $3,
                email = $4,
                phone = $5,
                active = $6,
                store_id = $7,
                manager_id = $8
            WHERE staff_id = $1
            "#,
        )
        .bind(id)
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.email)
        .bind(&req.phone)
        .bind(req.active)
        .bind(req.store_id)
        .bind(req.manager_id)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update staff ID {}: {:?}", id, err);
            RepositoryError::classify(err)
        })?;

        info!("🔄 Updated staff ID {} ({} rows)", id, result.rows_affected());
        Ok(result.rows_affected())
    }

    async fn patch_staff(
        &self,
        id: i32,
        fields: &Map<String, Value>,
    ) -> Result<u64, RepositoryError> {
        let (statement, args) =
            patch_statement("staffs", StaffModel::PATCHABLE, fields, &[("staff_id", json!(id))])?;

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;
        let affected = execute_patch(&mut conn, &statement, args).await?;

        info!("🩹 Patched staff ID {} ({} rows)", id, affected);
        Ok(affected)
    }

    async fn delete_staff(&self, id: i32) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM staffs WHERE staff_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete staff ID {}: {:?}", id, err);
                RepositoryError::classify(err)
            })?;

        info!("🗑️ Deleted staff ID {} ({} rows)", id, result.rows_affected());
        Ok(result.rows_affected())
    }
}
