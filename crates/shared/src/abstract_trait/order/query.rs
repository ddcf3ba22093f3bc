use crate::{
    domain::{
        requests::ListParams,
        responses::{ApiResponse, OrderListResponse, OrderResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{Order as OrderModel, OrderItem as OrderItemModel},
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;
pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_all(
        &self,
        params: &ListParams,
    ) -> Result<(Vec<OrderModel>, i64), RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<OrderModel>, RepositoryError>;
    /// Line items of the given orders, ordered by `(order_id, item_id)`.
    async fn find_items(&self, order_ids: &[i32]) -> Result<Vec<OrderItemModel>, RepositoryError>;
}

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn find_all(
        &self,
        params: &ListParams,
    ) -> Result<ApiResponse<OrderListResponse>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<OrderResponse>, ServiceError>;
}
