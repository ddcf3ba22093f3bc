use crate::{
    domain::{
        requests::{
            CreateOrderItemRequest, CreateOrderRequest, NewOrderItem, PatchRequest,
            UpdateOrderRequest,
        },
        responses::{ApiResponse, OrderResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;
pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    async fn create_order(&self, req: &CreateOrderRequest) -> Result<i32, RepositoryError>;
    /// Update and patch fail with `RepositoryError::OrderHasItems` when they
    /// would move an order that already holds items to another store.
    async fn update_order(&self, id: i32, req: &UpdateOrderRequest)
    -> Result<u64, RepositoryError>;
    async fn patch_order(
        &self,
        id: i32,
        fields: &Map<String, Value>,
    ) -> Result<u64, RepositoryError>;
    /// Deletes the order and its items, returning every item's quantity to
    /// stock. A stock row removed in the meantime is recreated.
    async fn delete_order(&self, id: i32) -> Result<u64, RepositoryError>;
    /// Decrements stock and inserts the item atomically. Returns the new item id,
    /// or `RepositoryError::InsufficientStock` when the stock row cannot cover it.
    async fn add_order_item(&self, item: &NewOrderItem) -> Result<i32, RepositoryError>;
    async fn remove_order_item(&self, order_id: i32, item_id: i32)
    -> Result<u64, RepositoryError>;
}

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn update_order(
        &self,
        id: i32,
        req: &UpdateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn patch_order(
        &self,
        id: i32,
        req: &PatchRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn delete_order(&self, id: i32) -> Result<ApiResponse<i32>, ServiceError>;
    async fn create_order_item(
        &self,
        req: &CreateOrderItemRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn delete_order_item(&self, order_id: i32, item_id: i32) -> Result<(), ServiceError>;
}
