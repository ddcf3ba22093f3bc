use crate::{
    domain::{
        requests::{CreateStockRequest, ListParams, PatchRequest, UpdateStockRequest},
        responses::{ApiResponse, StockKeyResponse, StockListResponse, StockResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Stock as StockModel,
};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;

pub type DynStockRepository = Arc<dyn StockRepositoryTrait + Send + Sync>;
pub type DynStockService = Arc<dyn StockServiceTrait + Send + Sync>;

/// Stock rows are always addressed by the `(store_id, product_id)` pair.
#[async_trait]
pub trait StockRepositoryTrait {
    async fn find_all(
        &self,
        params: &ListParams,
    ) -> Result<(Vec<StockModel>, i64), RepositoryError>;
    /// Stock of one product at one store, joined with both.
    async fn find_by_id_product_stock(
        &self,
        store_id: i32,
        product_id: i32,
    ) -> Result<Option<StockModel>, RepositoryError>;
    async fn create_stock(&self, req: &CreateStockRequest) -> Result<(i32, i32), RepositoryError>;
    async fn update_stock(
        &self,
        store_id: i32,
        product_id: i32,
        req: &UpdateStockRequest,
    ) -> Result<u64, RepositoryError>;
    async fn patch_stock(
        &self,
        store_id: i32,
        product_id: i32,
        fields: &Map<String, Value>,
    ) -> Result<u64, RepositoryError>;
    async fn delete_stock(&self, store_id: i32, product_id: i32) -> Result<u64, RepositoryError>;
}

#[async_trait]
pub trait StockServiceTrait {
    async fn find_all(
        &self,
        params: &ListParams,
    ) -> Result<ApiResponse<StockListResponse>, ServiceError>;
    async fn find_by_id(
        &self,
        store_id: i32,
        product_id: i32,
    ) -> Result<ApiResponse<StockResponse>, ServiceError>;
    async fn create_stock(
        &self,
        req: &CreateStockRequest,
    ) -> Result<ApiResponse<StockResponse>, ServiceError>;
    async fn update_stock(
        &self,
        store_id: i32,
        product_id: i32,
        req: &UpdateStockRequest,
    ) -> Result<ApiResponse<StockResponse>, ServiceError>;
    async fn patch_stock(
        &self,
        store_id: i32,
        product_id: i32,
        req: &PatchRequest,
    ) -> Result<ApiResponse<StockResponse>, ServiceError>;
    async fn delete_stock(
        &self,
        store_id: i32,
        product_id: i32,
    ) -> Result<ApiResponse<StockKeyResponse>, ServiceError>;
}
