use crate::{
    abstract_trait::{
        DynProductRepository, DynStockRepository, DynStoreRepository, StockServiceTrait,
    },
    domain::{
        requests::{CreateStockRequest, ListParams, PatchRequest, UpdateStockRequest},
        responses::{ApiResponse, StockKeyResponse, StockListResponse, StockResponse},
    },
    errors::ServiceError,
    model::Stock as StockModel,
    utils::{Method, Metrics},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

pub struct StockService {
    repository: DynStockRepository,
    store: DynStoreRepository,
    product: DynProductRepository,
    metrics: Metrics,
}

impl StockService {
    pub async fn new(
        repository: DynStockRepository,
        store: DynStoreRepository,
        product: DynProductRepository,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register("stock", &mut *registry.lock().await);

        Self {
            repository,
            store,
            product,
            metrics,
        }
    }

    async fn load(&self, store_id: i32, product_id: i32) -> Result<StockResponse, ServiceError> {
        self.repository
            .find_by_id_product_stock(store_id, product_id)
            .await?
            .map(StockResponse::from)
            .ok_or_else(|| stock_not_found(store_id, product_id))
    }
}

pub(crate) fn stock_not_found(store_id: i32, product_id: i32) -> ServiceError {
    ServiceError::NotFound(format!(
        "stock for store {store_id} and product {product_id} not found"
    ))
}

#[async_trait]
impl StockServiceTrait for StockService {
    async fn find_all(
        &self,
        params: &ListParams,
    ) -> Result<ApiResponse<StockListResponse>, ServiceError> {
        self.metrics
            .observe(Method::Get, async {
                let (stocks, count) = self.repository.find_all(params).await?;

                Ok(ApiResponse::success(
                    "Stock list retrieved successfully",
                    StockListResponse {
                        count,
                        stocks: stocks.into_iter().map(StockResponse::from).collect(),
                    },
                ))
            })
            .await
    }

    async fn find_by_id(
        &self,
        store_id: i32,
        product_id: i32,
    ) -> Result<ApiResponse<StockResponse>, ServiceError> {
        self.metrics
            .observe(Method::Get, async {
                let stock = self.load(store_id, product_id).await?;
                Ok(ApiResponse::success("Stock retrieved successfully", stock))
            })
            .await
    }

    async fn create_stock(
        &self,
        req: &CreateStockRequest,
    ) -> Result<ApiResponse<StockResponse>, ServiceError> {
        self.metrics
            .observe(Method::Post, async {
                if self.store.find_by_id(req.store_id).await?.is_none() {
                    return Err(ServiceError::not_found("store", req.store_id));
                }
                if self.product.find_by_id(req.product_id).await?.is_none() {
                    return Err(ServiceError::not_found("product", req.product_id));
                }

                let (store_id, product_id) = self.repository.create_stock(req).await?;
                let stock = self.load(store_id, product_id).await?;

                info!("✅ Stock created for store {store_id} and product {product_id}");
                Ok(ApiResponse::success("Stock created successfully", stock))
            })
            .await
    }

    async fn update_stock(
        &self,
        store_id: i32,
        product_id: i32,
        req: &UpdateStockRequest,
    ) -> Result<ApiResponse<StockResponse>, ServiceError> {
        self.metrics
            .observe(Method::Put, async {
                if self
                    .repository
                    .update_stock(store_id, product_id, req)
                    .await?
                    == 0
                {
                    return Err(ServiceError::NoRowsAffected);
                }
                let stock = self.load(store_id, product_id).await?;

                Ok(ApiResponse::success("Stock updated successfully", stock))
            })
            .await
    }

    async fn patch_stock(
        &self,
        store_id: i32,
        product_id: i32,
        req: &PatchRequest,
    ) -> Result<ApiResponse<StockResponse>, ServiceError> {
        self.metrics
            .observe(Method::Patch, async {
                req.check(StockModel::PATCHABLE)?;

                if self
                    .repository
                    .patch_stock(store_id, product_id, &req.fields)
                    .await?
                    == 0
                {
                    return Err(ServiceError::NoRowsAffected);
                }
                let stock = self.load(store_id, product_id).await?;

                Ok(ApiResponse::success("Stock patched successfully", stock))
            })
            .await
    }

    async fn delete_stock(
        &self,
        store_id: i32,
        product_id: i32,
    ) -> Result<ApiResponse<StockKeyResponse>, ServiceError> {
        self.metrics
            .observe(Method::Delete, async {
                if self.repository.delete_stock(store_id, product_id).await? == 0 {
                    return Err(ServiceError::NoRowsAffected);
                }

                info!("🗑️ Stock for store {store_id} and product {product_id} deleted");
                Ok(ApiResponse::success(
                    "Stock deleted successfully",
                    StockKeyResponse {
                        store_id,
                        product_id,
                    },
                ))
            })
            .await
    }
}
