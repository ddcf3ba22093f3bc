use crate::{
    abstract_trait::{DynStoreRepository, StoreServiceTrait},
    domain::{
        requests::{CreateStoreRequest, ListParams, PatchRequest, UpdateStoreRequest},
        responses::{ApiResponse, StoreListResponse, StoreResponse},
    },
    errors::ServiceError,
    model::Store as StoreModel,
    utils::{Method, Metrics},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

pub struct StoreService {
    repository: DynStoreRepository,
    metrics: Metrics,
}

impl StoreService {
    pub async fn new(repository: DynStoreRepository, registry: Arc<Mutex<Registry>>) -> Self {
        let metrics = Metrics::new();
        metrics.register("store", &mut *registry.lock().await);

        Self {
            repository,
            metrics,
        }
    }

    async fn load(&self, id: i32) -> Result<StoreResponse, ServiceError> {
        self.repository
            .find_by_id(id)
            .await?
            .map(StoreResponse::from)
            .ok_or_else(|| ServiceError::not_found("store", id))
    }
}

#[async_trait]
impl StoreServiceTrait for StoreService {
    async fn find_all(
        &self,
        params: &ListParams,
    ) -> Result<ApiResponse<StoreListResponse>, ServiceError> {
        self.metrics
            .observe(Method::Get, async {
                let (stores, count) = self.repository.find_all(params).await?;

                Ok(ApiResponse::success(
                    "Store list retrieved successfully",
                    StoreListResponse {
                        count,
                        stores: stores.into_iter().map(StoreResponse::from).collect(),
                    },
                ))
            })
            .await
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<StoreResponse>, ServiceError> {
        self.metrics
            .observe(Method::Get, async {
                let store = self.load(id).await?;
                Ok(ApiResponse::success("Store retrieved successfully", store))
            })
            .await
    }

    async fn create_store(
        &self,
        req: &CreateStoreRequest,
    ) -> Result<ApiResponse<StoreResponse>, ServiceError> {
        self.metrics
            .observe(Method::Post, async {
                let id = self.repository.create_store(req).await?;
                let store = self.load(id).await?;

                info!("✅ Store created with ID {id}");
                Ok(ApiResponse::success("Store created successfully", store))
            })
            .await
    }

    async fn update_store(
        &self,
        id: i32,
        req: &UpdateStoreRequest,
    ) -> Result<ApiResponse<StoreResponse>, ServiceError> {
        self.metrics
            .observe(Method::Put, async {
                if self.repository.update_store(id, req).await? == 0 {
                    return Err(ServiceError::NoRowsAffected);
                }
                let store = self.load(id).await?;

                Ok(ApiResponse::success("Store updated successfully", store))
            })
            .await
    }

    async fn patch_store(
        &self,
        id: i32,
        req: &PatchRequest,
    ) -> Result<ApiResponse<StoreResponse>, ServiceError> {
        self.metrics
            .observe(Method::Patch, async {
                req.check(StoreModel::PATCHABLE)?;

                if self.repository.patch_store(id, &req.fields).await? == 0 {
                    return Err(ServiceError::NoRowsAffected);
                }
                let store = self.load(id).await?;

                Ok(ApiResponse::success("Store patched successfully", store))
            })
            .await
    }

    async fn delete_store(&self, id: i32) -> Result<ApiResponse<i32>, ServiceError> {
        self.metrics
            .observe(Method::Delete, async {
                if self.repository.delete_store(id).await? == 0 {
                    return Err(ServiceError::NoRowsAffected);
                }

                info!("🗑️ Store {id} deleted");
                Ok(ApiResponse::success("Store deleted successfully", id))
            })
            .await
    }
}
