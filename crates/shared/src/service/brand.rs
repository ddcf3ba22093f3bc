use crate::{
    abstract_trait::{DynBrandRepository, BrandServiceTrait},
    domain::{
        requests::{CreateBrandRequest, ListParams, PatchRequest, UpdateBrandRequest},
        responses::{ApiResponse, BrandListResponse, BrandResponse},
    },
    errors::ServiceError,
    model::Brand as BrandModel,
    utils::{Method, Metrics},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

pub struct BrandService {
    repository: DynBrandRepository,
    metrics: Metrics,
}

impl BrandService {
    pub async fn new(repository: DynBrandRepository, registry: Arc<Mutex<Registry>>) -> Self {
        let metrics = Metrics::new();
        metrics.register("brand", &mut *registry.lock().await);

        Self {
            repository,
            metrics,
        }
    }

    async fn load(&self, id: i32) -> Result<BrandResponse, ServiceError> {
        self.repository
            .find_by_id(id)
            .await?
            .map(BrandResponse::from)
            .ok_or_else(|| ServiceError::not_found("brand", id))
    }
}

#[async_trait]
impl BrandServiceTrait for BrandService {
    async fn find_all(
        &self,
        params: &ListParams,
    ) -> Result<ApiResponse<BrandListResponse>, ServiceError> {
        self.metrics
            .observe(Method::Get, async {
                let (brands, count) = self.repository.find_all(params).await?;

                Ok(ApiResponse::success(
                    "Brand list retrieved successfully",
                    BrandListResponse {
                        count,
                        brands: brands.into_iter().map(BrandResponse::from).collect(),
                    },
                ))
            })
            .await
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<BrandResponse>, ServiceError> {
        self.metrics
            .observe(Method::Get, async {
                let brand = self.load(id).await?;
                Ok(ApiResponse::success("Brand retrieved successfully", brand))
            })
            .await
    }

    async fn create_brand(
        &self,
        req: &CreateBrandRequest,
    ) -> Result<ApiResponse<BrandResponse>, ServiceError> {
        self.metrics
            .observe(Method::Post, async {
                let id = self.repository.create_brand(req).await?;
                let brand = self.load(id).await?;

                info!("✅ Brand created with ID {id}");
                Ok(ApiResponse::success("Brand created successfully", brand))
            })
            .await
    }

    async fn update_brand(
        &self,
        id: i32,
        req: &UpdateBrandRequest,
    ) -> Result<ApiResponse<BrandResponse>, ServiceError> {
        self.metrics
            .observe(Method::Put, async {
                if self.repository.update_brand(id, req).await? == 0 {
                    return Err(ServiceError::NoRowsAffected);
                }
                let brand = self.load(id).await?;

                Ok(ApiResponse::success("Brand updated successfully", brand))
            })
            .await
    }

    async fn patch_brand(
        &self,
        id: i32,
        req: &PatchRequest,
    ) -> Result<ApiResponse<BrandResponse>, ServiceError> {
        self.metrics
            .observe(Method::Patch, async {
                req.check(BrandModel::PATCHABLE)?;

                if self.repository.patch_brand(id, &req.fields).await? == 0 {
                    return Err(ServiceError::NoRowsAffected);
                }
                let brand = self.load(id).await?;

                Ok(ApiResponse::success("Brand patched successfully", brand))
            })
            .await
    }

    async fn delete_brand(&self, id: i32) -> Result<ApiResponse<i32>, ServiceError> {
        self.metrics
            .observe(Method::Delete, async {
                if self.repository.delete_brand(id).await? == 0 {
                    return Err(ServiceError::NoRowsAffected);
                }

                info!("🗑️ Brand {id} deleted");
                Ok(ApiResponse::success("Brand deleted successfully", id))
            })
            .await
    }
}
