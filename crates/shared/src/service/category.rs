use crate::{
    abstract_trait::{DynCategoryRepository, CategoryServiceTrait},
    domain::{
        requests::{CreateCategoryRequest, ListParams, PatchRequest, UpdateCategoryRequest},
        responses::{ApiResponse, CategoryListResponse, CategoryResponse},
    },
    errors::ServiceError,
    model::Category as CategoryModel,
    utils::{Method, Metrics},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

pub struct CategoryService {
    repository: DynCategoryRepository,
    metrics: Metrics,
}

impl CategoryService {
    pub async fn new(repository: DynCategoryRepository, registry: Arc<Mutex<Registry>>) -> Self {
        let metrics = Metrics::new();
        metrics.register("category", &mut *registry.lock().await);

        Self {
            repository,
            metrics,
        }
    }

    async fn load(&self, id: i32) -> Result<CategoryResponse, ServiceError> {
        self.repository
            .find_by_id(id)
            .await?
            .map(CategoryResponse::from)
            .ok_or_else(|| ServiceError::not_found("category", id))
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    async fn find_all(
        &self,
        params: &ListParams,
    ) -> Result<ApiResponse<CategoryListResponse>, ServiceError> {
        self.metrics
            .observe(Method::Get, async {
                let (categories, count) = self.repository.find_all(params).await?;

                Ok(ApiResponse::success(
                    "Category list retrieved successfully",
                    CategoryListResponse {
                        count,
                        categories: categories.into_iter().map(CategoryResponse::from).collect(),
                    },
                ))
            })
            .await
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        self.metrics
            .observe(Method::Get, async {
                let category = self.load(id).await?;
                Ok(ApiResponse::success("Category retrieved successfully", category))
            })
            .await
    }

    async fn create_category(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        self.metrics
            .observe(Method::Post, async {
                let id = self.repository.create_category(req).await?;
                let category = self.load(id).await?;

                info!("✅ Category created with ID {id}");
                Ok(ApiResponse::success("Category created successfully", category))
            })
            .await
    }

    async fn update_category(
        &self,
        id: i32,
        req: &UpdateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        self.metrics
            .observe(Method::Put, async {
                if self.repository.update_category(id, req).await? == 0 {
                    return Err(ServiceError::NoRowsAffected);
                }
                let category = self.load(id).await?;

                Ok(ApiResponse::success("Category updated successfully", category))
            })
            .await
    }

    async fn patch_category(
        &self,
        id: i32,
        req: &PatchRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        self.metrics
            .observe(Method::Patch, async {
                req.check(CategoryModel::PATCHABLE)?;

                if self.repository.patch_category(id, &req.fields).await? == 0 {
                    return Err(ServiceError::NoRowsAffected);
                }
                let category = self.load(id).await?;

                Ok(ApiResponse::success("Category patched successfully", category))
            })
            .await
    }

    async fn delete_category(&self, id: i32) -> Result<ApiResponse<i32>, ServiceError> {
        self.metrics
            .observe(Method::Delete, async {
                if self.repository.delete_category(id).await? == 0 {
                    return Err(ServiceError::NoRowsAffected);
                }

                info!("🗑️ Category {id} deleted");
                Ok(ApiResponse::success("Category deleted successfully", id))
            })
            .await
    }
}
