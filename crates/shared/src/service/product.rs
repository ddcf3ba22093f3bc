use crate::{
    abstract_trait::{
        DynBrandRepository, DynCategoryRepository, DynProductCacheRepository,
        DynProductRepository, ProductServiceTrait,
    },
    domain::{
        requests::{CreateProductRequest, ListParams, PatchRequest, UpdateProductRequest},
        responses::{ApiResponse, ProductListResponse, ProductResponse},
    },
    errors::ServiceError,
    model::Product as ProductModel,
    utils::{Method, Metrics},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

pub struct ProductService {
    repository: DynProductRepository,
    brand: DynBrandRepository,
    category: DynCategoryRepository,
    cache: DynProductCacheRepository,
    metrics: Metrics,
}

pub struct ProductServiceDeps {
    pub repository: DynProductRepository,
    pub brand: DynBrandRepository,
    pub category: DynCategoryRepository,
    pub cache: DynProductCacheRepository,
    pub registry: Arc<Mutex<Registry>>,
}

impl ProductService {
    pub async fn new(deps: ProductServiceDeps) -> Self {
        let ProductServiceDeps {
            repository,
            brand,
            category,
            cache,
            registry,
        } = deps;

        let metrics = Metrics::new();
        metrics.register("product", &mut *registry.lock().await);

        Self {
            repository,
            brand,
            category,
            cache,
            metrics,
        }
    }

    async fn load(&self, id: i32) -> Result<ProductResponse, ServiceError> {
        self.repository
            .find_by_id(id)
            .await?
            .map(ProductResponse::from)
            .ok_or_else(|| ServiceError::not_found("product", id))
    }

    async fn check_references(&self, brand_id: i32, category_id: i32) -> Result<(), ServiceError> {
        if self.brand.find_by_id(brand_id).await?.is_none() {
            return Err(ServiceError::not_found("brand", brand_id));
        }
        if self.category.find_by_id(category_id).await?.is_none() {
            return Err(ServiceError::not_found("category", category_id));
        }
        Ok(())
    }

    /// Cached page for `params`, if one can be served. Cache failures are
    /// logged and reported as a miss.
    async fn cached_page(&self, params: &ListParams) -> Option<ProductListResponse> {
        match self.cache.exists(params).await {
            Ok(true) => {}
            Ok(false) => return None,
            Err(err) => {
                error!("❌ Product cache lookup failed: {err}");
                return None;
            }
        }

        match self.cache.get_list(params).await {
            Ok(listing) => Some(listing),
            Err(err) => {
                error!("❌ Failed to read cached product page: {err}");
                None
            }
        }
    }

    async fn invalidate_listing(&self) {
        if let Err(err) = self.cache.delete().await {
            warn!("⚠️ Failed to invalidate product listing cache: {err}");
        }
    }
}

#[async_trait]
impl ProductServiceTrait for ProductService {
    async fn find_all(
        &self,
        params: &ListParams,
    ) -> Result<ApiResponse<ProductListResponse>, ServiceError> {
        self.metrics
            .observe(Method::Get, async {
                if let Some(listing) = self.cached_page(params).await {
                    info!("✅ Serving product page from cache");
                    return Ok(ApiResponse::success(
                        "Product list retrieved successfully",
                        listing,
                    ));
                }

                let (products, count) = self.repository.find_all(params).await?;
                let listing = ProductListResponse {
                    count,
                    products: products.into_iter().map(ProductResponse::from).collect(),
                };

                if let Err(err) = self.cache.create(params, &listing).await {
                    error!("❌ Failed to cache product page: {err}");
                }

                Ok(ApiResponse::success(
                    "Product list retrieved successfully",
                    listing,
                ))
            })
            .await
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        self.metrics
            .observe(Method::Get, async {
                let product = self.load(id).await?;
                Ok(ApiResponse::success("Product retrieved successfully", product))
            })
            .await
    }

    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        self.metrics
            .observe(Method::Post, async {
                self.check_references(req.brand_id, req.category_id).await?;

                let id = self.repository.create_product(req).await?;
                self.invalidate_listing().await;
                let product = self.load(id).await?;

                info!("✅ Product created with ID {id}");
                Ok(ApiResponse::success("Product created successfully", product))
            })
            .await
    }

    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        self.metrics
            .observe(Method::Put, async {
                self.check_references(req.brand_id, req.category_id).await?;

                let affected = self.repository.update_product(id, req).await?;
                self.invalidate_listing().await;
                if affected == 0 {
                    return Err(ServiceError::NoRowsAffected);
                }
                let product = self.load(id).await?;

                Ok(ApiResponse::success("Product updated successfully", product))
            })
            .await
    }

    async fn patch_product(
        &self,
        id: i32,
        req: &PatchRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        self.metrics
            .observe(Method::Patch, async {
                req.check(ProductModel::PATCHABLE)?;

                let affected = self.repository.patch_product(id, &req.fields).await?;
                self.invalidate_listing().await;
                if affected == 0 {
                    return Err(ServiceError::NoRowsAffected);
                }
                let product = self.load(id).await?;

                Ok(ApiResponse::success("Product patched successfully", product))
            })
            .await
    }

    async fn delete_product(&self, id: i32) -> Result<ApiResponse<i32>, ServiceError> {
        self.metrics
            .observe(Method::Delete, async {
                let affected = self.repository.delete_product(id).await?;
                self.invalidate_listing().await;
                if affected == 0 {
                    return Err(ServiceError::NoRowsAffected);
                }

                info!("🗑️ Product {id} deleted");
                Ok(ApiResponse::success("Product deleted successfully", id))
            })
            .await
    }
}
