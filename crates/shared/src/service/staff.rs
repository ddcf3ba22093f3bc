use crate::{
    abstract_trait::{DynStaffRepository, DynStoreRepository, StaffServiceTrait},
    domain::{
        requests::{CreateStaffRequest, ListParams, PatchRequest, UpdateStaffRequest},
        responses::{ApiResponse, StaffListResponse, StaffResponse},
    },
    errors::ServiceError,
    model::Staff as StaffModel,
    utils::{Method, Metrics},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

pub struct StaffService {
    repository: DynStaffRepository,
    store: DynStoreRepository,
    metrics: Metrics,
}

impl StaffService {
    pub async fn new(
        repository: DynStaffRepository,
        store: DynStoreRepository,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register("staff", &mut *registry.lock().await);

        Self {
            repository,
            store,
            metrics,
        }
    }

    async fn load(&self, id: i32) -> Result<StaffResponse, ServiceError> {
        self.repository
            .find_by_id(id)
            .await?
            .map(StaffResponse::from)
            .ok_or_else(|| ServiceError::not_found("staff", id))
    }

    /// The store must exist, and so must the manager when one is named.
    async fn check_references(
        &self,
        store_id: i32,
        manager_id: Option<i32>,
    ) -> Result<(), ServiceError> {
        if self.store.find_by_id(store_id).await?.is_none() {
            return Err(ServiceError::not_found("store", store_id));
        }

        if let Some(manager_id) = manager_id
            && self.repository.find_by_id(manager_id).await?.is_none()
        {
            return Err(ServiceError::not_found("manager", manager_id));
        }

        Ok(())
    }
}

#[async_trait]
impl StaffServiceTrait for StaffService {
    async fn find_all(
        &self,
        params: &ListParams,
    ) -> Result<ApiResponse<StaffListResponse>, ServiceError> {
        self.metrics
            .observe(Method::Get, async {
                let (staffs, count) = self.repository.find_all(params).await?;

                Ok(ApiResponse::success(
                    "Staff list retrieved successfully",
                    StaffListResponse {
                        count,
                        staffs: staffs.into_iter().map(StaffResponse::from).collect(),
                    },
                ))
            })
            .await
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<StaffResponse>, ServiceError> {
        self.metrics
            .observe(Method::Get, async {
                let staff = self.load(id).await?;
                Ok(ApiResponse::success("Staff retrieved successfully", staff))
            })
            .await
    }

    async fn create_staff(
        &self,
        req: &CreateStaffRequest,
    ) -> Result<ApiResponse<StaffResponse>, ServiceError> {
        self.metrics
            .observe(Method::Post, async {
                self.check_references(req.store_id, req.manager_id).await?;

                let id = self.repository.create_staff(req).await?;
                let staff = self.load(id).await?;

                info!("✅ Staff created with ID {id}");
                Ok(ApiResponse::success("Staff created successfully", staff))
            })
            .await
    }

    async fn update_staff(
        &self,
        id: i32,
        req: &UpdateStaffRequest,
    ) -> Result<ApiResponse<StaffResponse>, ServiceError> {
        self.metrics
            .observe(Method::Put, async {
                self.check_references(req.store_id, req.manager_id).await?;

                if self.repository.update_staff(id, req).await? == 0 {
                    return Err(ServiceError::NoRowsAffected);
                }
                let staff = self.load(id).await?;

                Ok(ApiResponse::success("Staff updated successfully", staff))
            })
            .await
    }

    async fn patch_staff(
        &self,
        id: i32,
        req: &PatchRequest,
    ) -> Result<ApiResponse<StaffResponse>, ServiceError> {
        self.metrics
            .observe(Method::Patch, async {
                req.check(StaffModel::PATCHABLE)?;

                if self.repository.patch_staff(id, &req.fields).await? == 0 {
                    return Err(ServiceError::NoRowsAffected);
                }
                let staff = self.load(id).await?;

                Ok(ApiResponse::success("Staff patched successfully", staff))
            })
            .await
    }

    async fn delete_staff(&self, id: i32) -> Result<ApiResponse<i32>, ServiceError> {
        self.metrics
            .observe(Method::Delete, async {
                if self.repository.delete_staff(id).await? == 0 {
                    return Err(ServiceError::NoRowsAffected);
                }

                info!("🗑️ Staff {id} deleted");
                Ok(ApiResponse::success("Staff deleted successfully", id))
            })
            .await
    }
}
