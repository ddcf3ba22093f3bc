use crate::{
    abstract_trait::{DynCustomerRepository, CustomerServiceTrait},
    domain::{
        requests::{CreateCustomerRequest, ListParams, PatchRequest, UpdateCustomerRequest},
        responses::{ApiResponse, CustomerListResponse, CustomerResponse},
    },
    errors::ServiceError,
    model::Customer as CustomerModel,
    utils::{Method, Metrics},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

pub struct CustomerService {
    repository: DynCustomerRepository,
    metrics: Metrics,
}

impl CustomerService {
    pub async fn new(repository: DynCustomerRepository, registry: Arc<Mutex<Registry>>) -> Self {
        let metrics = Metrics::new();
        metrics.register("customer", &mut *registry.lock().await);

        Self {
            repository,
            metrics,
        }
    }

    async fn load(&self, id: i32) -> Result<CustomerResponse, ServiceError> {
        self.repository
            .find_by_id(id)
            .await?
            .map(CustomerResponse::from)
            .ok_or_else(|| ServiceError::not_found("customer", id))
    }
}

#[async_trait]
impl CustomerServiceTrait for CustomerService {
    async fn find_all(
        &self,
        params: &ListParams,
    ) -> Result<ApiResponse<CustomerListResponse>, ServiceError> {
        self.metrics
            .observe(Method::Get, async {
                let (customers, count) = self.repository.find_all(params).await?;

                Ok(ApiResponse::success(
                    "Customer list retrieved successfully",
                    CustomerListResponse {
                        count,
                        customers: customers.into_iter().map(CustomerResponse::from).collect(),
                    },
                ))
            })
            .await
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<CustomerResponse>, ServiceError> {
        self.metrics
            .observe(Method::Get, async {
                let customer = self.load(id).await?;
                Ok(ApiResponse::success("Customer retrieved successfully", customer))
            })
            .await
    }

    async fn create_customer(
        &self,
        req: &CreateCustomerRequest,
    ) -> Result<ApiResponse<CustomerResponse>, ServiceError> {
        self.metrics
            .observe(Method::Post, async {
                let id = self.repository.create_customer(req).await?;
                let customer = self.load(id).await?;

                info!("✅ Customer created with ID {id}");
                Ok(ApiResponse::success("Customer created successfully", customer))
            })
            .await
    }

    async fn update_customer(
        &self,
        id: i32,
        req: &UpdateCustomerRequest,
    ) -> Result<ApiResponse<CustomerResponse>, ServiceError> {
        self.metrics
            .observe(Method::Put, async {
                if self.repository.update_customer(id, req).await? == 0 {
                    return Err(ServiceError::NoRowsAffected);
                }
                let customer = self.load(id).await?;

                Ok(ApiResponse::success("Customer updated successfully", customer))
            })
            .await
    }

    async fn patch_customer(
        &self,
        id: i32,
        req: &PatchRequest,
    ) -> Result<ApiResponse<CustomerResponse>, ServiceError> {
        self.metrics
            .observe(Method::Patch, async {
                req.check(CustomerModel::PATCHABLE)?;

                if self.repository.patch_customer(id, &req.fields).await? == 0 {
                    return Err(ServiceError::NoRowsAffected);
                }
                let customer = self.load(id).await?;

                Ok(ApiResponse::success("Customer patched successfully", customer))
            })
            .await
    }

    async fn delete_customer(&self, id: i32) -> Result<ApiResponse<i32>, ServiceError> {
        self.metrics
            .observe(Method::Delete, async {
                if self.repository.delete_customer(id).await? == 0 {
                    return Err(ServiceError::NoRowsAffected);
                }

                info!("🗑️ Customer {id} deleted");
                Ok(ApiResponse::success("Customer deleted successfully", id))
            })
            .await
    }
}
