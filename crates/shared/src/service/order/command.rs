use super::load_order;
use crate::{
    abstract_trait::{
        DynCustomerRepository, DynOrderCommandRepository, DynOrderQueryRepository,
        DynStaffRepository, DynStockRepository, DynStoreRepository, OrderCommandServiceTrait,
    },
    domain::{
        requests::{
            CreateOrderItemRequest, CreateOrderRequest, NewOrderItem, PatchRequest,
            UpdateOrderRequest,
        },
        responses::{ApiResponse, OrderResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Order as OrderModel,
    service::stock::stock_not_found,
    utils::{Method, Metrics},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

pub struct OrderCommandService {
    query: DynOrderQueryRepository,
    command: DynOrderCommandRepository,
    customer: DynCustomerRepository,
    store: DynStoreRepository,
    staff: DynStaffRepository,
    stock: DynStockRepository,
    metrics: Metrics,
}

pub struct OrderCommandServiceDeps {
    pub query: DynOrderQueryRepository,
    pub command: DynOrderCommandRepository,
    pub customer: DynCustomerRepository,
    pub store: DynStoreRepository,
    pub staff: DynStaffRepository,
    pub stock: DynStockRepository,
    pub registry: Arc<Mutex<Registry>>,
}

impl OrderCommandService {
    pub async fn new(deps: OrderCommandServiceDeps) -> Self {
        let OrderCommandServiceDeps {
            query,
            command,
            customer,
            store,
            staff,
            stock,
            registry,
        } = deps;

        let metrics = Metrics::new();
        metrics.register("order_command", &mut *registry.lock().await);

        Self {
            query,
            command,
            customer,
            store,
            staff,
            stock,
            metrics,
        }
    }

    /// Customer, store and staff are looked up in that order; the first
    /// missing one is reported.
    async fn check_references(
        &self,
        customer_id: i32,
        store_id: i32,
        staff_id: i32,
    ) -> Result<(), ServiceError> {
        if self.customer.find_by_id(customer_id).await?.is_none() {
            return Err(ServiceError::not_found("customer", customer_id));
        }
        if self.store.find_by_id(store_id).await?.is_none() {
            return Err(ServiceError::not_found("store", store_id));
        }
        if self.staff.find_by_id(staff_id).await?.is_none() {
            return Err(ServiceError::not_found("staff", staff_id));
        }
        Ok(())
    }

    /// Items hold units taken from the order's store, so the store is fixed
    /// once the first item is added. A missing order passes and is reported
    /// by the write itself.
    async fn ensure_store_kept(&self, id: i32, store_id: i64) -> Result<(), ServiceError> {
        let Some(order) = self.query.find_by_id(id).await? else {
            return Ok(());
        };

        if i64::from(order.store_id) != store_id && !self.query.find_items(&[id]).await?.is_empty()
        {
            warn!(
                "⚠️ Order {id} has items from store {}, refusing move to store {store_id}",
                order.store_id
            );
            return Err(ServiceError::OrderHasItems);
        }
        Ok(())
    }
}

fn store_guard(err: RepositoryError) -> ServiceError {
    match err {
        RepositoryError::OrderHasItems => ServiceError::OrderHasItems,
        other => other.into(),
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        self.metrics
            .observe(Method::Post, async {
                info!("🏗️ Creating new order for customer_id={}", req.customer_id);

                self.check_references(req.customer_id, req.store_id, req.staff_id)
                    .await?;

                let id = self.command.create_order(req).await?;
                let order = load_order(&self.query, id).await?;

                info!("✅ Order created with ID {id}");
                Ok(ApiResponse::success("Order created successfully", order))
            })
            .await
    }

    async fn update_order(
        &self,
        id: i32,
        req: &UpdateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        self.metrics
            .observe(Method::Put, async {
                self.check_references(req.customer_id, req.store_id, req.staff_id)
                    .await?;
                self.ensure_store_kept(id, i64::from(req.store_id)).await?;

                let affected = self
                    .command
                    .update_order(id, req)
                    .await
                    .map_err(store_guard)?;
                if affected == 0 {
                    return Err(ServiceError::NoRowsAffected);
                }
                let order = load_order(&self.query, id).await?;

                Ok(ApiResponse::success("Order updated successfully", order))
            })
            .await
    }

    async fn patch_order(
        &self,
        id: i32,
        req: &PatchRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        self.metrics
            .observe(Method::Patch, async {
                req.check(OrderModel::PATCHABLE)?;
                if let Some(store_id) = req.fields.get("store_id").and_then(|v| v.as_i64()) {
                    self.ensure_store_kept(id, store_id).await?;
                }

                let affected = self
                    .command
                    .patch_order(id, &req.fields)
                    .await
                    .map_err(store_guard)?;
                if affected == 0 {
                    return Err(ServiceError::NoRowsAffected);
                }
                let order = load_order(&self.query, id).await?;

                Ok(ApiResponse::success("Order patched successfully", order))
            })
            .await
    }

    async fn delete_order(&self, id: i32) -> Result<ApiResponse<i32>, ServiceError> {
        self.metrics
            .observe(Method::Delete, async {
                if self.command.delete_order(id).await? == 0 {
                    return Err(ServiceError::NoRowsAffected);
                }

                info!("🗑️ Order {id} deleted with its items");
                Ok(ApiResponse::success("Order deleted successfully", id))
            })
            .await
    }

    async fn create_order_item(
        &self,
        req: &CreateOrderItemRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        self.metrics
            .observe(Method::Post, async {
                let order = self
                    .query
                    .find_by_id(req.order_id)
                    .await?
                    .ok_or_else(|| ServiceError::not_found("order", req.order_id))?;

                let stock = self
                    .stock
                    .find_by_id_product_stock(order.store_id, req.product_id)
                    .await?
                    .ok_or_else(|| stock_not_found(order.store_id, req.product_id))?;

                if stock.quantity <= 0 || req.quantity > stock.quantity {
                    warn!(
                        "⚠️ Order {} asks for {} of product {}, store {} holds {}",
                        req.order_id, req.quantity, req.product_id, order.store_id, stock.quantity
                    );
                    return Err(ServiceError::InsufficientStock);
                }

                let item = NewOrderItem {
                    order_id: order.order_id,
                    product_id: req.product_id,
                    quantity: req.quantity,
                    list_price: req.list_price.unwrap_or(stock.list_price),
                    discount: req.discount.unwrap_or(0.0),
                };

                let item_id = match self.command.add_order_item(&item).await {
                    Ok(item_id) => item_id,
                    Err(RepositoryError::InsufficientStock) => {
                        return Err(ServiceError::InsufficientStock);
                    }
                    Err(RepositoryError::NotFound) => {
                        return Err(ServiceError::not_found("order", req.order_id));
                    }
                    Err(err) => return Err(err.into()),
                };

                let order = load_order(&self.query, req.order_id).await?;

                info!("✅ Item {item_id} added to order {}", req.order_id);
                Ok(ApiResponse::success("Order item created successfully", order))
            })
            .await
    }

    async fn delete_order_item(&self, order_id: i32, item_id: i32) -> Result<(), ServiceError> {
        self.metrics
            .observe(Method::Delete, async {
                if self.command.remove_order_item(order_id, item_id).await? == 0 {
                    return Err(ServiceError::NoRowsAffected);
                }

                info!("🗑️ Item {item_id} removed from order {order_id}");
                Ok(())
            })
            .await
    }
}
