mod command;
mod query;

pub use self::command::{OrderCommandService, OrderCommandServiceDeps};
pub use self::query::OrderQueryService;

use crate::{
    abstract_trait::{
        DynCustomerRepository, DynOrderCommandRepository, DynOrderCommandService,
        DynOrderQueryRepository, DynOrderQueryService, DynStaffRepository, DynStockRepository,
        DynStoreRepository,
    },
    domain::responses::OrderResponse,
    errors::ServiceError,
};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct OrderService {
    pub query: DynOrderQueryService,
    pub command: DynOrderCommandService,
}

pub struct OrderServiceDeps {
    pub query: DynOrderQueryRepository,
    pub command: DynOrderCommandRepository,
    pub customer: DynCustomerRepository,
    pub store: DynStoreRepository,
    pub staff: DynStaffRepository,
    pub stock: DynStockRepository,
    pub registry: Arc<Mutex<Registry>>,
}

impl fmt::Debug for OrderService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderService")
            .field("query", &"Arc<dyn OrderQueryServiceTrait>")
            .field("command", &"Arc<dyn OrderCommandServiceTrait>")
            .finish()
    }
}

impl OrderService {
    pub async fn new(deps: OrderServiceDeps) -> Self {
        let OrderServiceDeps {
            query,
            command,
            customer,
            store,
            staff,
            stock,
            registry,
        } = deps;

        let query_service =
            Arc::new(OrderQueryService::new(query.clone(), registry.clone()).await)
                as DynOrderQueryService;

        let command_deps = OrderCommandServiceDeps {
            query,
            command,
            customer,
            store,
            staff,
            stock,
            registry,
        };

        let command_service =
            Arc::new(OrderCommandService::new(command_deps).await) as DynOrderCommandService;

        Self {
            query: query_service,
            command: command_service,
        }
    }
}

/// Reads one order with its line items.
pub(crate) async fn load_order(
    query: &DynOrderQueryRepository,
    id: i32,
) -> Result<OrderResponse, ServiceError> {
    let order = query
        .find_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("order", id))?;
    let items = query.find_items(&[id]).await?;

    Ok(OrderResponse::from_parts(order, items))
}
