use super::load_order;
use crate::{
    abstract_trait::{DynOrderQueryRepository, OrderQueryServiceTrait},
    domain::{
        requests::ListParams,
        responses::{ApiResponse, OrderListResponse, OrderResponse},
    },
    errors::ServiceError,
    utils::{Method, Metrics},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::Mutex;

pub struct OrderQueryService {
    query: DynOrderQueryRepository,
    metrics: Metrics,
}

impl OrderQueryService {
    pub async fn new(query: DynOrderQueryRepository, registry: Arc<Mutex<Registry>>) -> Self {
        let metrics = Metrics::new();
        metrics.register("order_query", &mut *registry.lock().await);

        Self { query, metrics }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all(
        &self,
        params: &ListParams,
    ) -> Result<ApiResponse<OrderListResponse>, ServiceError> {
        self.metrics
            .observe(Method::Get, async {
                let (orders, count) = self.query.find_all(params).await?;

                let ids: Vec<i32> = orders.iter().map(|o| o.order_id).collect();
                let mut items_by_order = HashMap::<i32, Vec<_>>::new();
                for item in self.query.find_items(&ids).await? {
                    items_by_order.entry(item.order_id).or_default().push(item);
                }

                let orders = orders
                    .into_iter()
                    .map(|order| {
                        let items = items_by_order.remove(&order.order_id).unwrap_or_default();
                        OrderResponse::from_parts(order, items)
                    })
                    .collect();

                Ok(ApiResponse::success(
                    "Order list retrieved successfully",
                    OrderListResponse { count, orders },
                ))
            })
            .await
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        self.metrics
            .observe(Method::Get, async {
                let order = load_order(&self.query, id).await?;
                Ok(ApiResponse::success("Order retrieved successfully", order))
            })
            .await
    }
}
