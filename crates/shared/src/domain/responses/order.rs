use super::{CustomerResponse, StaffResponse, StoreResponse};
use crate::model::{Order, OrderItem};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderItemResponse {
    pub order_id: i32,
    pub item_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub list_price: f64,
    pub discount: f64,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(value: OrderItem) -> Self {
        OrderItemResponse {
            order_id: value.order_id,
            item_id: value.item_id,
            product_id: value.product_id,
            quantity: value.quantity,
            list_price: value.list_price,
            discount: value.discount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub order_id: i32,
    pub customer_id: i32,
    pub customer_data: CustomerResponse,
    pub order_status: i32,
    #[schema(value_type = Option<String>, format = Date)]
    pub order_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>, format = Date)]
    pub required_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>, format = Date)]
    pub shipped_date: Option<NaiveDate>,
    pub store_id: i32,
    pub store_data: StoreResponse,
    pub staff_id: i32,
    pub staff_data: StaffResponse,
    pub order_items: Vec<OrderItemResponse>,
}

impl OrderResponse {
    /// Builds the denormalized view from the joined row and its line items.
    pub fn from_parts(order: Order, items: Vec<OrderItem>) -> Self {
        let customer = order.customer();
        let store = order.store();
        let staff = StaffResponse {
            staff_id: order.staff_id,
            first_name: order.staff_first_name,
            last_name: order.staff_last_name,
            email: order.staff_email,
            phone: order.staff_phone,
            active: order.staff_active,
            store_id: order.staff_store_id,
            store_data: None,
            manager_id: order.staff_manager_id,
        };

        OrderResponse {
            order_id: order.order_id,
            customer_id: order.customer_id,
            customer_data: customer.into(),
            order_status: order.order_status,
            order_date: order.order_date,
            required_date: order.required_date,
            shipped_date: order.shipped_date,
            store_id: order.store_id,
            store_data: store.into(),
            staff_id: order.staff_id,
            staff_data: staff,
            order_items: items.into_iter().map(OrderItemResponse::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderListResponse {
    pub count: i64,
    pub orders: Vec<OrderResponse>,
}
