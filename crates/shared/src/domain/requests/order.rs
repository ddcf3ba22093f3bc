use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    #[validate(range(min = 1, message = "Customer ID is required"))]
    #[schema(example = 1)]
    pub customer_id: i32,

    #[validate(range(min = 1, max = 4, message = "Order status must be between 1 and 4"))]
    #[schema(example = 1)]
    pub order_status: i32,

    #[schema(value_type = Option<String>, format = Date, example = "2016-01-01")]
    pub order_date: Option<NaiveDate>,

    #[schema(value_type = Option<String>, format = Date, example = "2016-01-03")]
    pub required_date: Option<NaiveDate>,

    #[schema(value_type = Option<String>, format = Date)]
    pub shipped_date: Option<NaiveDate>,

    #[validate(range(min = 1, message = "Store ID is required"))]
    #[schema(example = 1)]
    pub store_id: i32,

    #[validate(range(min = 1, message = "Staff ID is required"))]
    #[schema(example = 2)]
    pub staff_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderRequest {
    #[validate(range(min = 1, message = "Customer ID is required"))]
    pub customer_id: i32,

    #[validate(range(min = 1, max = 4, message = "Order status must be between 1 and 4"))]
    pub order_status: i32,

    #[schema(value_type = Option<String>, format = Date)]
    pub order_date: Option<NaiveDate>,

    #[schema(value_type = Option<String>, format = Date)]
    pub required_date: Option<NaiveDate>,

    #[schema(value_type = Option<String>, format = Date)]
    pub shipped_date: Option<NaiveDate>,

    #[validate(range(min = 1, message = "Store ID is required"))]
    pub store_id: i32,

    #[validate(range(min = 1, message = "Staff ID is required"))]
    pub staff_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderItemRequest {
    #[validate(range(min = 1, message = "Order ID is required"))]
    #[schema(example = 5)]
    pub order_id: i32,

    #[validate(range(min = 1, message = "Product ID is required"))]
    #[schema(example = 9)]
    pub product_id: i32,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    #[schema(example = 2)]
    pub quantity: i32,

    /// Unit price; defaults to the product's list price.
    #[validate(range(min = 0.0, message = "List price must not be negative"))]
    pub list_price: Option<f64>,

    #[validate(range(min = 0.0, max = 1.0, message = "Discount must be between 0 and 1"))]
    #[schema(example = 0.05)]
    pub discount: Option<f64>,
}

/// A fully priced order item. The stock row it draws from is the one of the
/// order's store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderItem {
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub list_price: f64,
    pub discount: f64,
}
