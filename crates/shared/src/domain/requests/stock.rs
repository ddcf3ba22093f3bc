use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateStockRequest {
    #[validate(range(min = 1, message = "Store ID is required"))]
    #[schema(example = 1)]
    pub store_id: i32,

    #[validate(range(min = 1, message = "Product ID is required"))]
    #[schema(example = 1)]
    pub product_id: i32,

    #[validate(range(min = 0, message = "Quantity must not be negative"))]
    #[schema(example = 27)]
    pub quantity: i32,
}

/// Full replacement of a stock row; the `(store_id, product_id)` key comes from the path.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateStockRequest {
    #[validate(range(min = 0, message = "Quantity must not be negative"))]
    #[schema(example = 27)]
    pub quantity: i32,
}
