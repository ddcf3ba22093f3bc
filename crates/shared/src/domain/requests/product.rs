use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Product name is required"))]
    #[schema(example = "Trek 820 - 2016")]
    pub product_name: String,

    #[validate(range(min = 1, message = "Brand ID is required"))]
    #[schema(example = 9)]
    pub brand_id: i32,

    #[validate(range(min = 1, message = "Category ID is required"))]
    #[schema(example = 6)]
    pub category_id: i32,

    #[validate(range(min = 1900, max = 2100, message = "Model year is out of range"))]
    #[schema(example = 2016)]
    pub model_year: i32,

    #[validate(range(min = 0.0, message = "List price must not be negative"))]
    #[schema(example = 379.99)]
    pub list_price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, message = "Product name is required"))]
    pub product_name: String,

    #[validate(range(min = 1, message = "Brand ID is required"))]
    pub brand_id: i32,

    #[validate(range(min = 1, message = "Category ID is required"))]
    pub category_id: i32,

    #[validate(range(min = 1900, max = 2100, message = "Model year is out of range"))]
    pub model_year: i32,

    #[validate(range(min = 0.0, message = "List price must not be negative"))]
    pub list_price: f64,
}
