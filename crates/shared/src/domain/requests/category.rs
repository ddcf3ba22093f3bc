use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, message = "Category name is required"))]
    #[schema(example = "Mountain Bikes")]
    pub category_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, message = "Category name is required"))]
    #[schema(example = "Mountain Bikes")]
    pub category_name: String,
}
