use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateStaffRequest {
    #[validate(length(min = 1, message = "First name is required"))]
    #[schema(example = "Fabiola")]
    pub first_name: String,

    #[validate(length(min = 1, message = "Last name is required"))]
    #[schema(example = "Jackson")]
    pub last_name: String,

    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "fabiola.jackson@bikes.shop")]
    pub email: String,

    pub phone: Option<String>,

    #[serde(default)]
    pub active: bool,

    #[validate(range(min = 1, message = "Store ID is required"))]
    #[schema(example = 1)]
    pub store_id: i32,

    pub manager_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateStaffRequest {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub phone: Option<String>,

    #[serde(default)]
    pub active: bool,

    #[validate(range(min = 1, message = "Store ID is required"))]
    pub store_id: i32,

    pub manager_id: Option<i32>,
}
