use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateStoreRequest {
    #[validate(length(min = 1, message = "Store name is required"))]
    #[schema(example = "Santa Cruz Bikes")]
    pub store_name: String,

    pub phone: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateStoreRequest {
    #[validate(length(min = 1, message = "Store name is required"))]
    pub store_name: String,

    pub phone: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}
