use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "First name is required"))]
    #[schema(example = "Genna")]
    pub first_name: String,

    #[validate(length(min = 1, message = "Last name is required"))]
    #[schema(example = "Serrano")]
    pub last_name: String,

    #[validate(length(min = 3, message = "Login must be at least 3 characters"))]
    #[schema(example = "genna")]
    pub login: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,

    #[validate(length(min = 3, message = "Login must be at least 3 characters"))]
    pub login: String,

    /// When present the stored hash is replaced.
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: Option<String>,

    pub phone_number: Option<String>,
}
