use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Login is required"))]
    #[schema(example = "genna")]
    pub login: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}
