use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCustomerRequest {
    #[validate(length(min = 1, message = "First name is required"))]
    #[schema(example = "Debra")]
    pub first_name: String,

    #[validate(length(min = 1, message = "Last name is required"))]
    #[schema(example = "Burks")]
    pub last_name: String,

    pub phone: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "debra.burks@yahoo.com")]
    pub email: Option<String>,

    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCustomerRequest {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,

    pub phone: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}
