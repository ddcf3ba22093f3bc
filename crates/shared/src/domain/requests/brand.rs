use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateBrandRequest {
    #[validate(length(min = 1, message = "Brand name is required"))]
    #[schema(example = "Electra")]
    pub brand_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateBrandRequest {
    #[validate(length(min = 1, message = "Brand name is required"))]
    #[schema(example = "Electra")]
    pub brand_name: String,
}
