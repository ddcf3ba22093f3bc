use crate::model::Brand;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BrandResponse {
    pub brand_id: i32,
    pub brand_name: String,
}

impl From<Brand> for BrandResponse {
    fn from(value: Brand) -> Self {
        BrandResponse {
            brand_id: value.brand_id,
            brand_name: value.brand_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BrandListResponse {
    pub count: i64,
    pub brands: Vec<BrandResponse>,
}
