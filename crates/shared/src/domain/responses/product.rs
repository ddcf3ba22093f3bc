use super::{BrandResponse, CategoryResponse};
use crate::model::Product;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub product_id: i32,
    pub product_name: String,
    pub brand_id: i32,
    pub brand_data: Option<BrandResponse>,
    pub category_id: i32,
    pub category_data: Option<CategoryResponse>,
    pub model_year: i32,
    pub list_price: f64,
}

impl From<Product> for ProductResponse {
    fn from(value: Product) -> Self {
        let brand = value.brand();
        let category = value.category();
        ProductResponse {
            product_id: value.product_id,
            product_name: value.product_name,
            brand_id: value.brand_id,
            brand_data: Some(brand.into()),
            category_id: value.category_id,
            category_data: Some(category.into()),
            model_year: value.model_year,
            list_price: value.list_price,
        }
    }
}

/// Product page; also the payload stored by the product listing cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductListResponse {
    pub count: i64,
    pub products: Vec<ProductResponse>,
}
