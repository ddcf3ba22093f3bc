use crate::model::Category;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    pub category_id: i32,
    pub category_name: String,
}

impl From<Category> for CategoryResponse {
    fn from(value: Category) -> Self {
        CategoryResponse {
            category_id: value.category_id,
            category_name: value.category_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryListResponse {
    pub count: i64,
    pub categories: Vec<CategoryResponse>,
}
