use super::{ProductResponse, StoreResponse};
use crate::model::Stock;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StockResponse {
    pub store_id: i32,
    pub store_data: StoreResponse,
    pub product_id: i32,
    pub product_data: ProductResponse,
    pub quantity: i32,
}

impl From<Stock> for StockResponse {
    fn from(value: Stock) -> Self {
        let store = value.store();
        StockResponse {
            store_id: value.store_id,
            store_data: store.into(),
            product_id: value.product_id,
            product_data: ProductResponse {
                product_id: value.product_id,
                product_name: value.product_name,
                brand_id: value.brand_id,
                brand_data: None,
                category_id: value.category_id,
                category_data: None,
                model_year: value.model_year,
                list_price: value.list_price,
            },
            quantity: value.quantity,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StockListResponse {
    pub count: i64,
    pub stocks: Vec<StockResponse>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StockKeyResponse {
    pub store_id: i32,
    pub product_id: i32,
}
