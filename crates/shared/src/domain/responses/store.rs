use crate::model::Store;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StoreResponse {
    pub store_id: i32,
    pub store_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

impl From<Store> for StoreResponse {
    fn from(value: Store) -> Self {
        StoreResponse {
            store_id: value.store_id,
            store_name: value.store_name,
            phone: value.phone,
            email: value.email,
            street: value.street,
            city: value.city,
            state: value.state,
            zip_code: value.zip_code,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StoreListResponse {
    pub count: i64,
    pub stores: Vec<StoreResponse>,
}
