use super::StoreResponse;
use crate::model::Staff;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StaffResponse {
    pub staff_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub active: bool,
    pub store_id: i32,
    pub store_data: Option<StoreResponse>,
    pub manager_id: Option<i32>,
}

impl From<Staff> for StaffResponse {
    fn from(value: Staff) -> Self {
        let store = value.store();
        StaffResponse {
            staff_id: value.staff_id,
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            phone: value.phone,
            active: value.active,
            store_id: value.store_id,
            store_data: Some(store.into()),
            manager_id: value.manager_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StaffListResponse {
    pub count: i64,
    pub staffs: Vec<StaffResponse>,
}
