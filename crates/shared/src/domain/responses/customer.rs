use crate::model::Customer;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CustomerResponse {
    pub customer_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

impl From<Customer> for CustomerResponse {
    fn from(value: Customer) -> Self {
        CustomerResponse {
            customer_id: value.customer_id,
            first_name: value.first_name,
            last_name: value.last_name,
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
pub struct CustomerListResponse {
    pub count: i64,
    pub customers: Vec<CustomerResponse>,
}
