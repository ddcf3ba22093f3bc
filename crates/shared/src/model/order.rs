use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Customer, Store};

/// An order row joined with its customer, store and staff member.
///
/// Related columns are prefixed (`customer_`, `store_`, `staff_`) in the
/// select list; the accessors below rebuild the borrowed snapshots.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub order_id: i32,
    pub customer_id: i32,
    pub order_status: i32,
    pub order_date: Option<NaiveDate>,
    pub required_date: Option<NaiveDate>,
    pub shipped_date: Option<NaiveDate>,
    pub store_id: i32,
    pub staff_id: i32,

    pub customer_first_name: String,
    pub customer_last_name: String,
    pub customer_phone: Option<String>,
    pub customer_email: Option<String>,
    pub customer_street: Option<String>,
    pub customer_city: Option<String>,
    pub customer_state: Option<String>,
    pub customer_zip_code: Option<String>,

    pub store_name: String,
    pub store_phone: Option<String>,
    pub store_email: Option<String>,
    pub store_street: Option<String>,
    pub store_city: Option<String>,
    pub store_state: Option<String>,
    pub store_zip_code: Option<String>,

    pub staff_first_name: String,
    pub staff_last_name: String,
    pub staff_email: String,
    pub staff_phone: Option<String>,
    pub staff_active: bool,
    pub staff_store_id: i32,
    pub staff_manager_id: Option<i32>,
}

impl Order {
    pub const PATCHABLE: &'static [(&'static str, &'static str)] = &[
        ("customer_id", "INTEGER"),
        ("order_status", "INTEGER"),
        ("order_date", "DATE"),
        ("required_date", "DATE"),
        ("shipped_date", "DATE"),
        ("store_id", "INTEGER"),
        ("staff_id", "INTEGER"),
    ];

    pub fn customer(&self) -> Customer {
        Customer {
            customer_id: self.customer_id,
            first_name: self.customer_first_name.clone(),
            last_name: self.customer_last_name.clone(),
            phone: self.customer_phone.clone(),
            email: self.customer_email.clone(),
            street: self.customer_street.clone(),
            city: self.customer_city.clone(),
            state: self.customer_state.clone(),
            zip_code: self.customer_zip_code.clone(),
        }
    }

    pub fn store(&self) -> Store {
        Store {
            store_id: self.store_id,
            store_name: self.store_name.clone(),
            phone: self.store_phone.clone(),
            email: self.store_email.clone(),
            street: self.store_street.clone(),
            city: self.store_city.clone(),
            state: self.store_state.clone(),
            zip_code: self.store_zip_code.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderItem {
    pub order_id: i32,
    pub item_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub list_price: f64,
    pub discount: f64,
}
