use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Store;

/// A stock row keyed by `(store_id, product_id)`, joined with its store and
/// product.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Stock {
    pub store_id: i32,
    pub product_id: i32,
    pub quantity: i32,

    pub store_name: String,
    pub store_phone: Option<String>,
    pub store_email: Option<String>,
    pub store_street: Option<String>,
    pub store_city: Option<String>,
    pub store_state: Option<String>,
    pub store_zip_code: Option<String>,

    pub product_name: String,
    pub brand_id: i32,
    pub category_id: i32,
    pub model_year: i32,
    pub list_price: f64,
}

impl Stock {
    pub const PATCHABLE: &'static [(&'static str, &'static str)] = &[
        ("quantity", "INTEGER"),
    ];

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
