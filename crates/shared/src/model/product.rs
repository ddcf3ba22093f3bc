use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Brand, Category};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub product_id: i32,
    pub product_name: String,
    pub brand_id: i32,
    pub brand_name: String,
    pub category_id: i32,
    pub category_name: String,
    pub model_year: i32,
    pub list_price: f64,
}

impl Product {
    pub const PATCHABLE: &'static [(&'static str, &'static str)] = &[
        ("product_name", "TEXT"),
        ("brand_id", "INTEGER"),
        ("category_id", "INTEGER"),
        ("model_year", "INTEGER"),
        ("list_price", "DOUBLE PRECISION"),
    ];

    pub fn brand(&self) -> Brand {
        Brand {
            brand_id: self.brand_id,
            brand_name: self.brand_name.clone(),
        }
    }

    pub fn category(&self) -> Category {
        Category {
            category_id: self.category_id,
            category_name: self.category_name.clone(),
        }
    }
}
