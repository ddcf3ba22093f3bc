use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Store {
    pub store_id: i32,
    pub store_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

impl Store {
    pub const PATCHABLE: &'static [(&'static str, &'static str)] = &[
        ("store_name", "TEXT"),
        ("phone", "TEXT"),
        ("email", "TEXT"),
        ("street", "TEXT"),
        ("city", "TEXT"),
        ("state", "TEXT"),
        ("zip_code", "TEXT"),
    ];
}
