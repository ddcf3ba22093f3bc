use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub category_id: i32,
    pub category_name: String,
}

impl Category {
    pub const PATCHABLE: &'static [(&'static str, &'static str)] = &[
        ("category_name", "TEXT"),
    ];
}
