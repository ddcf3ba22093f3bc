use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Brand {
    pub brand_id: i32,
    pub brand_name: String,
}

impl Brand {
    /// Columns accepted by a patch, with the SQL type each value is cast to.
    pub const PATCHABLE: &'static [(&'static str, &'static str)] = &[
        ("brand_name", "TEXT"),
    ];
}
