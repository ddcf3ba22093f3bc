use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Store;

/// A staff row joined with the store it works at.
///
/// Store columns are selected with a `store_` prefix so they do not collide
/// with the staff member's own contact columns.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Staff {
    pub staff_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub active: bool,
    pub store_id: i32,
    pub manager_id: Option<i32>,

    pub store_name: String,
    pub store_phone: Option<String>,
    pub store_email: Option<String>,
    pub store_street: Option<String>,
    pub store_city: Option<String>,
    pub store_state: Option<String>,
    pub store_zip_code: Option<String>,
}

impl Staff {
    pub const PATCHABLE: &'static [(&'static str, &'static str)] = &[
        ("first_name", "TEXT"),
        ("last_name", "TEXT"),
        ("email", "TEXT"),
        ("phone", "TEXT"),
        ("active", "BOOLEAN"),
        ("store_id", "INTEGER"),
        ("manager_id", "INTEGER"),
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
