use crate::errors::ServiceError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct PatchRequest {
    #[schema(value_type = Object, example = json!({"brand_name": "Trek"}))]
    pub fields: Map<String, Value>,
}

impl PatchRequest {
    /// Rejects an empty body and any column outside `allowed`.
    pub fn check(&self, allowed: &[(&str, &str)]) -> Result<(), ServiceError> {
        if self.fields.is_empty() {
            return Err(ServiceError::Validation(vec!["no fields".to_string()]));
        }

        let unknown: Vec<String> = self
            .fields
            .keys()
            .filter(|key| !allowed.iter().any(|(column, _)| column == key))
            .map(|key| format!("unknown field: {key}"))
            .collect();

        if unknown.is_empty() {
            Ok(())
        } else {
            Err(ServiceError::Validation(unknown))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const COLUMNS: &[(&str, &str)] = &[("brand_name", "TEXT")];

    fn request(value: Value) -> PatchRequest {
        serde_json::from_value(json!({ "fields": value })).unwrap()
    }

    #[test]
    fn empty_fields_are_rejected() {
        let err = request(json!({})).check(COLUMNS).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(msgs) if msgs == ["no fields"]));
    }

    #[test]
    fn unknown_columns_are_rejected() {
        let err = request(json!({"brand_id": 3})).check(COLUMNS).unwrap_err();
        assert!(
            matches!(err, ServiceError::Validation(msgs) if msgs == ["unknown field: brand_id"])
        );
    }

    #[test]
    fn allowed_columns_pass() {
        assert!(request(json!({"brand_name": "Trek"})).check(COLUMNS).is_ok());
    }
}
