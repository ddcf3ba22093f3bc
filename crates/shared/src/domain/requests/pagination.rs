use crate::{config::PaginationConfig, errors::ServiceError};
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

/// Raw list query string. `offset` and `limit` stay textual so a malformed
/// value can be reported instead of rejected by the extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
pub struct ListQuery {
    #[param(example = "0")]
    pub offset: Option<String>,

    #[param(example = "10")]
    pub limit: Option<String>,

    pub search: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListParams {
    pub offset: i64,
    pub limit: i64,
    pub search: Option<String>,
}

impl ListQuery {
    pub fn resolve(&self, defaults: &PaginationConfig) -> Result<ListParams, ServiceError> {
        let offset = parse_or(self.offset.as_deref(), defaults.default_offset)
            .filter(|v| *v >= 0)
            .ok_or_else(|| ServiceError::Validation(vec!["invalid offset".to_string()]))?;

        let limit = parse_or(self.limit.as_deref(), defaults.default_limit)
            .filter(|v| *v >= 0)
            .ok_or_else(|| ServiceError::Validation(vec!["invalid limit".to_string()]))?;

        let search = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned);

        Ok(ListParams {
            offset,
            limit,
            search,
        })
    }
}

fn parse_or(raw: Option<&str>, default: i64) -> Option<i64> {
    match raw.map(str::trim) {
        None | Some("") => Some(default),
        Some(value) => value.parse().ok(),
    }
}

impl ListParams {
    pub fn new(offset: i64, limit: i64, search: Option<&str>) -> Self {
        Self {
            offset,
            limit,
            search: search.map(str::to_owned),
        }
    }

    pub fn search_pattern(&self) -> Option<&str> {
        self.search.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(offset: Option<&str>, limit: Option<&str>, search: Option<&str>) -> ListQuery {
        ListQuery {
            offset: offset.map(str::to_owned),
            limit: limit.map(str::to_owned),
            search: search.map(str::to_owned),
        }
    }

    #[test]
    fn missing_values_fall_back_to_defaults() {
        let params = query(None, Some(""), None)
            .resolve(&PaginationConfig::default())
            .unwrap();

        assert_eq!(params, ListParams::new(0, 10, None));
    }

    #[test]
    fn non_integer_offset_is_rejected() {
        let err = query(Some("abc"), None, None)
            .resolve(&PaginationConfig::default())
            .unwrap_err();

        assert_eq!(err.to_string(), r#"Validation failed: ["invalid offset"]"#);
    }

    #[test]
    fn negative_limit_is_rejected() {
        let err = query(None, Some("-1"), None)
            .resolve(&PaginationConfig::default())
            .unwrap_err();

        assert!(matches!(err, ServiceError::Validation(msgs) if msgs == ["invalid limit"]));
    }

    #[test]
    fn blank_search_is_dropped() {
        let params = query(Some("5"), Some("20"), Some("   "))
            .resolve(&PaginationConfig::default())
            .unwrap();

        assert_eq!(params, ListParams::new(5, 20, None));
    }
}
