use crate::{errors::RepositoryError, utils::replace_query_params};
use serde_json::{Map, Value};
use sqlx::{
    PgConnection, Postgres, Row,
    postgres::{PgArguments, PgRow},
    query::Query,
};
use std::collections::HashMap;
use tracing::error;

/// Total row count carried by every row of a `COUNT(*) OVER()` page.
pub(crate) fn total_count(rows: &[PgRow]) -> Result<i64, RepositoryError> {
    Ok(rows
        .first()
        .map(|row| row.try_get::<i64, _>("total_count"))
        .transpose()?
        .unwrap_or(0))
}

/// Builds a parameterized `UPDATE` touching only the given columns.
///
/// Each value is cast to the column's declared type, so JSON numbers, strings,
/// booleans and nulls can all be bound without knowing the column up front.
/// Key columns are matched through `:key_<column>` placeholders.
pub(crate) fn patch_statement(
    table: &str,
    allowed: &[(&str, &str)],
    fields: &Map<String, Value>,
    keys: &[(&str, Value)],
) -> Result<(String, Vec<Value>), RepositoryError> {
    if fields.is_empty() {
        return Err(RepositoryError::Custom("no fields to patch".to_string()));
    }

    let mut params: HashMap<String, Value> = HashMap::with_capacity(fields.len() + keys.len());
    let mut assignments = Vec::with_capacity(fields.len());

    for (column, value) in fields {
        let (_, sql_type) = allowed
            .iter()
            .find(|(name, _)| name == column)
            .ok_or_else(|| RepositoryError::Custom(format!("column {column} cannot be patched")))?;

        assignments.push(format!("{column} = CAST(:{column} AS {sql_type})"));
        params.insert(column.clone(), value.clone());
    }

    let conditions: Vec<String> = keys
        .iter()
        .map(|(column, value)| {
            let name = format!("key_{column}");
            params.insert(name.clone(), value.clone());
            format!("{column} = :{name}")
        })
        .collect();

    let statement = format!(
        "UPDATE {table} SET {} WHERE {}",
        assignments.join(", "),
        conditions.join(" AND ")
    );

    Ok(replace_query_params(&statement, &params))
}

fn bind_json<'q>(
    query: Query<'q, Postgres, PgArguments>,
    value: Value,
) -> Query<'q, Postgres, PgArguments> {
    match value {
        Value::Null => query.bind(None::<String>),
        Value::Bool(flag) => query.bind(flag),
        Value::Number(number) => match number.as_i64() {
            Some(int) => query.bind(int),
            None => query.bind(number.as_f64()),
        },
        Value::String(text) => query.bind(text),
        other => query.bind(other.to_string()),
    }
}

pub(crate) async fn execute_patch(
    conn: &mut PgConnection,
    statement: &str,
    args: Vec<Value>,
) -> Result<u64, RepositoryError> {
    let query = args
        .into_iter()
        .fold(sqlx::query(statement), |query, value| bind_json(query, value));

    let result = query.execute(conn).await.map_err(|err| {
        error!("❌ Failed to apply patch `{statement}`: {:?}", err);
        RepositoryError::classify(err)
    })?;

    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const COLUMNS: &[(&str, &str)] = &[("quantity", "INTEGER"), ("note", "TEXT")];

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn builds_cast_assignments_and_key_conditions() {
        let (sql, args) = patch_statement(
            "stocks",
            COLUMNS,
            &fields(json!({"quantity": 4})),
            &[("store_id", json!(1)), ("product_id", json!(9))],
        )
        .unwrap();

        assert_eq!(
            sql,
            "UPDATE stocks SET quantity = CAST($1 AS INTEGER) WHERE store_id = $2 AND product_id = $3"
        );
        assert_eq!(args, vec![json!(4), json!(1), json!(9)]);
    }

    #[test]
    fn rejects_columns_outside_the_allow_list() {
        let err = patch_statement(
            "stocks",
            COLUMNS,
            &fields(json!({"store_id": 2})),
            &[("store_id", json!(1))],
        )
        .unwrap_err();

        assert!(matches!(err, RepositoryError::Custom(msg) if msg.contains("store_id")));
    }

    #[test]
    fn rejects_empty_field_sets() {
        assert!(patch_statement("stocks", COLUMNS, &Map::new(), &[]).is_err());
    }
}
