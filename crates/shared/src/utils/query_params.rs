use std::collections::HashMap;

/// Rewrites `:name` placeholders into postgres positional placeholders.
///
/// Names are numbered in order of first appearance and a repeated name reuses
/// its position. Returns the rewritten statement together with the arguments
/// ordered to match `$1..$n`. Postgres casts (`::TEXT`), quoted literals and
/// names with no entry in `params` are copied through untouched.
pub fn replace_query_params<V, S>(query: &str, params: &HashMap<String, V, S>) -> (String, Vec<V>)
where
    V: Clone,
    S: std::hash::BuildHasher,
{
    let chars: Vec<char> = query.chars().collect();
    let mut out = String::with_capacity(query.len());
    let mut args = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut in_literal = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '\'' {
            in_literal = !in_literal;
            out.push(c);
            i += 1;
            continue;
        }

        let starts_placeholder = !in_literal
            && c == ':'
            && (i == 0 || chars[i - 1] != ':')
            && chars
                .get(i + 1)
                .is_some_and(|n| n.is_ascii_alphabetic() || *n == '_');

        if !starts_placeholder {
            out.push(c);
            i += 1;
            continue;
        }

        let start = i + 1;
        let mut end = start;
        while end < chars.len() && (chars[end].is_ascii_alphanumeric() || chars[end] == '_') {
            end += 1;
        }
        let name: String = chars[start..end].iter().collect();

        match params.get(&name) {
            Some(value) => {
                let position = match positions.get(&name) {
                    Some(position) => *position,
                    None => {
                        args.push(value.clone());
                        positions.insert(name, args.len());
                        args.len()
                    }
                };
                out.push('$');
                out.push_str(&position.to_string());
            }
            None => {
                out.push(':');
                out.push_str(&name);
            }
        }

        i = end;
    }

    (out, args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn params(pairs: &[(&str, Value)]) -> HashMap<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn numbers_placeholders_in_order_of_appearance() {
        let (sql, args) = replace_query_params(
            "UPDATE brands SET brand_name = :brand_name WHERE brand_id = :id",
            &params(&[("id", json!(7)), ("brand_name", json!("Trek"))]),
        );

        assert_eq!(sql, "UPDATE brands SET brand_name = $1 WHERE brand_id = $2");
        assert_eq!(args, vec![json!("Trek"), json!(7)]);
    }

    #[test]
    fn repeated_names_share_one_position() {
        let (sql, args) = replace_query_params(
            "SELECT :a, :b, :a",
            &params(&[("a", json!(1)), ("b", json!(2))]),
        );

        assert_eq!(sql, "SELECT $1, $2, $1");
        assert_eq!(args.len(), 2);
    }

    #[test]
    fn casts_and_literals_are_left_alone() {
        let (sql, args) = replace_query_params(
            "SELECT :id::TEXT, 'a:b', CAST(:q AS INTEGER)",
            &params(&[("id", json!(1)), ("q", json!("3")), ("b", json!("x"))]),
        );

        assert_eq!(sql, "SELECT $1::TEXT, 'a:b', CAST($2 AS INTEGER)");
        assert_eq!(args, vec![json!(1), json!("3")]);
    }

    #[test]
    fn unknown_names_are_kept_verbatim() {
        let (sql, args) =
            replace_query_params("WHERE a = :missing", &params(&[("other", json!(1))]));

        assert_eq!(sql, "WHERE a = :missing");
        assert!(args.is_empty());
    }
}
