use serde_json::Value;

/// Flatten a JSON query object into `key=value` pairs using bracket
/// notation for nesting: `{"filter": {"status": "paid"}}` becomes
/// `filter[status]=paid`, arrays use indices (`ids[0]=a`). Null becomes an
/// empty value. A non-object top level yields no pairs.
pub fn flatten_query(query: &Value) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    if let Value::Object(fields) = query {
        for (key, value) in fields {
            push_pairs(key.clone(), value, &mut pairs);
        }
    }
    pairs
}

fn push_pairs(key: String, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Object(fields) => {
            for (sub, nested) in fields {
                push_pairs(format!("{key}[{sub}]"), nested, pairs);
            }
        }
        Value::Array(items) => {
            for (index, nested) in items.iter().enumerate() {
                push_pairs(format!("{key}[{index}]"), nested, pairs);
            }
        }
        Value::String(text) => pairs.push((key, text.clone())),
        Value::Null => pairs.push((key, String::new())),
        other => pairs.push((key, other.to_string())),
    }
}
