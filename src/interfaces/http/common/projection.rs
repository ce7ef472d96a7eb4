//! Sparse fieldsets: `?fields=a,b` keeps only the named top-level keys.

use serde::Serialize;
use serde_json::{Map, Value};

/// Splits a comma-separated `fields` parameter and checks every name
/// against `allowed`. Blank entries are ignored; an absent or blank
/// parameter yields `None` (full records).
pub fn parse_fields(raw: Option<&str>, allowed: &[&str]) -> Result<Option<Vec<String>>, String> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let mut fields = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        if !allowed.contains(&name) {
            return Err(format!(
                "Unknown field '{}'; expected one of: {}",
                name,
                allowed.join(", ")
            ));
        }
        if !fields.iter().any(|f| f == name) {
            fields.push(name.to_string());
        }
    }

    Ok(if fields.is_empty() { None } else { Some(fields) })
}

/// Serializes `record` and drops every top-level key not in `fields`.
pub fn project<T: Serialize>(record: &T, fields: Option<&[String]>) -> serde_json::Result<Value> {
    let value = serde_json::to_value(record)?;
    let Some(fields) = fields else {
        return Ok(value);
    };

    Ok(match value {
        Value::Object(mut object) => {
            let mut kept = Map::new();
            for field in fields {
                if let Some(v) = object.remove(field) {
                    kept.insert(field.clone(), v);
                }
            }
            Value::Object(kept)
        }
        other => other,
    })
}
