//! Lenient serde helpers for upstream catalog records
//!
//! The catalog API is loosely typed: barcodes arrive as strings or numbers,
//! nutrient values as numbers or numeric strings, and any field may be
//! `null`. These helpers never fail on a type mismatch; they yield `None`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a string that may arrive as a number, `null` or garbage
pub fn flexible_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Value>::deserialize(deserializer).map(|opt| opt.as_ref().and_then(value_as_string))
}

/// Read a JSON scalar as text
pub fn value_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Read a JSON scalar as a finite number
pub fn value_as_f64(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Record {
        #[serde(default, deserialize_with = "flexible_string")]
        code: Option<String>,
    }

    #[test]
    fn test_flexible_string_accepts_numbers() {
        let record: Record = serde_json::from_value(json!({ "code": 3017620422003u64 })).unwrap();
        assert_eq!(record.code.as_deref(), Some("3017620422003"));
    }

    #[test]
    fn test_flexible_string_tolerates_null_and_objects() {
        let record: Record = serde_json::from_value(json!({ "code": null })).unwrap();
        assert!(record.code.is_none());
        let record: Record = serde_json::from_value(json!({ "code": { "x": 1 } })).unwrap();
        assert!(record.code.is_none());
        let record: Record = serde_json::from_value(json!({})).unwrap();
        assert!(record.code.is_none());
    }

    #[test]
    fn test_value_as_f64() {
        assert_eq!(value_as_f64(&json!(12.5)), Some(12.5));
        assert_eq!(value_as_f64(&json!(" 3.2 ")), Some(3.2));
        assert_eq!(value_as_f64(&json!("traces")), None);
        assert_eq!(value_as_f64(&json!(true)), None);
    }
}
