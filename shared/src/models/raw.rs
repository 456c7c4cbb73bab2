//! Raw upstream product record

use super::serde_helpers::flexible_string;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Product record exactly as the catalog API returns it
///
/// Every field is optional. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawProduct {
    #[serde(default, deserialize_with = "flexible_string")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "flexible_string")]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "flexible_string")]
    pub categories: Option<String>,
    #[serde(default, deserialize_with = "flexible_string")]
    pub brands: Option<String>,
    #[serde(default, deserialize_with = "flexible_string")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "flexible_string")]
    pub ingredients_text: Option<String>,
    /// Single letter grade, sometimes "unknown" or "not-applicable"
    #[serde(default, deserialize_with = "flexible_string")]
    pub nutrition_grades: Option<String>,
    /// Comma-delimited label list
    #[serde(default, deserialize_with = "flexible_string")]
    pub labels: Option<String>,
    /// Nutrient facts keyed like `fat_100g`; values are numbers or numeric strings
    #[serde(default)]
    pub nutriments: Option<Map<String, Value>>,
}

impl RawProduct {
    /// Record carrying only a barcode
    pub fn with_code(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_upstream_record() {
        let raw: RawProduct = serde_json::from_value(json!({
            "code": "3017620422003",
            "product_name": "Nutella",
            "brands": "Ferrero",
            "nutrition_grades": "e",
            "labels": "Sans gluten, Point Vert",
            "nutriments": { "fat_100g": 30.9, "salt_100g": "0.107" },
            "unknown_field": [1, 2, 3]
        }))
        .unwrap();

        assert_eq!(raw.code.as_deref(), Some("3017620422003"));
        assert_eq!(raw.product_name.as_deref(), Some("Nutella"));
        assert_eq!(raw.nutrition_grades.as_deref(), Some("e"));
        let nutriments = raw.nutriments.unwrap();
        assert_eq!(nutriments.get("fat_100g"), Some(&json!(30.9)));
    }

    #[test]
    fn test_deserialize_empty_record() {
        let raw: RawProduct = serde_json::from_value(json!({})).unwrap();
        assert_eq!(raw, RawProduct::default());
    }
}
