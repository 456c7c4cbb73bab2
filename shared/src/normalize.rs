//! Catalog normalizer
//!
//! Turns a [`RawProduct`] into the canonical [`Product`]. Every field is
//! defaulted independently, so there are no failure modes: a record with no
//! usable fields still yields a valid product.

use crate::models::serde_helpers::value_as_f64;
use crate::models::{NutritionGrade, Nutrient, Nutrients, Product, RawProduct};

/// Normalize one raw record. Does not touch its input.
pub fn normalize(raw: &RawProduct) -> Product {
    Product {
        code: non_blank(raw.code.as_deref()).unwrap_or_default(),
        name: non_blank(raw.product_name.as_deref()),
        categories: non_blank(raw.categories.as_deref()),
        brands: non_blank(raw.brands.as_deref()),
        image_url: non_blank(raw.image_url.as_deref()),
        ingredients_text: non_blank(raw.ingredients_text.as_deref()),
        nutrition_grade: raw.nutrition_grades.as_deref().and_then(NutritionGrade::parse),
        labels: split_labels(raw.labels.as_deref()),
        nutrients: extract_nutrients(raw),
    }
}

/// Normalize a whole result set, preserving order
pub fn normalize_all(raws: &[RawProduct]) -> Vec<Product> {
    raws.iter().map(normalize).collect()
}

/// Split a comma-delimited label field, trimming each entry and dropping empties
pub fn split_labels(raw: Option<&str>) -> Vec<String> {
    raw.map(|labels| {
        labels
            .split(',')
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn extract_nutrients(raw: &RawProduct) -> Nutrients {
    let mut nutrients = Nutrients::new();
    let Some(facts) = raw.nutriments.as_ref() else {
        return nutrients;
    };

    for nutrient in Nutrient::ALL {
        let value = nutrient
            .source_keys()
            .iter()
            .find_map(|key| facts.get(*key).and_then(value_as_f64));
        if let Some(value) = value {
            nutrients.insert(nutrient, value);
        }
    }
    nutrients
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_record() {
        let product = normalize(&RawProduct::default());
        assert_eq!(product.code, "");
        assert_eq!(product.display_name(), "Unknown Product");
        assert_eq!(product.display_categories(), "Uncategorized");
        assert!(product.nutrition_grade.is_none());
        assert!(product.labels.is_empty());
        assert!(product.nutrients.is_empty());
    }

    #[test]
    fn test_full_record() {
        let raw: RawProduct = serde_json::from_value(json!({
            "code": 737628064502u64,
            "product_name": "Thai peanut noodle kit",
            "categories": "Noodles, Meals",
            "brands": "Simply Asia",
            "image_url": "https://images.example/737628064502.jpg",
            "ingredients_text": "Rice noodles, peanut sauce",
            "nutrition_grades": "D",
            "labels": " No gluten ,  Vegan,,",
            "nutriments": {
                "energy-kcal_100g": 385,
                "fat_100g": "7.72",
                "carbohydrates_100g": 70.1,
                "proteins_100g": 9.62,
                "salt_100g": "n/a"
            }
        }))
        .unwrap();

        let product = normalize(&raw);
        assert_eq!(product.code, "737628064502");
        assert_eq!(product.display_name(), "Thai peanut noodle kit");
        assert_eq!(product.nutrition_grade, Some(NutritionGrade::D));
        assert_eq!(product.labels, vec!["No gluten", "Vegan"]);
        assert_eq!(product.nutrients.get(Nutrient::Energy), Some(385.0));
        assert_eq!(product.nutrients.get(Nutrient::Fat), Some(7.72));
        assert_eq!(product.nutrients.get(Nutrient::Fiber), None);
        assert_eq!(product.nutrients.get(Nutrient::Salt), None);
        assert_eq!(product.nutrient_display(Nutrient::Fiber), "N/A");
    }

    #[test]
    fn test_legacy_energy_key() {
        let raw: RawProduct = serde_json::from_value(json!({
            "nutriments": { "energy_kcal_100g": 120 }
        }))
        .unwrap();
        assert_eq!(normalize(&raw).nutrients.get(Nutrient::Energy), Some(120.0));
    }

    #[test]
    fn test_blank_strings_are_absent() {
        let raw = RawProduct {
            code: Some("  ".to_string()),
            product_name: Some("   ".to_string()),
            nutrition_grades: Some("unknown".to_string()),
            ..Default::default()
        };
        let product = normalize(&raw);
        assert!(!product.is_cartable());
        assert!(product.name.is_none());
        assert!(product.nutrition_grade.is_none());
    }

    #[test]
    fn test_input_untouched() {
        let raw = RawProduct {
            product_name: Some("  Padded  ".to_string()),
            ..RawProduct::with_code("42")
        };
        let before = raw.clone();
        let product = normalize(&raw);
        assert_eq!(raw, before);
        assert_eq!(product.name.as_deref(), Some("Padded"));
    }

    #[test]
    fn test_normalize_all_preserves_order() {
        let raws = vec![RawProduct::with_code("1"), RawProduct::with_code("2")];
        let codes: Vec<_> = normalize_all(&raws).into_iter().map(|p| p.code).collect();
        assert_eq!(codes, vec!["1", "2"]);
    }
}
