//! Product Model

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Display fallback for a missing product name
pub const UNKNOWN_PRODUCT: &str = "Unknown Product";
/// Display fallback for missing categories
pub const UNCATEGORIZED: &str = "Uncategorized";
/// Display fallback for any other missing value
pub const NOT_AVAILABLE: &str = "N/A";
/// Display fallback for missing ingredients
pub const NO_INGREDIENTS: &str = "No ingredients listed";

/// Sort placeholder for products without a grade (after every real grade)
pub const GRADE_SENTINEL: char = 'z';

/// Nutri-Score grade, `A` best through `E` worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NutritionGrade {
    A,
    B,
    C,
    D,
    E,
}

impl NutritionGrade {
    /// Parse a grade case-insensitively; anything but a single a..e letter is `None`
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "a" => Some(Self::A),
            "b" => Some(Self::B),
            "c" => Some(Self::C),
            "d" => Some(Self::D),
            "e" => Some(Self::E),
            _ => None,
        }
    }

    /// Lower-case grade letter
    pub const fn as_char(&self) -> char {
        match self {
            Self::A => 'a',
            Self::B => 'b',
            Self::C => 'c',
            Self::D => 'd',
            Self::E => 'e',
        }
    }

    /// Sort code for an optional grade; absent grades use [`GRADE_SENTINEL`]
    pub fn sort_code(grade: Option<Self>) -> char {
        grade.map_or(GRADE_SENTINEL, |g| g.as_char())
    }
}

impl fmt::Display for NutritionGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char().to_ascii_uppercase())
    }
}

/// Nutrient facts tracked per 100 g
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    Energy,
    Fat,
    Carbohydrates,
    Proteins,
    Fiber,
    Salt,
}

impl Nutrient {
    /// Detail-view order
    pub const ALL: [Nutrient; 6] = [
        Nutrient::Energy,
        Nutrient::Fat,
        Nutrient::Carbohydrates,
        Nutrient::Proteins,
        Nutrient::Fiber,
        Nutrient::Salt,
    ];

    /// Upstream keys for this nutrient, in lookup order
    pub const fn source_keys(&self) -> &'static [&'static str] {
        match self {
            Self::Energy => &["energy-kcal_100g", "energy_kcal_100g"],
            Self::Fat => &["fat_100g"],
            Self::Carbohydrates => &["carbohydrates_100g"],
            Self::Proteins => &["proteins_100g"],
            Self::Fiber => &["fiber_100g"],
            Self::Salt => &["salt_100g"],
        }
    }

    pub const fn unit(&self) -> &'static str {
        match self {
            Self::Energy => "kcal",
            _ => "g",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Energy => "Energy",
            Self::Fat => "Fat",
            Self::Carbohydrates => "Carbohydrates",
            Self::Proteins => "Protein",
            Self::Fiber => "Fiber",
            Self::Salt => "Salt",
        }
    }
}

/// Per-100 g nutrient values; a missing entry means "not reported", never zero
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nutrients(BTreeMap<Nutrient, f64>);

impl Nutrients {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, nutrient: Nutrient, value: f64) {
        self.0.insert(nutrient, value);
    }

    pub fn get(&self, nutrient: Nutrient) -> Option<f64> {
        self.0.get(&nutrient).copied()
    }

    /// Value with unit, or "N/A"
    pub fn display(&self, nutrient: Nutrient) -> String {
        match self.get(nutrient) {
            Some(value) => format!("{} {}", value, nutrient.unit()),
            None => NOT_AVAILABLE.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Canonical product record
///
/// Produced by [`crate::normalize`]. Optional fields stay `None` so the
/// presentation layer can tell "missing" from an actual value; the
/// `display_*` helpers apply the fallbacks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Barcode; the only identity used for cart correlation. Empty when unknown.
    pub code: String,
    pub name: Option<String>,
    /// Free-text category list
    pub categories: Option<String>,
    pub brands: Option<String>,
    pub image_url: Option<String>,
    pub ingredients_text: Option<String>,
    pub nutrition_grade: Option<NutritionGrade>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub nutrients: Nutrients,
}

impl Product {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_PRODUCT)
    }

    pub fn display_categories(&self) -> &str {
        self.categories.as_deref().unwrap_or(UNCATEGORIZED)
    }

    pub fn display_brands(&self) -> &str {
        self.brands.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn display_code(&self) -> &str {
        if self.code.is_empty() {
            NOT_AVAILABLE
        } else {
            &self.code
        }
    }

    /// Upper-case grade letter, or "N/A"
    pub fn grade_label(&self) -> String {
        self.nutrition_grade
            .map_or_else(|| NOT_AVAILABLE.to_string(), |g| g.to_string())
    }

    pub fn nutrient_display(&self, nutrient: Nutrient) -> String {
        self.nutrients.display(nutrient)
    }

    /// First `max_chars` characters of the ingredients followed by "..."
    pub fn ingredients_preview(&self, max_chars: usize) -> String {
        match &self.ingredients_text {
            Some(text) => {
                let mut preview: String = text.chars().take(max_chars).collect();
                preview.push_str("...");
                preview
            }
            None => NO_INGREDIENTS.to_string(),
        }
    }

    pub fn has_image(&self) -> bool {
        self.image_url.is_some()
    }

    /// Whether the product can be correlated in the cart
    pub fn is_cartable(&self) -> bool {
        !self.code.is_empty()
    }

    /// Name key used by the name sorts; absent names sort as ""
    pub fn sort_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn grade_sort_code(&self) -> char {
        NutritionGrade::sort_code(self.nutrition_grade)
    }
}
