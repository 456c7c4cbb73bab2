//! Sort keys and comparators for product listings

use crate::models::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Listing sort order
///
/// Unrecognized keys parse to [`SortKey::Unsorted`], which leaves the
/// fetched order untouched instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    /// Name A-Z
    #[default]
    NameAsc,
    /// Name Z-A
    NameDesc,
    /// Best nutrition grade first, ungraded last
    NutritionAsc,
    /// Ungraded first, then worst grade first
    NutritionDesc,
    /// Upstream order
    Unsorted,
}

impl SortKey {
    /// Parse a sort key; never fails
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "name" | "name-asc" => Self::NameAsc,
            "name-desc" => Self::NameDesc,
            "nutrition-asc" => Self::NutritionAsc,
            "nutrition-desc" => Self::NutritionDesc,
            _ => Self::Unsorted,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
            Self::NutritionAsc => "nutrition-asc",
            Self::NutritionDesc => "nutrition-desc",
            Self::Unsorted => "unsorted",
        }
    }

    /// Comparator for this key, `None` for [`SortKey::Unsorted`]
    fn compare(&self, a: &Product, b: &Product) -> Option<Ordering> {
        match self {
            Self::NameAsc => Some(compare_names(a.sort_name(), b.sort_name())),
            Self::NameDesc => Some(compare_names(b.sort_name(), a.sort_name())),
            Self::NutritionAsc => Some(a.grade_sort_code().cmp(&b.grade_sort_code())),
            Self::NutritionDesc => Some(b.grade_sort_code().cmp(&a.grade_sort_code())),
            Self::Unsorted => None,
        }
    }
}

impl FromStr for SortKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for SortKey {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.as_str().to_string()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Base letters of a name: decomposed, accents stripped, ligatures expanded,
/// lower-cased. "Éclair" and "eclair" share a key.
fn base_letters(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for c in name.nfd().filter(|c| !is_combining_mark(*c)) {
        for lower in c.to_lowercase() {
            match lower {
                'œ' => key.push_str("oe"),
                'æ' => key.push_str("ae"),
                'ß' => key.push_str("ss"),
                'ø' => key.push('o'),
                other => key.push(other),
            }
        }
    }
    key
}

/// Locale-style name order: base letters first, then accents, then case
/// (lower case first). Distinct names never compare equal.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| {
            a.nfd()
                .flat_map(char::to_lowercase)
                .cmp(b.nfd().flat_map(char::to_lowercase))
        })
        .then_with(|| b.cmp(a))
}

/// Stable sort of borrowed products
pub(crate) fn sort_refs<'a>(products: &'a [Product], key: SortKey) -> Vec<&'a Product> {
    let mut ordered: Vec<&Product> = products.iter().collect();
    if key != SortKey::Unsorted {
        ordered.sort_by(|a, b| key.compare(a, b).unwrap_or(Ordering::Equal));
    }
    ordered
}

/// Return the products in `key` order; ties keep their input order
pub fn sort_products(products: &[Product], key: SortKey) -> Vec<Product> {
    sort_refs(products, key).into_iter().cloned().collect()
}
