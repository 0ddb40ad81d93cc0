//! Catalog item model.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Stable unique identifier of a catalog item.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A rentable unit shown in a listing: a car or a tour package.
///
/// Cars and tours share this one shape. Domain-specific fields live in the
/// open attribute maps (`capacity`, `duration_days`, `transmission`, ...)
/// so the query engine never has to know which kind it is looking at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: String,
    /// Classification used for membership filters (vehicle type for cars,
    /// absent for tours).
    pub category: Option<String>,
    pub brand: Option<String>,
    /// Non-negative, currency-agnostic price.
    pub price: Decimal,
    searchable_text: String,
    numeric_attributes: BTreeMap<String, f64>,
    text_attributes: BTreeMap<String, Vec<String>>,
}

impl CatalogItem {
    /// Create an item with the given id, display name and price.
    ///
    /// A negative price is clamped to zero; the model invariant is
    /// non-negative and callers get a renderable value either way.
    pub fn new(id: ItemId, name: impl Into<String>, price: Decimal) -> Self {
        let name = name.into();
        Self {
            id,
            searchable_text: name.to_lowercase(),
            name,
            category: None,
            brand: None,
            price: price.max(Decimal::ZERO),
            numeric_attributes: BTreeMap::new(),
            text_attributes: BTreeMap::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.append_search_term(&category);
        self.category = Some(category);
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        let brand = brand.into();
        self.append_search_term(&brand);
        self.brand = Some(brand);
        self
    }

    /// Add extra text (descriptions, destinations) to the search index
    /// without storing it as a structured field.
    pub fn with_search_term(mut self, term: impl AsRef<str>) -> Self {
        self.append_search_term(term.as_ref());
        self
    }

    pub fn with_numeric_attribute(mut self, field: impl Into<String>, value: f64) -> Self {
        self.numeric_attributes.insert(field.into(), value);
        self
    }

    pub fn with_text_attribute(mut self, field: impl Into<String>, values: Vec<String>) -> Self {
        self.text_attributes.insert(field.into(), values);
        self
    }

    /// Lowercase concatenation of name, brand, category and extra search
    /// terms; the substring search predicate runs against this.
    pub fn searchable_text(&self) -> &str {
        &self.searchable_text
    }

    pub fn numeric_attribute(&self, field: &str) -> Option<f64> {
        self.numeric_attributes.get(field).copied()
    }

    pub fn text_attribute(&self, field: &str) -> Option<&[String]> {
        self.text_attributes.get(field).map(|v| v.as_slice())
    }

    fn append_search_term(&mut self, term: &str) {
        if term.is_empty() {
            return;
        }
        if !self.searchable_text.is_empty() {
            self.searchable_text.push(' ');
        }
        self.searchable_text.push_str(&term.to_lowercase());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_fields() {
        let item = CatalogItem::new(ItemId::new("car-1"), "Toyota Avanza", Decimal::from(350_000))
            .with_category("MPV")
            .with_brand("Toyota")
            .with_numeric_attribute(crate::attrs::CAPACITY, 7.0);

        assert_eq!(item.id.as_str(), "car-1");
        assert_eq!(item.category.as_deref(), Some("MPV"));
        assert_eq!(item.brand.as_deref(), Some("Toyota"));
        assert_eq!(item.numeric_attribute(crate::attrs::CAPACITY), Some(7.0));
    }

    #[test]
    fn test_searchable_text_includes_name_brand_and_category() {
        let item = CatalogItem::new(ItemId::new("car-1"), "Avanza", Decimal::from(350_000))
            .with_category("MPV")
            .with_brand("Toyota")
            .with_search_term("Mobil keluarga");

        assert_eq!(item.searchable_text(), "avanza mpv toyota mobil keluarga");
    }

    #[test]
    fn test_negative_price_clamps_to_zero() {
        let item = CatalogItem::new(ItemId::new("car-1"), "Avanza", Decimal::from(-1));
        assert_eq!(item.price, Decimal::ZERO);
    }

    #[test]
    fn test_missing_attributes_are_none() {
        let item = CatalogItem::new(ItemId::new("tour-1"), "Bromo Sunrise", Decimal::from(500));
        assert_eq!(item.numeric_attribute(crate::attrs::RATING), None);
        assert_eq!(item.text_attribute(crate::attrs::TRANSMISSION), None);
    }

    #[test]
    fn test_serializes_price_as_string() {
        let item = CatalogItem::new(ItemId::new("car-1"), "Avanza", Decimal::from(150));
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"price\":\"150\""));
    }
}
