//! The immutable base list of catalog items.

use rust_decimal::Decimal;

use crate::item::CatalogItem;

/// The full list of items fetched once from the backend.
///
/// The catalog itself never changes after construction; filtering, sorting
/// and pagination all derive views from it without mutating it. Base order
/// is the upstream order and acts as the tiebreaker for equal sort keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct category values across the catalog, sorted, for building
    /// the filter UI. Items without a category contribute nothing.
    pub fn distinct_categories(&self) -> Vec<String> {
        Self::distinct(self.items.iter().filter_map(|item| item.category.as_deref()))
    }

    /// Distinct brand values across the catalog, sorted.
    pub fn distinct_brands(&self) -> Vec<String> {
        Self::distinct(self.items.iter().filter_map(|item| item.brand.as_deref()))
    }

    /// Observed min and max price, for slider bounds. `None` when the
    /// catalog is empty so consumers never see fabricated bounds.
    pub fn price_bounds(&self) -> Option<(Decimal, Decimal)> {
        let mut prices = self.items.iter().map(|item| item.price);
        let first = prices.next()?;
        let bounds = prices.fold((first, first), |(min, max), price| {
            (min.min(price), max.max(price))
        });
        Some(bounds)
    }

    fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
        let mut out: Vec<String> = values.map(|v| v.to_string()).collect();
        out.sort();
        out.dedup();
        out
    }
}
