//! Item ordering/sorting logic

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::attrs;
use crate::item::CatalogItem;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// The field a listing is ordered by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// Numeric order over the item price.
    Price,
    /// Case-insensitive lexicographic order over the display name.
    Name,
    /// Numeric order over a named attribute (e.g. rating). Items missing
    /// the attribute sort after all items that have it, in either
    /// direction.
    Attribute(String),
}

/// A chosen sort field and direction. Defaults to price ascending, the
/// listing's initial order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self::price_ascending()
    }
}

impl SortState {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    // The five options the listing pages expose.

    pub fn price_ascending() -> Self {
        Self::new(SortKey::Price, SortDirection::Ascending)
    }

    pub fn price_descending() -> Self {
        Self::new(SortKey::Price, SortDirection::Descending)
    }

    pub fn name_ascending() -> Self {
        Self::new(SortKey::Name, SortDirection::Ascending)
    }

    pub fn name_descending() -> Self {
        Self::new(SortKey::Name, SortDirection::Descending)
    }

    pub fn rating_descending() -> Self {
        Self::new(
            SortKey::Attribute(attrs::RATING.to_string()),
            SortDirection::Descending,
        )
    }
}

/// Compare two items for the given sort state.
///
/// Equal sort keys compare `Equal`, so a stable sort keeps their base
/// order; direction reversal cannot reorder ties either.
pub fn compare_items(a: &CatalogItem, b: &CatalogItem, state: &SortState) -> Ordering {
    let ordering = match &state.key {
        SortKey::Price => a.price.cmp(&b.price),
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Attribute(field) => {
            // Missing values sort to the end regardless of direction
            return match (present(a, field), present(b, field)) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a_val), Some(b_val)) => {
                    apply_direction(a_val.partial_cmp(&b_val).unwrap_or(Ordering::Equal), state)
                }
            };
        }
    };
    apply_direction(ordering, state)
}

/// Sort items in place, stably, preserving base-catalog order for ties.
pub fn sort_items(items: &mut [&CatalogItem], state: &SortState) {
    items.sort_by(|a, b| compare_items(a, b, state));
}

// NaN counts as missing so it cannot poison the total order.
fn present(item: &CatalogItem, field: &str) -> Option<f64> {
    item.numeric_attribute(field).filter(|v| !v.is_nan())
}

fn apply_direction(ordering: Ordering, state: &SortState) -> Ordering {
    match state.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}
