//! Catalog engine for the rentcar marketing site.
//!
//! This crate owns the catalog data model and everything needed to derive
//! the visible listing from it: filter predicates, sort comparators,
//! pagination windowing and the store that ties them together. It is pure
//! and synchronous; fetching the catalog from the upstream backend lives
//! in `rentcar_client`.

pub mod attrs;
mod catalog;
mod item;
pub mod query;
pub mod store;

// Re-export the main types at the crate root
pub use catalog::Catalog;
pub use item::{CatalogItem, ItemId};
pub use query::{
    FilterPatch, FilterSet, PageState, PriceRange, SortDirection, SortKey, SortState,
};
pub use store::{Action, CatalogStore, CatalogView, LoadState, StoreState};
