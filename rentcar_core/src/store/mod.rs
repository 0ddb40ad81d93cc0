//! Catalog store: reducer-style state and the derived listing view
//!
//! UI events become [`Action`]s, [`StoreState::apply`] is the pure
//! transition, and [`CatalogStore::view`] derives the visible page from
//! whatever the current state is. No transition or view derivation does
//! I/O; the one catalog fetch happens elsewhere and arrives here as an
//! action.

use log::debug;
use rust_decimal::Decimal;

use crate::catalog::Catalog;
use crate::item::CatalogItem;
use crate::query::{
    FilterPatch, FilterSet, PageState, SortState, clamp_page, sort_items, total_pages, window,
};

/// Where the one-per-session catalog fetch currently stands.
///
/// `Failed` is deliberately distinct from an empty `Loaded` catalog so the
/// view layer can tell "no items match" apart from "failed to load".
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(Catalog),
    Failed(String),
}

impl LoadState {
    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            LoadState::Loaded(catalog) => Some(catalog),
            _ => None,
        }
    }
}

/// Events that drive the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The catalog fetch completed.
    CatalogLoaded(Vec<CatalogItem>),
    /// The catalog fetch failed; carries the upstream error message.
    CatalogFailed(String),
    /// Merge a partial filter update.
    SetFilters(FilterPatch),
    /// Replace the sort state.
    SetSort(SortState),
    /// Navigate to a page (1-indexed, clamped when the view is derived).
    SetPage(usize),
    /// Change how many items each page shows.
    SetPageSize(usize),
    /// Restore default filters, sort and page. Keeps the loaded catalog
    /// and the configured page size.
    Reset,
}

/// The full ephemeral UI state: catalog load status plus filter, sort and
/// page selections. Resets on reload; nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreState {
    pub load: LoadState,
    pub filters: FilterSet,
    pub sort: SortState,
    pub page: PageState,
}

impl StoreState {
    /// Pure transition: consume the state and an action, produce the next
    /// state.
    ///
    /// Any change to the filter or sort state moves back to page 1, so a
    /// stale page number can never show an empty page while matches
    /// exist. A no-op patch (or unchanged sort) leaves the page alone.
    pub fn apply(self, action: Action) -> StoreState {
        match action {
            Action::CatalogLoaded(items) => StoreState {
                load: LoadState::Loaded(Catalog::new(items)),
                page: self.page.with_page(1),
                ..self
            },
            Action::CatalogFailed(message) => StoreState {
                load: LoadState::Failed(message),
                ..self
            },
            Action::SetFilters(patch) => {
                let merged = self.filters.merge(&patch);
                if merged == self.filters {
                    self
                } else {
                    StoreState {
                        filters: merged,
                        page: self.page.with_page(1),
                        ..self
                    }
                }
            }
            Action::SetSort(sort) => {
                if sort == self.sort {
                    self
                } else {
                    StoreState {
                        sort,
                        page: self.page.with_page(1),
                        ..self
                    }
                }
            }
            Action::SetPage(page) => StoreState {
                page: self.page.with_page(page),
                ..self
            },
            Action::SetPageSize(page_size) => StoreState {
                page: self.page.with_page_size(page_size).with_page(1),
                ..self
            },
            Action::Reset => StoreState {
                load: self.load,
                filters: FilterSet::default(),
                sort: SortState::default(),
                page: self.page.with_page(1),
            },
        }
    }
}

/// Derived read-only view of the store for the rendering layer.
///
/// Always well-formed: while the catalog is loading, failed, or empty the
/// lists are empty and there is exactly one page.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView<'a> {
    /// The filtered, sorted window for the current page.
    pub visible_items: Vec<&'a CatalogItem>,
    /// Total items matching the current filters (across all pages).
    pub total_count: usize,
    pub total_pages: usize,
    /// The effective page, clamped into `[1, total_pages]`.
    pub current_page: usize,
    /// Distinct category values of the base catalog, for filter controls.
    pub available_categories: Vec<String>,
    pub available_brands: Vec<String>,
    /// Observed min/max price of the base catalog, for slider bounds.
    pub price_bounds: Option<(Decimal, Decimal)>,
    pub load: &'a LoadState,
}

/// Owns a [`StoreState`] and exposes the mutator/view surface the listing
/// pages consume.
#[derive(Debug, Default)]
pub struct CatalogStore {
    state: StoreState,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<CatalogItem>) -> Self {
        let mut store = Self::new();
        store.load(items);
        store
    }

    pub fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(action);
    }

    pub fn load(&mut self, items: Vec<CatalogItem>) {
        self.dispatch(Action::CatalogLoaded(items));
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.dispatch(Action::CatalogFailed(message.into()));
    }

    pub fn set_filters(&mut self, patch: FilterPatch) {
        self.dispatch(Action::SetFilters(patch));
    }

    pub fn set_sort(&mut self, sort: SortState) {
        self.dispatch(Action::SetSort(sort));
    }

    pub fn set_page(&mut self, page: usize) {
        self.dispatch(Action::SetPage(page));
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.dispatch(Action::SetPageSize(page_size));
    }

    pub fn reset(&mut self) {
        self.dispatch(Action::Reset);
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// Recompute the derived view: filter, stable-sort, clamp the page,
    /// window.
    pub fn view(&self) -> CatalogView<'_> {
        let catalog = self.state.load.catalog();
        let base: &[CatalogItem] = catalog.map(Catalog::items).unwrap_or(&[]);

        let mut matched: Vec<&CatalogItem> =
            base.iter().filter(|item| self.state.filters.matches(item)).collect();
        sort_items(&mut matched, &self.state.sort);

        let total_count = matched.len();
        let page_size = self.state.page.page_size();
        let pages = total_pages(total_count, page_size);
        let current_page = clamp_page(self.state.page.current_page(), total_count, page_size);
        let visible_items = window(&matched, page_size, current_page).to_vec();

        debug!(
            "view: {total_count} of {} items match, page {current_page}/{pages}",
            base.len()
        );

        CatalogView {
            visible_items,
            total_count,
            total_pages: pages,
            current_page,
            available_categories: catalog
                .map(Catalog::distinct_categories)
                .unwrap_or_default(),
            available_brands: catalog.map(Catalog::distinct_brands).unwrap_or_default(),
            price_bounds: catalog.and_then(Catalog::price_bounds),
            load: &self.state.load,
        }
    }
}
