//! Client for the upstream rental-management backend.
//!
//! Owns the one piece of I/O the catalog engine depends on: fetching cars
//! and tour packages over HTTP, and normalizing the backend's loose JSON
//! into the strict `CatalogItem` model. The engine itself (filters, sort,
//! pagination, store) lives in `rentcar_core` and never sees wire shapes.

mod client;
mod error;
pub mod normalize;
pub mod wire;

pub use client::CatalogClient;
pub use error::FetchError;
