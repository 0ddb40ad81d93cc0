//! Query engine for deriving the visible listing
//!
//! This module provides the pieces the store composes on every state
//! change:
//! - Filter predicates for deciding item inclusion
//! - Sort comparators with a stable total order
//! - Pagination windowing over the filtered result

mod filter;
mod order;
mod page;

// Re-export all public types
pub use filter::*;
pub use order::*;
pub use page::*;
