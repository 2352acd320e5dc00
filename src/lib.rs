//! # selectlib
//!
//! In-place k-th order statistic selection. After a call, index `k` of the
//! sequence holds the element that would be there if the sequence were fully
//! sorted, everything before it is not greater and everything after it is not
//! less. The sequence is only permuted, never resized or copied.
//!
//! Three strategies are available: randomized [`quickselect`], bounded-heap
//! [`heapselect`] and the adaptive [`nth_element`]. Each also comes in a
//! `_by_key` form that orders by a projected key, and [`Selector`] exposes
//! custom comparators, fallible projections, seeded pivots and tuning.

pub mod error;
pub mod select;

pub use error::{Result, SelectError};
pub use select::{
    heapselect, heapselect_by_key, median_low, nth_element, nth_element_by_key, quickselect,
    quickselect_by_key, Comparator, FnComparator, NaturalOrder, SelectConfig, Selector, Sequence,
    Strategy,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
