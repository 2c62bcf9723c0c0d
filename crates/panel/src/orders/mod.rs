//! The order-history pipeline: fetch, decode, filter, summarize, sort.
//!
//! [`source::OrderSource`] is the only stage that performs I/O; everything
//! after the decode boundary is a pure function over owned data, so the
//! stages can be tested in isolation and composed without shared state.

pub mod filter;
pub mod sorter;
pub mod source;
pub mod summary;

pub use filter::filter;
pub use sorter::sort;
pub use source::{OrderSource, decode_records};
pub use summary::{RECENCY_WINDOW_DAYS, summarize};
