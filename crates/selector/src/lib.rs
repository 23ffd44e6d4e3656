//! Standcard Selector
//!
//! Turns raw standings rows into the rows a card will show:
//! - **Select:** Keep the rows whose team matches an organization filter
//! - **Paginate:** Assign each kept row to a column and vertical slot
//!
//! This crate is pure computation: no I/O and no image dependencies.
//! All inputs are data; all outputs are data.

pub mod paginate;
pub mod select;

pub use paginate::{plan_rows, Pagination, RowSlot};
pub use select::{matches, require_matches, select};
