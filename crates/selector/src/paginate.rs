//! Column pagination.
//!
//! Maps an ordered row list onto the two columns of a [`Layout`]. Row `i`
//! goes to column `i / 10` at vertical slot `i % 10`. Rows past the
//! twentieth are dropped and counted; they never wrap or shrink the grid.

use standcard_table_model::layout::{Layout, MAX_DISPLAYED_ROWS, ROWS_PER_COLUMN};

/// Placement of one row on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSlot {
    /// Index of the row in the selected sequence.
    pub index: usize,
    /// Column the row is drawn in.
    pub column: usize,
    /// Vertical slot within the column.
    pub slot: usize,
    /// Y coordinate of the row.
    pub y: i32,
}

/// Result of paginating a row list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    /// Placed rows, in input order.
    pub slots: Vec<RowSlot>,
    /// Rows that did not fit.
    pub dropped: usize,
}

impl Pagination {
    /// Number of rows that will be drawn.
    pub fn drawn(&self) -> usize {
        self.slots.len()
    }

    /// Whether any row was cut off.
    pub fn truncated(&self) -> bool {
        self.dropped > 0
    }
}

/// Assign `row_count` rows to columns and slots of `layout`.
pub fn plan_rows(row_count: usize, layout: &Layout) -> Pagination {
    let drawn = row_count.min(MAX_DISPLAYED_ROWS);

    let slots = (0..drawn)
        .map(|index| {
            let slot = index % ROWS_PER_COLUMN;
            RowSlot {
                index,
                column: index / ROWS_PER_COLUMN,
                slot,
                y: layout.row_y(slot),
            }
        })
        .collect();

    let dropped = row_count - drawn;
    if dropped > 0 {
        tracing::warn!(
            rows = row_count,
            capacity = MAX_DISPLAYED_ROWS,
            dropped,
            "Standings exceed card capacity; extra rows are not drawn"
        );
    }

    Pagination { slots, dropped }
}
