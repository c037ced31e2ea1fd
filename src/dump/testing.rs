//! Canonical sample dumps and table assertions for tests
//!
//! The samples here are the single source of truth for test inputs; unit,
//! integration, and property tests reference them instead of restating
//! dump text inline.

use crate::dump::table::{TidyRecord, TidyTable};

/// Verified sample dumps covering the format's behaviors.
pub mod samples {
    /// Two shapes in canonical form.
    pub const TWO_SHAPES: &str = "# Shape 01(1,2) , (3,4)# Shape 02(5,6)";

    /// The same two shapes with line breaks inside the bodies.
    pub const TWO_SHAPES_WRAPPED: &str = "# Shape 01(1,2)\n , (3,4)\n# Shape 02(5,6)";

    /// Header digits disagree with appearance order; occurrence order wins.
    pub const SHUFFLED_HEADERS: &str = "# Shape 07(1,2)# Shape 01(5,6)";

    /// Preamble text before the first header.
    pub const WITH_PREAMBLE: &str = "coordinate dump v2# Shape 01(1,2)";

    /// Malformed: the second pair has an empty y field.
    pub const EMPTY_Y_FIELD: &str = "# Shape 01(1,2) , (1,)";

    /// No shape headers at all.
    pub const NO_HEADERS: &str = "(1,2) , (3,4)";

    /// A triangle and a square, for rendering fixtures.
    pub const TRIANGLE_AND_SQUARE: &str =
        "# Shape 01(0,0) , (4,0) , (2,3)# Shape 02(5,5) , (9,5) , (9,9) , (5,9)";
}

/// Create an assertion builder for a tidy table.
pub fn assert_table(table: &TidyTable) -> TableAssertion<'_> {
    TableAssertion { table }
}

/// Fluent assertions over a [`TidyTable`].
pub struct TableAssertion<'a> {
    table: &'a TidyTable,
}

impl<'a> TableAssertion<'a> {
    /// Assert the total number of records.
    pub fn record_count(self, expected: usize) -> Self {
        let actual = self.table.len();
        assert_eq!(
            actual, expected,
            "expected {} records, found {}: {:?}",
            expected, actual, self.table
        );
        self
    }

    /// Assert the number of distinct shapes.
    pub fn shape_count(self, expected: usize) -> Self {
        let actual = self.table.shape_count();
        assert_eq!(
            actual, expected,
            "expected {} shapes, found {}: {:?}",
            expected, actual, self.table
        );
        self
    }

    /// Assert the record at `index` in table order.
    pub fn record(self, index: usize, shape: u32, x: f64, y: f64) -> Self {
        assert!(
            index < self.table.len(),
            "record index {} out of bounds (table has {} records)",
            index,
            self.table.len()
        );
        let actual = self.table.records()[index];
        assert_eq!(
            actual,
            TidyRecord::new(shape, x, y),
            "record[{}] mismatch",
            index
        );
        self
    }

    /// Assert shape ids appear in ascending order with records grouped.
    pub fn grouping_stable(self) -> Self {
        let ids: Vec<u32> = self.table.shapes().map(|(id, _)| id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(
            ids, sorted,
            "shape groups are out of order or fragmented: {:?}",
            ids
        );
        self
    }
}
