//! The tidy output table
//!
//! One row per coordinate pair, three columns: shape id, x, y. Rows
//! belonging to one shape are contiguous and keep their source order;
//! downstream path rendering draws in exactly this order.

use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// One observation: a single coordinate pair tagged with its shape id.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TidyRecord {
    pub shape: u32,
    pub x: f64,
    pub y: f64,
}

impl TidyRecord {
    pub fn new(shape: u32, x: f64, y: f64) -> Self {
        TidyRecord { shape, x, y }
    }
}

/// An ordered sequence of tidy records, grouping-stable by shape id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TidyTable {
    records: Vec<TidyRecord>,
}

impl TidyTable {
    pub fn new(records: Vec<TidyRecord>) -> Self {
        TidyTable { records }
    }

    /// All records in table order.
    pub fn records(&self) -> &[TidyRecord] {
        &self.records
    }

    /// Number of records (coordinate pairs) in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct shapes in the table.
    pub fn shape_count(&self) -> usize {
        self.shapes().count()
    }

    /// Iterate contiguous per-shape record groups in table order.
    pub fn shapes(&self) -> ShapeGroups<'_> {
        ShapeGroups {
            rest: &self.records,
        }
    }

    /// Serialize as delimited text with a `shape,x,y` header row.
    pub fn to_csv(&self) -> String {
        let mut out = String::from("shape,x,y\n");
        for record in &self.records {
            writeln!(out, "{},{},{}", record.shape, record.x, record.y).unwrap();
        }
        out
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.records)
    }
}

/// Iterator over contiguous per-shape record groups.
///
/// Yields `(shape_id, records)` slices. Relies on the table's
/// grouping-stable invariant: records of one shape are contiguous.
pub struct ShapeGroups<'a> {
    rest: &'a [TidyRecord],
}

impl<'a> Iterator for ShapeGroups<'a> {
    type Item = (u32, &'a [TidyRecord]);

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.first()?;
        let id = first.shape;
        let end = self
            .rest
            .iter()
            .position(|record| record.shape != id)
            .unwrap_or(self.rest.len());
        let (group, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some((id, group))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> TidyTable {
        TidyTable::new(vec![
            TidyRecord::new(1, 1.0, 2.0),
            TidyRecord::new(1, 3.0, 4.0),
            TidyRecord::new(2, 5.0, 6.0),
        ])
    }

    #[test]
    fn test_len_and_emptiness() {
        assert_eq!(sample_table().len(), 3);
        assert!(!sample_table().is_empty());
        assert!(TidyTable::default().is_empty());
    }

    #[test]
    fn test_shape_count() {
        assert_eq!(sample_table().shape_count(), 2);
        assert_eq!(TidyTable::default().shape_count(), 0);
    }

    #[test]
    fn test_shapes_groups_are_contiguous() {
        let table = sample_table();
        let groups: Vec<(u32, usize)> = table
            .shapes()
            .map(|(id, records)| (id, records.len()))
            .collect();
        assert_eq!(groups, vec![(1, 2), (2, 1)]);
    }

    #[test]
    fn test_shapes_preserve_intra_group_order() {
        let table = sample_table();
        let (_, first_group) = table.shapes().next().unwrap();
        assert_eq!(first_group[0], TidyRecord::new(1, 1.0, 2.0));
        assert_eq!(first_group[1], TidyRecord::new(1, 3.0, 4.0));
    }

    #[test]
    fn test_to_csv_has_header_and_row_per_record() {
        let csv = sample_table().to_csv();
        assert_eq!(csv, "shape,x,y\n1,1,2\n1,3,4\n2,5,6\n");
    }

    #[test]
    fn test_to_csv_keeps_fractional_parts() {
        let table = TidyTable::new(vec![TidyRecord::new(1, 1.5, 2.25)]);
        assert_eq!(table.to_csv(), "shape,x,y\n1,1.5,2.25\n");
    }

    #[test]
    fn test_to_json_round_trips() {
        let table = sample_table();
        let json = table.to_json().unwrap();
        let records: Vec<TidyRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(records, table.records());
    }
}
