//! The composed tidy pipeline
//!
//! Stages run in a fixed order: strip line breaks, split on shape headers,
//! discard the preamble and renumber from 1, split each body into pair
//! tokens, parse each token into numeric fields. One pass, no state, no
//! backtracking; identical input yields an identical table and a failed
//! run leaves nothing behind.

use crate::dump::blocks::{number_shapes, split_shape_blocks};
use crate::dump::error::DumpError;
use crate::dump::normalize::strip_line_breaks;
use crate::dump::pairs::{parse_pair, split_pairs, PairSyntax};
use crate::dump::table::{TidyRecord, TidyTable};

/// Tidy a raw coordinate dump into a table.
///
/// The output flattens all shapes in order: shape order outer, pair order
/// inner. Zero shape headers is a [`DumpError::EmptyInput`] rather than a
/// silently empty table, so callers can tell "nothing to plot" apart from
/// malformed text.
pub fn tidy(raw: &str) -> Result<TidyTable, DumpError> {
    let flat = strip_line_breaks(raw);
    let blocks = split_shape_blocks(&flat);
    let shapes = number_shapes(&blocks);
    if shapes.is_empty() {
        return Err(DumpError::EmptyInput);
    }

    let mut records = Vec::new();
    for (shape, body) in shapes {
        for (offset, token) in split_pairs(body).iter().enumerate() {
            let pair = offset + 1;
            let (x, y) = parse_pair(token).map_err(|err| match err {
                PairSyntax::NotAPair => DumpError::Format {
                    shape,
                    pair,
                    token: token.to_string(),
                },
                PairSyntax::BadField { axis, field } => DumpError::Parse {
                    shape,
                    pair,
                    axis,
                    field,
                },
            })?;
            records.push(TidyRecord::new(shape, x, y));
        }
    }
    Ok(TidyTable::new(records))
}
