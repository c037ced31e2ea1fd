//! Coordinate-pair tokens and numeric field parsing
//!
//! Within a shape body, pair tokens are separated by the literal
//! `" , "` (space, comma, space). A token has the general shape
//! `(num1,num2)`: one wrapping character on each side around two
//! comma-separated numeric fields. The wrappers are removed by two
//! narrowly-scoped trims, one per side, never by a blanket replace-all
//! that could eat interior characters such as a decimal point.

use crate::dump::error::Axis;

/// Separator between sibling pair tokens inside a shape body.
pub const PAIR_DELIMITER: &str = " , ";

/// How a single pair token failed to parse.
///
/// Carries no positional context; the pipeline attaches the shape index
/// and pair offset when it surfaces the failure.
#[derive(Debug, Clone, PartialEq)]
pub enum PairSyntax {
    /// The token did not split into exactly two fields on a bare comma.
    NotAPair,
    /// A field is empty or not a finite numeric literal.
    BadField { axis: Axis, field: String },
}

/// Split a shape body into pair tokens, preserving order.
///
/// Pair order is significant: it defines the draw order when the shape is
/// later rendered as a path. Splitting and rejoining on
/// [`PAIR_DELIMITER`] reconstructs the block text.
pub fn split_pairs(block: &str) -> Vec<&str> {
    block.split(PAIR_DELIMITER).collect()
}

/// Parse one pair token into numeric x/y fields.
///
/// Strips exactly the first occurrence of a non-alphanumeric character and
/// exactly the last occurrence of a non-alphanumeric character (the
/// wrapping parentheses on a well-formed token), splits the remaining text
/// on a bare comma, and parses each field as a float. Already-clean input
/// passes through unchanged: `parse_pair("(1,2)")` is `(1.0, 2.0)`.
pub fn parse_pair(token: &str) -> Result<(f64, f64), PairSyntax> {
    let stripped = strip_last_non_alnum(&strip_first_non_alnum(token));
    let fields: Vec<&str> = stripped.split(',').collect();
    if fields.len() != 2 {
        return Err(PairSyntax::NotAPair);
    }
    let x = parse_field(fields[0], Axis::X)?;
    let y = parse_field(fields[1], Axis::Y)?;
    Ok((x, y))
}

/// Remove the first non-alphanumeric character, if any.
fn strip_first_non_alnum(s: &str) -> String {
    match s.char_indices().find(|(_, c)| !c.is_alphanumeric()) {
        Some((index, c)) => {
            let mut out = String::with_capacity(s.len() - c.len_utf8());
            out.push_str(&s[..index]);
            out.push_str(&s[index + c.len_utf8()..]);
            out
        }
        None => s.to_string(),
    }
}

/// Remove the last non-alphanumeric character, if any.
fn strip_last_non_alnum(s: &str) -> String {
    match s
        .char_indices()
        .rev()
        .find(|(_, c)| !c.is_alphanumeric())
    {
        Some((index, c)) => {
            let mut out = String::with_capacity(s.len() - c.len_utf8());
            out.push_str(&s[..index]);
            out.push_str(&s[index + c.len_utf8()..]);
            out
        }
        None => s.to_string(),
    }
}

/// Parse a single coordinate field, rejecting non-finite values.
fn parse_field(field: &str, axis: Axis) -> Result<f64, PairSyntax> {
    let bad = || PairSyntax::BadField {
        axis,
        field: field.to_string(),
    };
    let value: f64 = field.parse().map_err(|_| bad())?;
    if !value.is_finite() {
        return Err(bad());
    }
    Ok(value)
}
