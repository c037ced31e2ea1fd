//! Line-break normalization for raw dump text
//!
//! Dumps arrive with line breaks anywhere, including in the middle of a
//! header or a pair delimiter. Stripping them first lets every later stage
//! treat the dump as a single line. No other whitespace is touched here;
//! interior spaces are load-bearing for the pair delimiter.

/// Remove all line-break characters (`\n` and `\r`) from the input.
///
/// Total over any string and idempotent: applying it twice yields the same
/// result as applying it once.
pub fn strip_line_breaks(text: &str) -> String {
    text.chars().filter(|c| *c != '\n' && *c != '\r').collect()
}
