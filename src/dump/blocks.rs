//! Shape-header splitting and sequential renumbering
//!
//! A shape header is one non-alphanumeric character, an optional blank, the
//! literal word `Shape`, an optional blank, and a two-character
//! alphanumeric id -- `# Shape 01` being the canonical form. The pattern is
//! deliberately loose: it matches regardless of the id's actual value,
//! because the id is consumed by the split and never interpreted. Bodies
//! are renumbered by order of appearance; source header numbering is not
//! trusted.

use once_cell::sync::Lazy;
use regex::Regex;

/// Lazy-compiled regex for the loose shape-header pattern
static SHAPE_HEADER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^[:alnum:]][[:blank:]]?Shape[[:blank:]]?[[:alnum:]]{2}").unwrap()
});

/// Split dump text on shape headers.
///
/// The first element is always the preamble before the first header (empty
/// when the dump opens with a header) and must be excluded from shape-id
/// assignment. The remaining elements are shape bodies in appearance
/// order. Text with no header at all comes back as a single preamble
/// element.
pub fn split_shape_blocks(text: &str) -> Vec<&str> {
    SHAPE_HEADER_REGEX.split(text).collect()
}

/// Discard the preamble block and number the remaining bodies 1..=N.
///
/// The raw split indexes the preamble as position 0, so numbering restarts
/// at 1 on the first real body. This keeps shape ids stable and
/// human-meaningful instead of inheriting the off-by-one of the split.
pub fn number_shapes<'a>(blocks: &[&'a str]) -> Vec<(u32, &'a str)> {
    blocks
        .iter()
        .skip(1)
        .enumerate()
        .map(|(index, block)| (index as u32 + 1, *block))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_headers_yield_three_blocks() {
        let blocks = split_shape_blocks("# Shape 01(1,2)# Shape 02(3,4)");
        assert_eq!(blocks, vec!["", "(1,2)", "(3,4)"]);
    }

    #[test]
    fn test_preamble_is_first_block() {
        let blocks = split_shape_blocks("coordinate dump v2# Shape 01(1,2)");
        assert_eq!(blocks, vec!["coordinate dump v2", "(1,2)"]);
    }

    #[test]
    fn test_no_headers_yield_single_preamble() {
        let blocks = split_shape_blocks("(1,2) , (3,4)");
        assert_eq!(blocks, vec!["(1,2) , (3,4)"]);
    }

    #[test]
    fn test_header_without_blanks() {
        let blocks = split_shape_blocks("#Shape01(1,2)");
        assert_eq!(blocks, vec!["", "(1,2)"]);
    }

    #[test]
    fn test_header_with_other_punctuation() {
        let blocks = split_shape_blocks("% Shape 04(1,2)");
        assert_eq!(blocks, vec!["", "(1,2)"]);
    }

    #[test]
    fn test_header_id_value_is_irrelevant() {
        // The pattern consumes any two-character alphanumeric id
        let blocks = split_shape_blocks("# Shape zz(1,2)# Shape 07(3,4)");
        assert_eq!(blocks, vec!["", "(1,2)", "(3,4)"]);
    }

    #[test]
    fn test_number_shapes_starts_at_one() {
        let blocks = vec!["", "(1,2)", "(3,4)"];
        let shapes = number_shapes(&blocks);
        assert_eq!(shapes, vec![(1, "(1,2)"), (2, "(3,4)")]);
    }

    #[test]
    fn test_number_shapes_discards_nonempty_preamble() {
        let blocks = vec!["preamble text", "(1,2)"];
        let shapes = number_shapes(&blocks);
        assert_eq!(shapes, vec![(1, "(1,2)")]);
    }

    #[test]
    fn test_number_shapes_empty_when_only_preamble() {
        let blocks = vec!["no headers here"];
        assert!(number_shapes(&blocks).is_empty());
    }

    #[test]
    fn test_ids_are_dense_and_gapless() {
        let blocks = vec!["", "a", "b", "c", "d"];
        let ids: Vec<u32> = number_shapes(&blocks).iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}
