//! Error types for the dump pipeline

use std::fmt;

/// Which coordinate field of a pair an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Errors that can occur while tidying a coordinate dump
///
/// Every variant aborts the whole run. A partially tidied table would
/// render as a visibly corrupted figure, so the malformed record is never
/// dropped or defaulted. Shape index and pair offset are both 1-based,
/// matching the ids the table itself carries.
#[derive(Debug, Clone, PartialEq)]
pub enum DumpError {
    /// The input is empty or contains no shape headers at all.
    EmptyInput,
    /// A pair token did not split into exactly two fields on a bare comma.
    Format {
        shape: u32,
        pair: usize,
        token: String,
    },
    /// A coordinate field is empty or not a finite numeric literal.
    Parse {
        shape: u32,
        pair: usize,
        axis: Axis,
        field: String,
    },
}

impl fmt::Display for DumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DumpError::EmptyInput => write!(f, "no shape headers found in input"),
            DumpError::Format { shape, pair, token } => {
                write!(
                    f,
                    "shape {}, pair {}: '{}' is not a coordinate pair",
                    shape, pair, token
                )
            }
            DumpError::Parse {
                shape,
                pair,
                axis,
                field,
            } => {
                write!(
                    f,
                    "shape {}, pair {}: invalid {} field '{}'",
                    shape, pair, axis, field
                )
            }
        }
    }
}

impl std::error::Error for DumpError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_message() {
        assert_eq!(
            DumpError::EmptyInput.to_string(),
            "no shape headers found in input"
        );
    }

    #[test]
    fn test_format_message_names_shape_and_pair() {
        let err = DumpError::Format {
            shape: 2,
            pair: 3,
            token: "junk".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "shape 2, pair 3: 'junk' is not a coordinate pair"
        );
    }

    #[test]
    fn test_parse_message_names_axis() {
        let err = DumpError::Parse {
            shape: 1,
            pair: 1,
            axis: Axis::Y,
            field: String::new(),
        };
        assert_eq!(err.to_string(), "shape 1, pair 1: invalid y field ''");
    }
}
