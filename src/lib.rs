//! # shapedump
//!
//! A parser for shape-delimited coordinate dumps.
//!
//! The input is a single text blob: an optional preamble followed by
//! repeated shape headers (`# Shape 01` and the like), each header followed
//! by a body of parenthesis-wrapped coordinate pairs separated by `" , "`.
//! Line breaks may appear anywhere, including inside a delimiter. The
//! output is a tidy table with one row per coordinate pair:
//!
//! ```text
//! # Shape 01(1,2) , (3,4)# Shape 02(5,6)
//! ```
//!
//! becomes
//!
//! ```text
//! shape,x,y
//! 1,1,2
//! 1,3,4
//! 2,5,6
//! ```
//!
//! Shape ids are assigned by order of appearance; the two-character id
//! embedded in each header is matched but never interpreted. The table
//! keeps shape order outer and pair order inner, which downstream path
//! rendering depends on. See the [`render`] module for the plotting
//! capability the table is handed to.

pub mod dump;
pub mod render;

pub use dump::error::{Axis, DumpError};
pub use dump::pipeline::tidy;
pub use dump::table::{TidyRecord, TidyTable};
