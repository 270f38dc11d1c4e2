//! brc-scan - Lexical Scanner & Balance Checker
//!
//! This crate verifies matched pairs of parentheses, braces, and brackets
//! in a source text while correctly ignoring delimiters that appear inside
//! string literals or comments.
//!
//! # Overview
//!
//! The scanner reads a text line by line, classifies each character
//! position into exactly one lexical mode (code, line comment, block
//! comment, or string), and maintains a stack of currently-open delimiters
//! to detect mismatches, unexpected closers, and unclosed openers at end
//! of input. It runs in a single left-to-right pass: O(n) time and O(d)
//! auxiliary space for nesting depth d, with no recursion.
//!
//! The scanner is pure with respect to its input: no I/O, no global state,
//! and it never fails on malformed input. Defects are collected, never
//! short-circuited, so one pass reports every defect found.
//!
//! # Example Usage
//!
//! ```
//! use brc_scan::check_source;
//!
//! // Balanced: delimiters in the string and comment are ignored.
//! let diags = check_source("value = ')'; // comment with (unbalanced");
//! assert!(diags.is_empty());
//!
//! // One unclosed brace.
//! let diags = check_source("if (x) { doThing(); ");
//! assert_eq!(diags.len(), 1);
//! assert_eq!(diags[0].message, "Unclosed { at 1:8");
//! ```
//!
//! # Module Structure
//!
//! - [`scanner`] - Main scanner implementation (mode tracking and the
//!   delimiter stack)
//! - [`cursor`] - Per-line character cursor with column tracking
//! - [`delimiter`] - Delimiter pair classification

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod delimiter;
pub mod scanner;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::LineCursor;
pub use delimiter::{Delimiter, OpenMarker};
pub use scanner::{check_source, Mode, Scanner};
