//! Span module - Source location tracking.
//!
//! This module provides the [`Span`] type representing a position in the
//! scanned text. The checker reports positions as 1-based line and column
//! numbers, where columns count characters from the start of the line.

use std::fmt;

/// A source location identified by 1-based line and column numbers.
///
/// Columns count characters (not bytes), so a position inside a line with
/// multi-byte UTF-8 content still matches what an editor displays.
///
/// # Examples
///
/// ```
/// use brc_util::span::Span;
///
/// let span = Span::new(3, 14);
/// assert_eq!(span.line, 3);
/// assert_eq!(span.column, 14);
/// assert_eq!(span.to_string(), "3:14");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use brc_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.line, 0);
    /// assert_eq!(Span::DUMMY.column, 0);
    /// ```
    pub const DUMMY: Span = Span { line: 0, column: 0 };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
