//! String literal handling.
//!
//! Strings are skipped, never tokenized: the scanner only needs to know
//! where a literal ends so that delimiters inside it are not tracked.

use crate::cursor::LineCursor;
use crate::scanner::Scanner;

impl Scanner<'_> {
    /// Skips a string literal within the current line.
    ///
    /// The cursor must rest on the opening quote (single or double). Scans
    /// forward for the matching unescaped quote; the other quote kind is
    /// ordinary content. A quote counts as escaped when the immediately
    /// preceding character is a backslash, so `"\\\""` misreads its final
    /// quote as escaped (known limitation). If the line ends before a
    /// closing quote, the string is treated as ended at end of line;
    /// string mode never carries over.
    pub(crate) fn skip_string(&mut self, cursor: &mut LineCursor) {
        let quote = cursor.current_char();
        cursor.advance();

        while !cursor.is_at_end() {
            if cursor.current_char() == quote && cursor.prev_char() != '\\' {
                break;
            }
            cursor.advance();
        }

        // Step past the closing quote; no-op when the line ended first.
        cursor.advance();
    }
}
