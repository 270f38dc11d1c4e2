//! Character cursor for traversing a single line of source text.
//!
//! This module provides the `LineCursor` struct which maintains position
//! state while iterating through one newline-stripped line. It handles
//! UTF-8 encoding correctly and tracks the 1-based character column for
//! error reporting; line numbering is the caller's concern.

/// A cursor for traversing one line of source text character by character.
///
/// The cursor maintains the current position within the line and provides
/// methods for advancing, peeking ahead, and looking one character back.
/// Columns count characters (not bytes), so multi-byte UTF-8 content does
/// not skew reported positions.
///
/// # Example
///
/// ```
/// use brc_scan::cursor::LineCursor;
///
/// let mut cursor = LineCursor::new("let x = f(y);");
/// assert_eq!(cursor.current_char(), 'l');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'e');
/// assert_eq!(cursor.column(), 2);
/// ```
pub struct LineCursor<'a> {
    /// The line being traversed (no line terminator).
    line: &'a str,

    /// Current byte position in the line.
    position: usize,

    /// Current column number (1-based, in characters).
    column: u32,

    /// Character immediately before the current position, or '\0' at the
    /// start of the line. Used for the escaped-quote check.
    prev: char,
}

impl<'a> LineCursor<'a> {
    /// Creates a new cursor for the given line.
    pub fn new(line: &'a str) -> Self {
        Self {
            line,
            position: 0,
            column: 1,
            prev: '\0',
        }
    }

    /// Returns the current character at the cursor position.
    ///
    /// Returns '\0' (null character) if at the end of the line.
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character at the given offset from the current position.
    ///
    /// # Arguments
    ///
    /// * `offset` - Number of characters to look ahead (0 = current)
    ///
    /// # Example
    ///
    /// ```
    /// use brc_scan::cursor::LineCursor;
    ///
    /// let cursor = LineCursor::new("/*");
    /// assert_eq!(cursor.peek_char(0), '/');
    /// assert_eq!(cursor.peek_char(1), '*');
    /// assert_eq!(cursor.peek_char(2), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        self.line[self.position..].chars().nth(offset).unwrap_or('\0')
    }

    /// Returns the character immediately before the current position.
    ///
    /// Returns '\0' when the cursor is still at the start of the line.
    #[inline]
    pub fn prev_char(&self) -> char {
        self.prev
    }

    /// Advances the cursor to the next character.
    ///
    /// Updates column tracking. Does nothing if already at the end.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.line[self.position..].chars().next() {
            self.position += c.len_utf8();
            self.column += 1;
            self.prev = c;
        }
    }

    /// Advances the cursor by the given number of characters.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the line.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.line.len()
    }

    /// Returns the current column number (1-based, in characters).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the line text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.line[self.position..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = LineCursor::new("fn main() {");
        assert_eq!(cursor.current_char(), 'f');
        assert_eq!(cursor.column(), 1);
        assert_eq!(cursor.prev_char(), '\0');
    }

    #[test]
    fn test_advance() {
        let mut cursor = LineCursor::new("abc");
        assert_eq!(cursor.current_char(), 'a');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'b');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'c');
        cursor.advance();
        assert_eq!(cursor.current_char(), '\0');
    }

    #[test]
    fn test_advance_utf8() {
        let mut cursor = LineCursor::new("αβ(");
        assert_eq!(cursor.current_char(), 'α');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'β');
        cursor.advance();
        assert_eq!(cursor.current_char(), '(');
        assert_eq!(cursor.column(), 3);
    }

    #[test]
    fn test_peek_char() {
        let cursor = LineCursor::new("abc");
        assert_eq!(cursor.peek_char(0), 'a');
        assert_eq!(cursor.peek_char(1), 'b');
        assert_eq!(cursor.peek_char(2), 'c');
        assert_eq!(cursor.peek_char(3), '\0');
        assert_eq!(cursor.peek_char(100), '\0');
    }

    #[test]
    fn test_peek_char_utf8() {
        let cursor = LineCursor::new("é{");
        assert_eq!(cursor.peek_char(0), 'é');
        assert_eq!(cursor.peek_char(1), '{');
    }

    #[test]
    fn test_prev_char_tracking() {
        let mut cursor = LineCursor::new("\\\"");
        cursor.advance();
        assert_eq!(cursor.prev_char(), '\\');
        assert_eq!(cursor.current_char(), '"');
    }

    #[test]
    fn test_is_at_end() {
        let mut cursor = LineCursor::new("a");
        assert!(!cursor.is_at_end());
        cursor.advance();
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_column_tracking() {
        let mut cursor = LineCursor::new("if (x) {");
        cursor.advance_n(3);
        assert_eq!(cursor.current_char(), '(');
        assert_eq!(cursor.column(), 4);
    }

    #[test]
    fn test_advance_n_past_end() {
        let mut cursor = LineCursor::new("ab");
        cursor.advance_n(10);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.column(), 3);
    }

    #[test]
    fn test_remaining() {
        let mut cursor = LineCursor::new("x = 1;");
        cursor.advance_n(4);
        assert_eq!(cursor.remaining(), "1;");
    }

    #[test]
    fn test_empty_line() {
        let mut cursor = LineCursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_char(), '\0');
        cursor.advance();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.column(), 1);
    }
}
