//! Comment handling.
//!
//! Line comments are handled inline by the scan loop (the rest of the line
//! is simply never inspected); this module handles the block-comment mode.

use crate::cursor::LineCursor;
use crate::scanner::{Mode, Scanner};

impl Scanner<'_> {
    /// Consumes block-comment text up to and including `*/`.
    ///
    /// If the close marker appears on this line, the scanner returns to
    /// code mode with the cursor resting just past the marker, and
    /// scanning resumes on the same line. Otherwise the rest of the line
    /// is discarded and block-comment mode carries over to the next line.
    ///
    /// Block comments do not nest: the first `*/` always closes.
    pub(crate) fn skip_block_comment(&mut self, cursor: &mut LineCursor) {
        while !cursor.is_at_end() {
            if cursor.current_char() == '*' && cursor.peek_char(1) == '/' {
                cursor.advance_n(2);
                self.mode = Mode::Code;
                return;
            }
            cursor.advance();
        }
    }
}
