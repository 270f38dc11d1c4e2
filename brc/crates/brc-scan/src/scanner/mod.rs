//! Core scanner implementation.
//!
//! This module contains the main `Scanner` struct: the per-line scan loop,
//! delimiter stack maintenance, and the end-of-input unclosed-opener sweep.
//! Comment and string handling live in [`comment`](self) and
//! [`string`](self) companion files.

mod comment;
mod string;

use brc_util::{Diagnostic, DiagnosticCode, Handler, Span};

use crate::cursor::LineCursor;
use crate::delimiter::{Delimiter, OpenMarker};

/// Lexical mode carried across line boundaries.
///
/// Line comments and strings never persist past the end of a line, so the
/// only state worth carrying is whether a block comment is still open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Ordinary code; delimiters are tracked.
    Code,
    /// Inside `/* ... */`; everything is discarded until `*/`.
    BlockComment,
}

/// Delimiter-balance scanner.
///
/// The scanner walks a source text line by line, classifies every character
/// position into exactly one lexical mode, and maintains a stack of
/// currently-open delimiters. Defects are emitted to the [`Handler`] as
/// they are discovered; the scan never stops early, so one pass reports
/// every defect in the input.
///
/// The caller owns the scanner (and with it the mode and stack threaded
/// across lines) and the handler that accumulates diagnostics. A scanner
/// is created fresh per invocation and discarded afterwards.
pub struct Scanner<'a> {
    /// Handler collecting balance diagnostics.
    pub handler: &'a mut Handler,

    /// Current lexical mode, carried across lines.
    mode: Mode,

    /// Currently-open delimiters, innermost last.
    stack: Vec<OpenMarker>,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner reporting into the given handler.
    pub fn new(handler: &'a mut Handler) -> Self {
        Self {
            handler,
            mode: Mode::Code,
            stack: Vec::new(),
        }
    }

    /// Scans a complete source text.
    ///
    /// Drives [`scan_line`](Self::scan_line) over each newline-stripped
    /// line, then applies the end-of-input rule: every marker still on the
    /// stack is reported as unclosed, in the order it was pushed.
    pub fn scan(&mut self, source: &str) {
        for (idx, line) in source.lines().enumerate() {
            self.scan_line(line, idx as u32 + 1);
        }
        self.finish();
    }

    /// Scans one line left to right, threading the carried mode.
    ///
    /// # Arguments
    /// * `line` - The line text with its terminator stripped
    /// * `line_no` - 1-based line number used in reported positions
    pub fn scan_line(&mut self, line: &str, line_no: u32) {
        let mut cursor = LineCursor::new(line);

        while !cursor.is_at_end() {
            if self.mode == Mode::BlockComment {
                self.skip_block_comment(&mut cursor);
                continue;
            }

            let c = cursor.current_char();
            match c {
                // Line comment: nothing else on this line is inspected.
                '/' if cursor.peek_char(1) == '/' => return,
                '/' if cursor.peek_char(1) == '*' => {
                    self.mode = Mode::BlockComment;
                    cursor.advance_n(2);
                },
                '"' | '\'' => self.skip_string(&mut cursor),
                _ => {
                    let span = Span::new(line_no, cursor.column());
                    if let Some(delimiter) = Delimiter::from_opener(c) {
                        self.stack.push(OpenMarker { delimiter, span });
                    } else if Delimiter::from_closer(c).is_some() {
                        self.close_delimiter(c, span);
                    }
                    cursor.advance();
                },
            }
        }
    }

    /// Applies the end-of-input rule.
    ///
    /// Drains the stack in push order, emitting one unclosed-opener
    /// diagnostic per leftover marker. Called by [`scan`](Self::scan);
    /// exposed for callers that drive `scan_line` themselves.
    pub fn finish(&mut self) {
        for marker in self.stack.drain(..) {
            self.handler.emit_diagnostic(
                Diagnostic::error(
                    format!("Unclosed {} at {}", marker.delimiter.opener(), marker.span),
                    marker.span,
                )
                .with_code(DiagnosticCode::E_SCAN_UNCLOSED_OPENER),
            );
        }
    }

    /// Returns the current lexical mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the number of currently-open delimiters.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Handles a closing delimiter at the given position.
    ///
    /// Pops the innermost marker unconditionally; a mismatched closer is
    /// reported but never re-pushes the opener.
    fn close_delimiter(&mut self, closer: char, span: Span) {
        match self.stack.pop() {
            None => {
                self.handler.emit_diagnostic(
                    Diagnostic::error(
                        format!("Unexpected closing {} at line {}", closer, span),
                        span,
                    )
                    .with_code(DiagnosticCode::E_SCAN_UNEXPECTED_CLOSER),
                );
            },
            Some(marker) => {
                let expected = marker.delimiter.closer();
                if closer != expected {
                    self.handler.emit_diagnostic(
                        Diagnostic::error(
                            format!(
                                "Mismatch: Expected {} for {}({}) but found {} at {}",
                                expected,
                                marker.delimiter.opener(),
                                marker.span,
                                closer,
                                span
                            ),
                            span,
                        )
                        .with_code(DiagnosticCode::E_SCAN_MISMATCHED_PAIR)
                        .with_note(format!("opened at {}", marker.span)),
                    );
                }
            },
        }
    }
}

/// Checks a source text and returns its diagnostics in report order.
///
/// Convenience wrapper over [`Scanner`]: fresh state per call, no I/O.
/// An empty result means the code-mode delimiters are fully balanced.
///
/// # Example
///
/// ```
/// use brc_scan::check_source;
///
/// assert!(check_source("func() { return [1, 2]; }").is_empty());
/// assert_eq!(check_source("arr[0)").len(), 1);
/// ```
pub fn check_source(source: &str) -> Vec<Diagnostic> {
    let mut handler = Handler::new();
    let mut scanner = Scanner::new(&mut handler);
    scanner.scan(source);
    handler.diagnostics()
}
