//! brc-util - Shared infrastructure for the brc delimiter checker.
//!
//! This crate provides the types used across the brc workspace:
//!
//! - [`span`] - Source location tracking (1-based line/column positions)
//! - [`diagnostic`] - Diagnostic reporting (messages, codes, and the
//!   collecting [`Handler`])
//!
//! # Example Usage
//!
//! ```
//! use brc_util::{Diagnostic, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! let diag = Diagnostic::error("Unclosed ( at 3:7", Span::new(3, 7))
//!     .with_code(DiagnosticCode::E_SCAN_UNCLOSED_OPENER);
//! handler.emit_diagnostic(diag);
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.error_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

// Re-export main types for convenience
pub use diagnostic::{Diagnostic, DiagnosticCode, Handler, Level};
pub use span::Span;
