//! Diagnostic codes for categorizing balance-check defects.
//!
//! This module provides the [`DiagnosticCode`] type for uniquely identifying
//! diagnostic messages, so that consumers can match on the defect kind
//! without parsing message text.
//!
//! # Examples
//!
//! ```
//! use brc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_SCAN_UNEXPECTED_CLOSER;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.as_str(), "E1001");
//! ```

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where `prefix` is
/// "E" for errors or "W" for warnings and `number` is zero-padded to four
/// digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// # Examples
    ///
    /// ```
    /// use brc_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("E", 1001);
    /// assert_eq!(code.as_str(), "E1001");
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix (e.g., "E" for error, "W" for warning)
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // PREDEFINED ERROR CODES (E1001-E1999: scanner)
    // =========================================================================

    /// E1001: Scanner - Closing delimiter with no matching opener
    pub const E_SCAN_UNEXPECTED_CLOSER: Self = Self::new("E", 1001);
    /// E1002: Scanner - Closing delimiter does not match the innermost opener
    pub const E_SCAN_MISMATCHED_PAIR: Self = Self::new("E", 1002);
    /// E1003: Scanner - Opening delimiter never closed before end of input
    pub const E_SCAN_UNCLOSED_OPENER: Self = Self::new("E", 1003);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Standalone constant exports for convenience
pub const E_SCAN_UNEXPECTED_CLOSER: DiagnosticCode = DiagnosticCode::E_SCAN_UNEXPECTED_CLOSER;
pub const E_SCAN_MISMATCHED_PAIR: DiagnosticCode = DiagnosticCode::E_SCAN_MISMATCHED_PAIR;
pub const E_SCAN_UNCLOSED_OPENER: DiagnosticCode = DiagnosticCode::E_SCAN_UNCLOSED_OPENER;
