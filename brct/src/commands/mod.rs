//! Command implementations for the brct CLI.
//!
//! The tool has a single operation: reading a source file and reporting
//! its delimiter balance.

pub mod check;
