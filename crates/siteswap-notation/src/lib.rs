//! Siteswap notation parser and pattern engine
//!
//! This crate parses siteswap juggling notation and exposes string-level
//! validation, canonicalization, analysis and name lookup on top of
//! `siteswap-core`.
//!
//! # Examples
//!
//! ```
//! use siteswap_notation::{parse, validate_pattern};
//!
//! // Parse a pattern string
//! let parsed = parse("(4x,2)(2,4x)").unwrap();
//!
//! // Validate end to end
//! let report = validate_pattern("441");
//! assert!(report.is_valid);
//! ```
//!
//! # Notation Syntax
//!
//! - Async throws: `441`, `97531`, heights above 9 as letters (`a` = 10)
//! - Sync pairs: `(4,4)`, crossing throws marked `x` as in `(4x,2x)`
//! - Multiplex groups: `[33]1` throws two objects on one beat
//!
//! # Main Functions
//!
//! - [`parse`]: Parse a pattern string to a typed throw sequence
//! - [`validate_pattern`]: Full validation report for a pattern string
//! - [`canonicalize_pattern`]: Canonical form of a pattern string
//! - [`analyze_pattern`]: Derived statistics and difficulty
//! - [`pattern_name`]: Authentic name lookup by canonical form

pub mod engine;
pub mod error;
pub mod lexer;
pub mod parser;

#[cfg(test)]
mod parser_tests;

pub use engine::{
    analyze_pattern, canonicalize_pattern, equivalent, pattern_family, pattern_name,
    validate_pattern,
};
pub use error::{ParseError, Result};
pub use lexer::{Lexer, Token};
pub use parser::{classify, normalize, parse, ParsedPattern, Parser};
