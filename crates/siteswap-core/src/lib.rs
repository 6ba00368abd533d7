//! Core types and pattern mathematics for siteswap juggling notation
//!
//! This crate provides the foundational types and algorithms for working
//! with siteswap patterns in Rust: throw sequences, mathematical
//! validation (average theorem, collision detection, state return),
//! canonical-form normalization under cyclic rotation, descriptive
//! analysis, and a constrained pattern generator.
//!
//! # Examples
//!
//! ```
//! use siteswap_core::{PatternType, ThrowSequence, validate};
//!
//! let throws: ThrowSequence = "441".parse().unwrap();
//! let report = validate(&throws, PatternType::Async);
//! assert!(report.is_valid);
//! assert_eq!(report.object_count, Some(3));
//! ```
//!
//! # Main Components
//!
//! - **Throw / ThrowSequence**: immutable throw-height values and sequences
//! - **Validator**: the three mathematical invariants of a realizable pattern
//! - **Canonicalizer**: one representative per cyclic-rotation class
//! - **Analyzer**: derived statistics and a heuristic difficulty score
//! - **Generator**: backtracking search for new valid patterns
//! - **Names**: the curated table of authentic pattern names and families
//! - **Store**: the user-scoped key-value interface for progress persistence

pub mod analysis;
pub mod canonical;
pub mod generator;
pub mod names;
pub mod store;
pub mod throws;
pub mod validate;

#[cfg(test)]
mod property_tests;

pub use analysis::{analyze_sequence, PatternAnalysis};
pub use canonical::{canonicalize, CanonicalForm, NormalizationType};
pub use generator::{
    classic_patterns, enumerate_patterns, generate_pattern, GeneratorConstraints,
};
pub use names::{lookup_family, lookup_name, PatternFamily, PatternName, Relationship};
pub use store::{MemoryStore, ProgressStore, StoreError};
pub use throws::{PatternType, Throw, ThrowSequence};
pub use validate::{is_valid_sequence, validate, ValidationError, ValidationReport};
