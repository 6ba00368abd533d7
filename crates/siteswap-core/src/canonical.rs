//! Canonical-form normalization under cyclic rotation
//!
//! Two async patterns describe the same physical pattern when one is a
//! cyclic rotation of the other after minimal-period reduction:
//! "531", "315" and "153" are all the same trick. This module maps every
//! async sequence to one designated representative so that equality of
//! canonical strings is exactly physical equality.
//!
//! The convention is "highest throw first": among all rotations of the
//! reduced sequence, the canonical one starts with the maximum throw
//! value, with ties broken by the numerically largest remaining
//! sequence, so canonical forms read as descending-from-peak.
//!
//! Sync and multiplex patterns are out of scope here; their hand-pairing
//! semantics make plain rotation unsound, so the string-level engine
//! passes them through unchanged.

use crate::throws::ThrowSequence;
use serde::Serialize;
use std::collections::BTreeSet;

/// How a pattern was normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NormalizationType {
    /// All throws equal; collapsed to a single token ("333333" -> "3").
    Constant,
    /// Rotated to the highest-throw-first representative.
    Cyclic,
    /// Nothing to do (single token, or a dialect rotation cannot touch).
    AlreadyCanonical,
}

/// Result of canonicalizing one pattern.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalForm {
    pub canonical: String,
    pub is_already_canonical: bool,
    /// Every cyclic rotation of the reduced sequence, deduplicated and
    /// sorted for determinism.
    pub equivalent_forms: Vec<String>,
    pub normalization_type: NormalizationType,
}

impl CanonicalForm {
    /// The defensive pass-through for inputs rotation cannot safely
    /// reduce (sync and multiplex dialects).
    pub fn passthrough(pattern: &str) -> CanonicalForm {
        CanonicalForm {
            canonical: pattern.to_string(),
            is_already_canonical: true,
            equivalent_forms: vec![pattern.to_string()],
            normalization_type: NormalizationType::AlreadyCanonical,
        }
    }
}

/// Compute the canonical form of an async throw sequence.
///
/// The sequence is expected to have been validated first; the typed
/// argument makes unparseable input unrepresentable here.
pub fn canonicalize(seq: &ThrowSequence) -> CanonicalForm {
    let input = seq.to_string();

    if seq.period() <= 1 {
        return CanonicalForm {
            canonical: input.clone(),
            is_already_canonical: true,
            equivalent_forms: vec![input],
            normalization_type: NormalizationType::AlreadyCanonical,
        };
    }

    let reduced = seq.reduced();

    let first = reduced.throws()[0];
    if reduced.throws().iter().all(|&t| t == first) {
        let canonical = first.to_string();
        return CanonicalForm {
            is_already_canonical: input == canonical,
            equivalent_forms: vec![canonical.clone()],
            canonical,
            normalization_type: NormalizationType::Constant,
        };
    }

    let rotations: Vec<ThrowSequence> =
        (0..reduced.period()).map(|k| reduced.rotated(k)).collect();

    let max_height = reduced.max_height();
    // Throw is Ord, so comparing throw slices is the numeric
    // position-by-position comparison; prefer the largest.
    let canonical_seq = rotations
        .iter()
        .filter(|r| r.throws()[0].height() == max_height)
        .max_by(|a, b| a.throws().cmp(b.throws()))
        .expect("a rotation starting with the maximum always exists");
    let canonical = canonical_seq.to_string();

    let equivalent_forms: Vec<String> = rotations
        .iter()
        .map(|r| r.to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    CanonicalForm {
        is_already_canonical: input == canonical,
        canonical,
        equivalent_forms,
        normalization_type: NormalizationType::Cyclic,
    }
}
