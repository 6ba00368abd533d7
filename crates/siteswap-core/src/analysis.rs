//! Derived statistics over validated patterns
//!
//! Pure view computation: no new invariants are checked here beyond
//! re-running the validator, and nothing is cached between calls.

use crate::throws::{PatternType, ThrowSequence};
use crate::validate::validate;
use serde::Serialize;

/// Descriptive record for a valid pattern.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternAnalysis {
    pub object_count: u32,
    pub period: usize,
    pub difficulty: f64,
    pub average_height: f64,
    pub variance: f64,
    pub max_height: u8,
    pub min_height: u8,
    pub pattern_type: PatternType,
    pub has_multiplex: bool,
    pub has_synchronous: bool,
    pub throw_sequence: Vec<u8>,
}

/// Analyze a parsed sequence, or return `None` if it fails validation.
pub fn analyze_sequence(seq: &ThrowSequence, pattern_type: PatternType) -> Option<PatternAnalysis> {
    let report = validate(seq, pattern_type);
    if !report.is_valid {
        return None;
    }

    Some(PatternAnalysis {
        object_count: report.object_count?,
        period: report.period?,
        difficulty: difficulty_score(seq, pattern_type),
        average_height: report.average_height?,
        variance: report.variance?,
        max_height: seq.max_height(),
        min_height: seq.min_height(),
        pattern_type,
        has_multiplex: pattern_type == PatternType::Multiplex,
        has_synchronous: pattern_type == PatternType::Sync,
        throw_sequence: seq.heights().collect(),
    })
}

/// Heuristic difficulty score on a 1-10 scale.
///
/// Weighted sum of average height (0.4), throw variance (0.3), a
/// logarithmic memory cost for the period (0.2) and fixed bonuses for
/// special features (0.1): sync +0.5, multiplex +0.7, any throw of 7 or
/// higher +0.3, any rest +0.2. The weights are presentation tuning, not
/// physics; they are kept exactly as shipped so scores stay comparable.
pub fn difficulty_score(seq: &ThrowSequence, pattern_type: PatternType) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }

    let height = seq.average() * 0.4;
    let variance = seq.variance() * 0.3;
    let length = ((seq.period() + 1) as f64).ln() * 0.2;

    let mut bonus = 0.0;
    if pattern_type == PatternType::Sync {
        bonus += 0.5;
    }
    if pattern_type == PatternType::Multiplex {
        bonus += 0.7;
    }
    if seq.max_height() >= 7 {
        bonus += 0.3;
    }
    if seq.contains_rest() {
        bonus += 0.2;
    }

    (height + variance + length + bonus * 0.1).clamp(1.0, 10.0)
}
