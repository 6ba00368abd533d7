//! Constrained generation of valid async patterns
//!
//! Depth-first backtracking over throw heights with sum-window pruning:
//! a branch is abandoned as soon as the remaining beats can no longer
//! reach the target sum required by the average theorem. Candidate order
//! is shuffled per attempt with a seeded RNG so repeated attempts explore
//! different corners of the space while staying reproducible.
//!
//! Generation is best-effort: the search space can be genuinely empty
//! for pathological bounds, so exhaustion returns `None` rather than an
//! error, and callers fall back to [`classic_patterns`].

use crate::canonical::canonicalize;
use crate::throws::{Throw, ThrowSequence};
use crate::validate::{check, is_valid_sequence};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashSet;

/// Caller-supplied bounds for the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConstraints {
    pub min_height: u8,
    pub max_height: u8,
    pub include_zeros: bool,
    pub max_attempts: u32,
}

impl Default for GeneratorConstraints {
    fn default() -> Self {
        GeneratorConstraints {
            min_height: 0,
            max_height: Throw::MAX,
            include_zeros: false,
            max_attempts: 1000,
        }
    }
}

/// Hard cap on candidates visited by [`enumerate_patterns`].
const MAX_COMBINATIONS: usize = 1000;

/// Curated classic patterns per object count, the documented fallback
/// when generation comes up empty.
pub fn classic_patterns(object_count: u32) -> &'static [&'static str] {
    match object_count {
        3 => &["3", "423", "441", "531", "522", "51", "42", "60"],
        4 => &["4", "534", "552", "71", "62", "53", "633", "642"],
        5 => &["5", "645", "663", "744", "753", "97531", "91", "82"],
        6 => &["6", "756", "774", "855", "864", "97", "88", "79"],
        7 => &["7", "867", "885", "966", "975", "b97531", "99", "9a"],
        _ => &[],
    }
}

/// Synthesize one valid pattern with the given object count and period,
/// already in canonical form. Returns `None` when no attempt succeeds.
pub fn generate_pattern(
    object_count: u32,
    length: usize,
    constraints: &GeneratorConstraints,
) -> Option<String> {
    if length == 0 || constraints.min_height > constraints.max_height {
        return None;
    }
    let target_sum = object_count * length as u32;

    for attempt in 0..constraints.max_attempts {
        // A fresh branch order per attempt; the seed keeps runs
        // reproducible.
        let mut rng = StdRng::seed_from_u64(u64::from(attempt).wrapping_mul(0x9e37_79b9));
        if let Some(heights) = search(Vec::new(), length, 0, target_sum, constraints, &mut rng) {
            let seq = ThrowSequence::from_heights(&heights)?;
            return Some(canonicalize(&seq).canonical);
        }
    }

    None
}

/// Depth-first search building the sequence by value: each branch owns
/// its own prefix, so backtracking cannot alias a sibling's state.
fn search(
    prefix: Vec<u8>,
    remaining: usize,
    current_sum: u32,
    target_sum: u32,
    constraints: &GeneratorConstraints,
    rng: &mut StdRng,
) -> Option<Vec<u8>> {
    if remaining == 0 {
        if current_sum == target_sum && accept(&prefix) {
            return Some(prefix);
        }
        return None;
    }

    let candidates = match bounds(remaining, current_sum, target_sum, constraints) {
        Some(range) => range,
        None => return None,
    };

    let mut order: Vec<u8> = candidates
        .filter(|&h| constraints.include_zeros || h != 0)
        .collect();
    order.shuffle(rng);

    for height in order {
        let mut next = prefix.clone();
        next.push(height);
        if let Some(found) = search(
            next,
            remaining - 1,
            current_sum + u32::from(height),
            target_sum,
            constraints,
            rng,
        ) {
            return Some(found);
        }
    }

    None
}

/// Window of heights that can still reach the target sum: anything lower
/// than `min_needed` cannot be compensated for by the remaining beats at
/// `max_height`, anything higher than `max_allowed` overshoots even if
/// the rest are all `min_height`.
fn bounds(
    remaining: usize,
    current_sum: u32,
    target_sum: u32,
    constraints: &GeneratorConstraints,
) -> Option<std::ops::RangeInclusive<u8>> {
    let rest = (remaining - 1) as u32;
    let budget = target_sum.checked_sub(current_sum)?;

    let min_needed = budget
        .saturating_sub(rest * u32::from(constraints.max_height))
        .max(u32::from(constraints.min_height));
    let max_allowed = budget
        .checked_sub(rest * u32::from(constraints.min_height))
        .unwrap_or(0)
        .min(u32::from(constraints.max_height));

    if min_needed > max_allowed {
        return None;
    }
    Some(min_needed as u8..=max_allowed as u8)
}

/// Full acceptance test for a completed candidate: the cheap boolean
/// pass first, then the complete invariant set including state return.
fn accept(heights: &[u8]) -> bool {
    if !is_valid_sequence(heights) {
        return false;
    }
    match ThrowSequence::from_heights(heights) {
        Some(seq) => check(&seq).is_empty(),
        None => false,
    }
}

/// Exhaustively enumerate valid canonical patterns for short periods,
/// deduplicated by canonical form. Visits at most [`MAX_COMBINATIONS`]
/// candidates and returns at most `max_patterns` results, so runtime is
/// bounded by construction.
pub fn enumerate_patterns(
    object_count: u32,
    length: usize,
    constraints: &GeneratorConstraints,
    max_patterns: usize,
) -> Vec<String> {
    if length == 0 || constraints.min_height > constraints.max_height {
        return Vec::new();
    }
    let target_sum = object_count * length as u32;

    let mut seen = HashSet::new();
    let mut results = Vec::new();
    let mut visited = 0usize;

    enumerate(
        Vec::new(),
        length,
        0,
        target_sum,
        constraints,
        max_patterns,
        &mut visited,
        &mut seen,
        &mut results,
    );

    results
}

#[allow(clippy::too_many_arguments)]
fn enumerate(
    prefix: Vec<u8>,
    remaining: usize,
    current_sum: u32,
    target_sum: u32,
    constraints: &GeneratorConstraints,
    max_patterns: usize,
    visited: &mut usize,
    seen: &mut HashSet<String>,
    results: &mut Vec<String>,
) {
    if results.len() >= max_patterns || *visited >= MAX_COMBINATIONS {
        return;
    }

    if remaining == 0 {
        *visited += 1;
        if current_sum == target_sum && accept(&prefix) {
            if let Some(seq) = ThrowSequence::from_heights(&prefix) {
                let canonical = canonicalize(&seq).canonical;
                if seen.insert(canonical.clone()) {
                    results.push(canonical);
                }
            }
        }
        return;
    }

    let candidates = match bounds(remaining, current_sum, target_sum, constraints) {
        Some(range) => range,
        None => return,
    };

    for height in candidates {
        if !constraints.include_zeros && height == 0 {
            continue;
        }
        let mut next = prefix.clone();
        next.push(height);
        enumerate(
            next,
            remaining - 1,
            current_sum + u32::from(height),
            target_sum,
            constraints,
            max_patterns,
            visited,
            seen,
            results,
        );
    }
}
