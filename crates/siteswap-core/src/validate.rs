//! Mathematical validation of throw sequences
//!
//! A sequence is physically realizable when it satisfies three
//! independent invariants: the average theorem (mean height is an
//! integer object count), collision freedom (no two objects land on the
//! same hand at the same beat), and state return (one full cycle leaves
//! every hand holding as many objects as it started with).
//!
//! All three checks always run, and every violated invariant produces
//! its own diagnostic. A pattern can break the average theorem and have
//! a collision at the same time, and both messages are useful.

use crate::throws::{PatternType, ThrowSequence};
use serde::Serialize;
use std::collections::HashMap;

const HANDS: usize = 2;

/// A violated pattern invariant.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("pattern contains no throws")]
    Empty,

    #[error(
        "average height {average:.2} is not an integer \
         (sum {sum} over {period} beats violates the average theorem)"
    )]
    AverageTheorem { sum: u32, period: usize, average: f64 },

    #[error(
        "collision at beat {landing_beat}, hand {landing_hand}: \
         throws from beats {first_beat} and {second_beat} land together"
    )]
    Collision {
        first_beat: usize,
        second_beat: usize,
        landing_beat: usize,
        landing_hand: usize,
    },

    #[error(
        "pattern does not return to its starting state \
         (hands start with [{start_left}, {start_right}] objects, \
         end with [{end_left}, {end_right}])"
    )]
    StateMismatch {
        start_left: i64,
        start_right: i64,
        end_left: i64,
        end_right: i64,
    },
}

/// Outcome of validating one pattern.
///
/// The canonical-form fields are filled in by the string-level engine
/// after validation succeeds; the core validator leaves them empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub pattern_type: PatternType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_form: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_canonical: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equivalent_forms: Option<Vec<String>>,
}

impl ValidationReport {
    pub fn invalid(pattern_type: PatternType, errors: Vec<String>) -> ValidationReport {
        ValidationReport {
            is_valid: false,
            errors,
            pattern_type,
            object_count: None,
            period: None,
            average_height: None,
            variance: None,
            canonical_form: None,
            is_canonical: None,
            equivalent_forms: None,
        }
    }
}

/// Run every invariant check and collect all violations.
pub fn check(seq: &ThrowSequence) -> Vec<ValidationError> {
    if seq.is_empty() {
        return vec![ValidationError::Empty];
    }

    let mut errors = Vec::new();

    if let Some(err) = check_average(seq) {
        errors.push(err);
    }
    if let Some(err) = check_collisions(seq) {
        errors.push(err);
    }
    if let Some(err) = check_state_return(seq) {
        errors.push(err);
    }

    errors
}

/// Validate a parsed sequence and produce the full report.
pub fn validate(seq: &ThrowSequence, pattern_type: PatternType) -> ValidationReport {
    let errors = check(seq);
    if !errors.is_empty() {
        return ValidationReport::invalid(
            pattern_type,
            errors.iter().map(|e| e.to_string()).collect(),
        );
    }

    ValidationReport {
        is_valid: true,
        errors: Vec::new(),
        pattern_type,
        object_count: Some(seq.sum() / seq.period() as u32),
        period: Some(seq.period()),
        average_height: Some(seq.average()),
        variance: Some(seq.variance()),
        canonical_form: None,
        is_canonical: None,
        equivalent_forms: None,
    }
}

/// Boolean-only fast path for generation loops: average theorem and
/// collision freedom, no diagnostics and no state simulation. An
/// optimization for tight search loops, not a replacement for
/// [`validate`].
pub fn is_valid_sequence(heights: &[u8]) -> bool {
    if heights.is_empty() {
        return false;
    }

    let sum: u32 = heights.iter().map(|&h| u32::from(h)).sum();
    if sum % heights.len() as u32 != 0 {
        return false;
    }

    let period = heights.len();
    let mut occupied = vec![false; period * HANDS];
    for (beat, &h) in heights.iter().enumerate() {
        if h == 0 {
            continue;
        }
        let landing_beat = (beat + h as usize) % period;
        let landing_hand = (beat % HANDS + h as usize) % HANDS;
        let slot = landing_beat * HANDS + landing_hand;
        if occupied[slot] {
            return false;
        }
        occupied[slot] = true;
    }

    true
}

fn check_average(seq: &ThrowSequence) -> Option<ValidationError> {
    let sum = seq.sum();
    let period = seq.period();
    if sum % period as u32 == 0 {
        None
    } else {
        Some(ValidationError::AverageTheorem {
            sum,
            period,
            average: seq.average(),
        })
    }
}

/// Simulate one period with two alternating hands. The throw at beat
/// `i` with height `h` lands at beat `(i + h) % period` on hand
/// `((i % 2) + h) % 2`; the mod arithmetic already captures periodic
/// wraparound, so one period is exactly enough.
fn check_collisions(seq: &ThrowSequence) -> Option<ValidationError> {
    let period = seq.period();
    let mut landings: HashMap<(usize, usize), usize> = HashMap::new();

    for (beat, h) in seq.heights().enumerate() {
        if h == 0 {
            continue;
        }
        let landing_beat = (beat + h as usize) % period;
        let landing_hand = (beat % HANDS + h as usize) % HANDS;

        if let Some(&first_beat) = landings.get(&(landing_beat, landing_hand)) {
            return Some(ValidationError::Collision {
                first_beat,
                second_beat: beat,
                landing_beat,
                landing_hand,
            });
        }
        landings.insert((landing_beat, landing_hand), beat);
    }

    None
}

/// Simulate per-hand object counts over one cycle: each non-zero throw
/// removes an object from the throwing hand and adds one to the landing
/// hand. Starting from the balanced distribution of the object count,
/// the multiset of per-hand counts after one period must equal the
/// starting multiset. Odd-period patterns legitimately finish with the
/// hands swapped ("531" starts [2, 1] and ends [1, 2]); a pattern like
/// "123" drains one hand entirely and is rejected here even though it
/// passes the other two checks.
fn check_state_return(seq: &ThrowSequence) -> Option<ValidationError> {
    // Rounded object count so this check still runs when the average
    // theorem already failed.
    let objects = (f64::from(seq.sum()) / seq.period() as f64).round() as i64;
    let start = [(objects + 1) / 2, objects / 2];
    let mut hands = start;

    for (beat, h) in seq.heights().enumerate() {
        if h == 0 {
            continue;
        }
        let throwing_hand = beat % HANDS;
        let landing_hand = (throwing_hand + h as usize) % HANDS;
        hands[throwing_hand] -= 1;
        hands[landing_hand] += 1;
    }

    let mut start_sorted = start;
    let mut end_sorted = hands;
    start_sorted.sort_unstable();
    end_sorted.sort_unstable();

    if start_sorted == end_sorted {
        None
    } else {
        Some(ValidationError::StateMismatch {
            start_left: start[0],
            start_right: start[1],
            end_left: hands[0],
            end_right: hands[1],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::throws::ThrowSequence;

    fn seq(s: &str) -> ThrowSequence {
        s.parse().unwrap()
    }

    #[test]
    fn test_cascade_is_valid() {
        let report = validate(&seq("333"), PatternType::Async);
        assert!(report.is_valid);
        assert_eq!(report.object_count, Some(3));
        assert_eq!(report.period, Some(3));
        assert_eq!(report.average_height, Some(3.0));
        assert_eq!(report.variance, Some(0.0));
    }

    #[test]
    fn test_classic_patterns_are_valid() {
        for pattern in ["441", "531", "423", "51", "97531", "5", "7"] {
            let report = validate(&seq(pattern), PatternType::Async);
            assert!(report.is_valid, "{} should be valid: {:?}", pattern, report.errors);
        }
    }

    #[test]
    fn test_average_theorem_violation() {
        let errors = check(&seq("443"));
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::AverageTheorem { sum: 11, period: 3, .. })));
    }

    #[test]
    fn test_collision_reports_both_beats() {
        // In "321" the throws from beats 0 and 1 both land at beat 0 on
        // hand 1.
        let errors = check(&seq("321"));
        let collision = errors
            .iter()
            .find(|e| matches!(e, ValidationError::Collision { .. }))
            .expect("321 must have a collision");
        match collision {
            ValidationError::Collision { first_beat, second_beat, .. } => {
                assert_ne!(first_beat, second_beat);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_state_mismatch() {
        // "123" passes the average theorem (average 2) and the collision
        // check, but drains one hand over a cycle: starting balanced at
        // [1, 1] it ends at [-1, 3].
        let errors = check(&seq("123"));
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], ValidationError::StateMismatch { .. }));

        let report = validate(&seq("123"), PatternType::Async);
        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn test_all_checks_run_and_accumulate() {
        // "43" breaks the average theorem and also collides; both
        // diagnostics must be collected.
        let errors = check(&seq("43"));
        assert!(errors.len() >= 2, "expected multiple diagnostics, got {:?}", errors);
        let report = validate(&seq("43"), PatternType::Async);
        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), errors.len());
    }

    #[test]
    fn test_single_throw_patterns() {
        for pattern in ["3", "7", "1"] {
            let report = validate(&seq(pattern), PatternType::Async);
            assert!(report.is_valid);
            assert_eq!(report.period, Some(1));
        }
    }

    #[test]
    fn test_all_rest_pattern_is_degenerate_but_valid() {
        // Zero objects in motion: accepted with object_count 0.
        let report = validate(&seq("0"), PatternType::Async);
        assert!(report.is_valid);
        assert_eq!(report.object_count, Some(0));
    }

    #[test]
    fn test_empty_sequence_rejected() {
        let report = validate(&ThrowSequence::new(Vec::new()), PatternType::Async);
        assert!(!report.is_valid);
        assert_eq!(report.errors, vec!["pattern contains no throws".to_string()]);
    }

    #[test]
    fn test_fast_path_agrees_with_full_check_on_valid_patterns() {
        for pattern in ["3", "441", "531", "423", "97531", "0"] {
            let s = seq(pattern);
            let heights: Vec<u8> = s.heights().collect();
            assert_eq!(
                is_valid_sequence(&heights),
                check(&s).is_empty(),
                "fast path disagrees on {}",
                pattern
            );
        }
    }

    #[test]
    fn test_fast_path_rejects_collisions_and_bad_averages() {
        // Beats 0 and 1 of [3, 2, 1] both land at beat 0 on hand 1.
        assert!(!is_valid_sequence(&[3, 2, 1]));
        assert!(!is_valid_sequence(&[4, 4, 3]));
        assert!(!is_valid_sequence(&[]));
    }

    #[test]
    fn test_fast_path_skips_state_return() {
        // [1, 2, 3] passes the average theorem and has no collision; it
        // fails only the state-return check, which the fast path trades
        // away for speed.
        assert!(is_valid_sequence(&[1, 2, 3]));
        assert!(!check(&seq("123")).is_empty());
    }
}
