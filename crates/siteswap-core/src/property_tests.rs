// Randomized invariant checks over the whole pattern space.

use crate::canonical::canonicalize;
use crate::throws::ThrowSequence;
use crate::validate::{check, is_valid_sequence};
use proptest::prelude::*;

fn arb_sequence() -> impl Strategy<Value = ThrowSequence> {
    prop::collection::vec(0u8..=35, 1..12)
        .prop_map(|heights| ThrowSequence::from_heights(&heights).unwrap())
}

proptest! {
    #[test]
    fn canonicalization_is_idempotent(seq in arb_sequence()) {
        let once = canonicalize(&seq);
        let reparsed: ThrowSequence = once.canonical.parse().unwrap();
        let twice = canonicalize(&reparsed);
        prop_assert_eq!(once.canonical, twice.canonical);
    }

    #[test]
    fn canonical_form_is_rotation_invariant(seq in arb_sequence(), k in 0usize..12) {
        let rotated = seq.rotated(k % seq.period());
        prop_assert_eq!(
            canonicalize(&seq).canonical,
            canonicalize(&rotated).canonical
        );
    }

    #[test]
    fn repetition_does_not_change_canonical_form(seq in arb_sequence(), reps in 2usize..4) {
        let heights: Vec<u8> = seq.heights().collect();
        let repeated: Vec<u8> = heights
            .iter()
            .cycle()
            .take(heights.len() * reps)
            .copied()
            .collect();
        let repeated_seq = ThrowSequence::from_heights(&repeated).unwrap();
        prop_assert_eq!(
            canonicalize(&seq).canonical,
            canonicalize(&repeated_seq).canonical
        );
    }

    #[test]
    fn accepted_sequences_satisfy_the_average_theorem(seq in arb_sequence()) {
        if check(&seq).is_empty() {
            prop_assert_eq!(seq.sum() % seq.period() as u32, 0);
        }
    }

    #[test]
    fn full_check_implies_fast_path(seq in arb_sequence()) {
        let heights: Vec<u8> = seq.heights().collect();
        if check(&seq).is_empty() {
            prop_assert!(is_valid_sequence(&heights));
        }
    }
}
