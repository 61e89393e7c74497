//! Properties of the time-derived phase classification.

use liquidity_staking::phase::{current_phase, Phase};
use proptest::prelude::*;

/// A well-formed campaign window: `start < close <= release`.
fn window() -> impl Strategy<Value = (u64, u64, u64)> {
    (0u64..u64::MAX / 2).prop_flat_map(|start| {
        ((start + 1)..=u64::MAX / 2 + 1).prop_flat_map(move |close| {
            (close..=u64::MAX / 2 + 2).prop_map(move |release| (start, close, release))
        })
    })
}

fn rank(phase: Phase) -> u8 {
    match phase {
        Phase::Pending => 0,
        Phase::Open => 1,
        Phase::ClosedPendingRelease => 2,
        Phase::Released => 3,
    }
}

proptest! {
    /// Every instant falls into exactly the interval its phase names.
    #[test]
    fn prop_phase_matches_interval((start, close, release) in window(), now in any::<u64>()) {
        let phase = current_phase(now, start, close, release);
        match phase {
            Phase::Pending => prop_assert!(now < start),
            Phase::Open => prop_assert!(start <= now && now < close),
            Phase::ClosedPendingRelease => prop_assert!(close <= now && now < release),
            Phase::Released => prop_assert!(now >= release),
        }
    }

    /// The phase never moves backwards as the clock advances.
    #[test]
    fn prop_phase_monotonic_in_time(
        (start, close, release) in window(),
        a in any::<u64>(),
        b in any::<u64>(),
    ) {
        let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            rank(current_phase(earlier, start, close, release))
                <= rank(current_phase(later, start, close, release))
        );
    }

    /// Boundary instants land on the later side of each transition.
    #[test]
    fn prop_boundaries_are_half_open((start, close, release) in window()) {
        prop_assert_eq!(current_phase(start, start, close, release), Phase::Open);
        prop_assert_eq!(
            current_phase(close, start, close, release),
            if close < release { Phase::ClosedPendingRelease } else { Phase::Released }
        );
        prop_assert_eq!(current_phase(release, start, close, release), Phase::Released);
    }
}
