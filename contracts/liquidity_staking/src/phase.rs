use soroban_sdk::contracttype;

// ── Types ───────────────────────────────────────────────────────────────────

/// Time-derived lifecycle phase of a configured campaign.
///
/// The phase is never persisted. It is recomputed from the ledger timestamp
/// and the three fixed campaign boundaries on every call, so stored state and
/// clock-derived state cannot drift apart.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    /// `now < start_time` — staking has not opened yet.
    Pending,
    /// `start_time <= now < close_time` — stakes are accepted.
    Open,
    /// `close_time <= now < release_time` — no new stakes, funds locked.
    ClosedPendingRelease,
    /// `now >= release_time` — principal and rewards may be withdrawn.
    Released,
}

// ── Classification ──────────────────────────────────────────────────────────

/// Classify `now` against the campaign window.
///
/// All intervals are half-open: a stake submitted exactly at `start_time`
/// is accepted, one submitted exactly at `close_time` is not.
pub fn current_phase(now: u64, start_time: u64, close_time: u64, release_time: u64) -> Phase {
    if now < start_time {
        Phase::Pending
    } else if now < close_time {
        Phase::Open
    } else if now < release_time {
        Phase::ClosedPendingRelease
    } else {
        Phase::Released
    }
}

// ── Unit tests ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;

    const START: u64 = 1_000;
    const CLOSE: u64 = 2_000;
    const RELEASE: u64 = 3_000;

    #[test]
    fn pending_before_start() {
        assert_eq!(current_phase(0, START, CLOSE, RELEASE), Phase::Pending);
        assert_eq!(current_phase(999, START, CLOSE, RELEASE), Phase::Pending);
    }

    #[test]
    fn open_is_inclusive_of_start() {
        assert_eq!(current_phase(START, START, CLOSE, RELEASE), Phase::Open);
        assert_eq!(current_phase(1_999, START, CLOSE, RELEASE), Phase::Open);
    }

    #[test]
    fn closed_is_inclusive_of_close() {
        assert_eq!(
            current_phase(CLOSE, START, CLOSE, RELEASE),
            Phase::ClosedPendingRelease
        );
        assert_eq!(
            current_phase(2_999, START, CLOSE, RELEASE),
            Phase::ClosedPendingRelease
        );
    }

    #[test]
    fn released_is_inclusive_of_release() {
        assert_eq!(current_phase(RELEASE, START, CLOSE, RELEASE), Phase::Released);
        assert_eq!(
            current_phase(u64::MAX, START, CLOSE, RELEASE),
            Phase::Released
        );
    }

    #[test]
    fn close_equal_to_release_skips_lock_window() {
        // `close_time == release_time` is a legal window with no lock phase.
        assert_eq!(current_phase(1_500, START, CLOSE, CLOSE), Phase::Open);
        assert_eq!(current_phase(CLOSE, START, CLOSE, CLOSE), Phase::Released);
    }
}
