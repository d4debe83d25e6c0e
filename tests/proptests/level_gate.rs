//! Property-Based Tests: Level Gate and Flags
//!
//! - **Gate:** a line is written iff the candidate's rank is at least the
//!   logger's current rank, for every pair of severities.
//! - **Reset:** after any sequence of `set_level` calls, `reset_level`
//!   restores the construction-time level.
//! - **Flags:** `set_flags`/`unset_flags` behave as OR / AND-NOT.

use clerk::{Flags, Logger, MemorySink, Severity};
use proptest::prelude::*;

fn severity() -> impl Strategy<Value = Severity> {
    (0u8..5).prop_map(|rank| Severity::from_rank(rank).unwrap())
}

fn flags() -> impl Strategy<Value = Flags> {
    any::<u8>().prop_map(Flags::from_bits_truncate)
}

proptest! {
    /// **Property:** `is_emittable` agrees with rank comparison, and the
    /// sink sees a line exactly when it holds.
    #[test]
    fn test_gate_matches_rank(current in severity(), candidate in severity()) {
        let out = MemorySink::new();
        let logger = Logger::new(out.clone().into(), "", Flags::empty(), current, "--");

        let expected = candidate.rank() >= current.rank();
        prop_assert_eq!(logger.is_emittable(candidate), expected);

        logger.log(candidate, "m");
        prop_assert_eq!(!out.is_empty(), expected);
    }

    /// **Property:** `reset_level` never returns an intermediate value.
    #[test]
    fn test_reset_restores_original(
        original in severity(),
        changes in proptest::collection::vec(severity(), 0..16),
    ) {
        let logger = Logger::new(MemorySink::new().into(), "r", Flags::empty(), original, "--");
        for level in &changes {
            logger.set_level(*level);
            prop_assert_eq!(logger.level(), *level);
        }
        logger.reset_level();
        prop_assert_eq!(logger.level(), original);
        logger.reset_level();
        prop_assert_eq!(logger.level(), original);
    }

    /// **Property:** flag updates are bitwise OR and AND-NOT.
    #[test]
    fn test_flag_algebra(start in flags(), set in flags(), unset in flags()) {
        let logger = Logger::new(MemorySink::new().into(), "f", start, Severity::Debug, "--");

        logger.set_flags(set);
        prop_assert_eq!(logger.flags().bits(), start.bits() | set.bits());

        logger.unset_flags(unset);
        prop_assert_eq!(logger.flags().bits(), (start.bits() | set.bits()) & !unset.bits());
    }
}
