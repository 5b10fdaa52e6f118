use super::*;

use crate::model::flags::{Flag, FlagState, flag_order};
use crate::model::verdicts::{Verdict, verdict_order};

/// Guards above the catch-all, in priority order.
fn restricted_flags() -> &'static [Flag] {
    &[
        Flag::FlowChartOverridden,
        Flag::NoReadData,
        Flag::ReferenceError,
        Flag::MappingError,
        Flag::GenotypingError,
        Flag::InconsequentialTranscript,
        Flag::Rescue,
    ]
}

#[test]
fn test_no_flags_allows_lof_only() {
    let flags = FlagState::new();
    assert_eq!(allowed_verdicts(&flags), [Verdict::Lof]);
}

#[test]
fn test_flow_chart_override_allows_all_verdicts() {
    for flag in flag_order() {
        let mut flags = FlagState::new();
        flags.set(Flag::FlowChartOverridden, true);
        flags.set(*flag, true);
        assert_eq!(allowed_verdicts(&flags), verdict_order(), "{:?}", flag);
    }
}

#[test]
fn test_no_read_data_allows_uncertain_only() {
    for flag in flag_order() {
        if *flag == Flag::FlowChartOverridden {
            continue;
        }
        let mut flags = FlagState::new();
        flags.set(Flag::NoReadData, true);
        flags.set(*flag, true);
        assert_eq!(allowed_verdicts(&flags), [Verdict::Uncertain], "{:?}", flag);
    }
}

#[test]
fn test_reference_error_allows_not_lof_only() {
    for flag in flag_order() {
        if matches!(flag, Flag::FlowChartOverridden | Flag::NoReadData) {
            continue;
        }
        let mut flags = FlagState::new();
        flags.set(Flag::ReferenceError, true);
        flags.set(*flag, true);
        assert_eq!(allowed_verdicts(&flags), [Verdict::NotLof], "{:?}", flag);
    }
}

#[test]
fn test_error_and_rescue_flags_exclude_lof_calls() {
    let group = [
        Flag::MappingError,
        Flag::GenotypingError,
        Flag::InconsequentialTranscript,
        Flag::Rescue,
    ];
    // Every nonempty subset of the group behaves the same.
    for mask in 1u32..16 {
        let mut flags = FlagState::new();
        for (i, flag) in group.iter().enumerate() {
            if mask & (1 << i) != 0 {
                flags.set(*flag, true);
            }
        }
        assert_eq!(
            allowed_verdicts(&flags),
            [Verdict::Uncertain, Verdict::LikelyNotLof, Verdict::NotLof],
            "mask {mask}"
        );
    }
}

#[test]
fn test_any_other_flag_hits_the_catch_all() {
    for flag in flag_order() {
        if restricted_flags().contains(flag) {
            continue;
        }
        let mut flags = FlagState::new();
        flags.set(*flag, true);
        assert_eq!(
            allowed_verdicts(&flags),
            [Verdict::Lof, Verdict::LikelyLof, Verdict::Uncertain],
            "{:?}",
            flag
        );
    }
}

#[test]
fn test_first_matching_guard_wins() {
    let mut flags = FlagState::new();
    flags.set(Flag::NoReadData, true);
    flags.set(Flag::ReferenceError, true);
    flags.set(Flag::Rescue, true);
    assert_eq!(allowed_verdicts(&flags), [Verdict::Uncertain]);

    flags.set(Flag::FlowChartOverridden, true);
    assert_eq!(allowed_verdicts(&flags), verdict_order());
}

#[test]
fn test_derived_dubious_read_alignment_is_not_a_trigger() {
    // The composite alignment flag restricts nothing on its own; it lands in
    // the catch-all branch.
    let mut flags = FlagState::new();
    flags.set(Flag::DubiousReadAlignment, true);
    flags.set(Flag::MismappedRead, true);
    assert_eq!(
        allowed_verdicts(&flags),
        [Verdict::Lof, Verdict::LikelyLof, Verdict::Uncertain]
    );
}

#[test]
fn test_allowed_verdicts_are_rank_ordered() {
    for flag in flag_order() {
        let mut flags = FlagState::new();
        flags.set(*flag, true);
        let allowed = allowed_verdicts(&flags);
        assert!(!allowed.is_empty());
        for pair in allowed.windows(2) {
            assert!(pair[0].rank() < pair[1].rank(), "{:?}", flag);
        }
    }
}
