use crate::model::flags::{Flag, FlagState};
use crate::model::verdicts::{Verdict, verdict_order};

/// The verdict decision table. Guards are evaluated top to bottom and the
/// first match wins; the returned slice is ordered by rank.
///
/// Only built-in flags are consulted. Custom flags never restrict verdicts,
/// including through the "no flags checked" guard.
pub fn allowed_verdicts(flags: &FlagState) -> &'static [Verdict] {
    if !flags.any_checked() {
        // An unflagged variant defaults to the strongest pro-LoF call.
        return &[Verdict::Lof];
    }

    if flags.get(Flag::FlowChartOverridden) {
        return verdict_order();
    }

    if flags.get(Flag::NoReadData) {
        return &[Verdict::Uncertain];
    }

    if flags.get(Flag::ReferenceError) {
        return &[Verdict::NotLof];
    }

    if flags.get(Flag::MappingError)
        || flags.get(Flag::GenotypingError)
        || flags.get(Flag::InconsequentialTranscript)
        || flags.get(Flag::Rescue)
    {
        return &[Verdict::Uncertain, Verdict::LikelyNotLof, Verdict::NotLof];
    }

    &[Verdict::Lof, Verdict::LikelyLof, Verdict::Uncertain]
}

#[cfg(test)]
#[path = "../../tests/src_inline/engine/rules.rs"]
mod tests;
