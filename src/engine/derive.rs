use crate::model::flags::{Flag, FlagState};

/// Derived flags and their source flags. A derived flag's stored value is
/// always the OR of its sources at save time; it is never set directly.
pub fn derived_flags() -> &'static [(Flag, &'static [Flag])] {
    &[(
        Flag::DubiousReadAlignment,
        &[
            Flag::MismappedRead,
            Flag::ComplexEvent,
            Flag::Stutter,
            Flag::RepetitiveSequence,
            Flag::DubiousOther,
        ],
    )]
}

/// Overwrite each derived flag with the OR of its sources. Idempotent; run
/// before validation on every save.
pub fn apply_derivations(flags: &mut FlagState) {
    for (derived, sources) in derived_flags() {
        let value = sources.iter().any(|source| flags.get(*source));
        flags.set(*derived, value);
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/engine/derive.rs"]
mod tests;
