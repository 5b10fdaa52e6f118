use serde::{Deserialize, Serialize};

/// Final classification of a variant's loss-of-function status, ordered from
/// strongest evidence for LoF to strongest evidence against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Lof,
    LikelyLof,
    Uncertain,
    LikelyNotLof,
    NotLof,
}

pub fn verdict_order() -> &'static [Verdict] {
    &[
        Verdict::Lof,
        Verdict::LikelyLof,
        Verdict::Uncertain,
        Verdict::LikelyNotLof,
        Verdict::NotLof,
    ]
}

impl Verdict {
    pub fn name(self) -> &'static str {
        match self {
            Verdict::Lof => "lof",
            Verdict::LikelyLof => "likely_lof",
            Verdict::Uncertain => "uncertain",
            Verdict::LikelyNotLof => "likely_not_lof",
            Verdict::NotLof => "not_lof",
        }
    }

    /// 1-based rank, used only for human-readable messages.
    pub fn rank(self) -> u8 {
        match self {
            Verdict::Lof => 1,
            Verdict::LikelyLof => 2,
            Verdict::Uncertain => 3,
            Verdict::LikelyNotLof => 4,
            Verdict::NotLof => 5,
        }
    }

    pub fn from_name(name: &str) -> Option<Verdict> {
        verdict_order().iter().copied().find(|v| v.name() == name)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/verdicts.rs"]
mod tests;
