use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::flags::FlagState;
use crate::model::verdicts::Verdict;

/// The record of flags, notes, and verdict for one (curator, variant)
/// assignment. Created with every flag unchecked and no verdict.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CurationResult {
    #[serde(default)]
    pub flags: FlagState,
    /// Checked state per custom-flag key. Keys must exist in the project's
    /// registry; the save pipeline rejects unknown ones.
    #[serde(default)]
    pub custom_flags: BTreeMap<String, bool>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub curator_comments: Option<String>,
    #[serde(default)]
    pub should_revisit: bool,
    #[serde(default)]
    pub verdict: Option<Verdict>,
}

impl CurationResult {
    pub fn new() -> Self {
        CurationResult::default()
    }
}

/// Wire form of one result in import/export files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub curator: String,
    pub variant_id: String,
    /// Set when a project owner edited another curator's result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
    #[serde(flatten)]
    pub result: CurationResult,
}

/// Variant ids look like `1-55516888-G-GA` or `X:123:A:T`; chromosome, then
/// position, then reference and alternate bases, separated by `-` or `:`.
pub fn is_valid_variant_id(id: &str) -> bool {
    let fields = id.split(['-', ':']).collect::<Vec<_>>();
    if fields.len() != 4 {
        return false;
    }
    let chrom_ok = matches!(fields[0], "X" | "Y")
        || (!fields[0].is_empty() && fields[0].bytes().all(|b| b.is_ascii_digit()));
    let pos_ok = !fields[1].is_empty() && fields[1].bytes().all(|b| b.is_ascii_digit());
    let bases_ok = |s: &str| {
        !s.is_empty() && s.bytes().all(|b| matches!(b, b'A' | b'C' | b'G' | b'T'))
    };
    chrom_ok && pos_ok && bases_ok(fields[2]) && bases_ok(fields[3])
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/result.rs"]
mod tests;
