use thiserror::Error;

use crate::engine::rules::allowed_verdicts;
use crate::model::result::CurationResult;

/// A user-correctable rejection of a proposed write, keyed to the field it
/// concerns. The write must be aborted entirely; no partial state persists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

/// True when the verdict is unset or compatible with the current flag
/// selection. An undecided result is always valid.
pub fn verdict_is_valid(result: &CurationResult) -> bool {
    match result.verdict {
        None => true,
        Some(verdict) => allowed_verdicts(&result.flags).contains(&verdict),
    }
}

pub fn validate_result_verdict(result: &CurationResult) -> Result<(), ValidationError> {
    if verdict_is_valid(result) {
        return Ok(());
    }

    let choices = allowed_verdicts(&result.flags)
        .iter()
        .map(|v| format!("{} ({})", v.name(), v.rank()))
        .collect::<Vec<_>>()
        .join(", ");
    Err(ValidationError {
        field: "verdict",
        message: format!(
            "Verdict is not compatible with the current selection of flags. \
             Compatible choices are {choices}."
        ),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/engine/validate.rs"]
mod tests;
