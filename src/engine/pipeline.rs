use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;
use tracing::info;

use crate::engine::derive::apply_derivations;
use crate::engine::validate::{ValidationError, validate_result_verdict};
use crate::model::custom::CustomFlagRegistry;
use crate::model::result::{CurationResult, ResultRecord, is_valid_variant_id};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// The result references a custom-flag key the registry does not define.
    /// Checked before validation so a referenced flag is never silently
    /// dropped.
    #[error("unknown custom flag: {0}")]
    UnknownCustomFlag(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("Duplicate results for {0}")]
    DuplicateResults(String),
    #[error("record {index} ({curator}, {variant_id}): invalid variant id")]
    InvalidVariantId {
        index: usize,
        curator: String,
        variant_id: String,
    },
    #[error("record {index} ({curator}, {variant_id}): {source}")]
    Record {
        index: usize,
        curator: String,
        variant_id: String,
        #[source]
        source: PipelineError,
    },
}

/// Check every referenced custom-flag key against the registry, then fill in
/// unchecked entries for registry flags the result does not mention yet.
pub fn sync_custom_flags(
    result: &mut CurationResult,
    registry: &CustomFlagRegistry,
) -> Result<(), PipelineError> {
    for key in result.custom_flags.keys() {
        if !registry.contains_key(key) {
            return Err(PipelineError::UnknownCustomFlag(key.clone()));
        }
    }
    for flag in registry.all() {
        result.custom_flags.entry(flag.key.clone()).or_insert(false);
    }
    Ok(())
}

/// The write path for one curation result: derive composite flags, sync the
/// custom-flag bookkeeping, validate the verdict. Returns the normalized
/// result; on error the input is untouched and nothing may be persisted.
pub fn run_save_pipeline(
    result: &CurationResult,
    registry: &CustomFlagRegistry,
) -> Result<CurationResult, PipelineError> {
    let mut saved = result.clone();
    apply_derivations(&mut saved.flags);
    sync_custom_flags(&mut saved, registry)?;
    validate_result_verdict(&saved)?;
    Ok(saved)
}

/// Bulk import with all-or-nothing semantics. Duplicate (curator, variant)
/// pairs are rejected before any record is processed; the first failing
/// record aborts the whole batch.
pub fn run_import(
    records: &[ResultRecord],
    registry: &CustomFlagRegistry,
) -> Result<Vec<ResultRecord>, ImportError> {
    reject_duplicates(records)?;

    let mut imported = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        if !is_valid_variant_id(&record.variant_id) {
            return Err(ImportError::InvalidVariantId {
                index,
                curator: record.curator.clone(),
                variant_id: record.variant_id.clone(),
            });
        }
        let result =
            run_save_pipeline(&record.result, registry).map_err(|source| ImportError::Record {
                index,
                curator: record.curator.clone(),
                variant_id: record.variant_id.clone(),
                source,
            })?;
        imported.push(ResultRecord {
            curator: record.curator.clone(),
            variant_id: record.variant_id.clone(),
            editor: record.editor.clone(),
            result,
        });
    }

    info!(records = imported.len(), "validated imported results");
    Ok(imported)
}

fn reject_duplicates(records: &[ResultRecord]) -> Result<(), ImportError> {
    let mut seen = BTreeSet::new();
    let mut duplicates: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for record in records {
        if !seen.insert((record.curator.as_str(), record.variant_id.as_str())) {
            duplicates
                .entry(record.curator.as_str())
                .or_default()
                .push(record.variant_id.as_str());
        }
    }
    if duplicates.is_empty() {
        return Ok(());
    }

    let description = duplicates
        .iter()
        .map(|(curator, variants)| format!("{} ({})", curator, variants.join(", ")))
        .collect::<Vec<_>>()
        .join(", ");
    Err(ImportError::DuplicateResults(description))
}

#[cfg(test)]
#[path = "../../tests/src_inline/engine/pipeline.rs"]
mod tests;
