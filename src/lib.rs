pub mod engine;
pub mod model;
pub mod report;

pub use engine::derive::{apply_derivations, derived_flags};
pub use engine::pipeline::{
    ImportError, PipelineError, run_import, run_save_pipeline, sync_custom_flags,
};
pub use engine::rules::allowed_verdicts;
pub use engine::validate::{ValidationError, validate_result_verdict, verdict_is_valid};
pub use model::custom::{CustomFlag, CustomFlagRegistry, RegistryError};
pub use model::flags::{Flag, FlagCategory, FlagState, flag_order};
pub use model::result::{CurationResult, ResultRecord};
pub use model::verdicts::{Verdict, verdict_order};
