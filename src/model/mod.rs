pub mod custom;
pub mod flags;
pub mod result;
pub mod verdicts;
