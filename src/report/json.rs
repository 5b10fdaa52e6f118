use crate::model::result::ResultRecord;

/// Render already-validated results as a JSON array, matching the shape the
/// import path accepts.
pub fn render_results_json(records: &[ResultRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
