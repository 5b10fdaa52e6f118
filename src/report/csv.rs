use crate::model::custom::CustomFlagRegistry;
use crate::model::flags::flag_order;
use crate::model::result::ResultRecord;

/// Render already-validated results as CSV. Flag columns follow
/// `flag_order()`; custom-flag columns follow registry order.
pub fn render_results_csv(records: &[ResultRecord], registry: &CustomFlagRegistry) -> String {
    let mut out = String::new();

    let mut header = vec![
        "Variant ID".to_string(),
        "Curator".to_string(),
        "Editor".to_string(),
        "Notes".to_string(),
        "Curator Comments".to_string(),
        "Should Revisit".to_string(),
        "Verdict".to_string(),
    ];
    for flag in flag_order() {
        header.push(flag.label().to_string());
    }
    for flag in registry.all() {
        header.push(flag.label.clone());
    }
    push_row(&mut out, &header);

    for record in records {
        let result = &record.result;
        let mut row = vec![
            record.variant_id.clone(),
            record.curator.clone(),
            record.editor.clone().unwrap_or_default(),
            result.notes.clone().unwrap_or_default(),
            result.curator_comments.clone().unwrap_or_default(),
            format_bool(result.should_revisit),
            result.verdict.map(|v| v.name().to_string()).unwrap_or_default(),
        ];
        for flag in flag_order() {
            row.push(format_bool(result.flags.get(*flag)));
        }
        for flag in registry.all() {
            let checked = result.custom_flags.get(&flag.key).copied().unwrap_or(false);
            row.push(format_bool(checked));
        }
        push_row(&mut out, &row);
    }

    out
}

fn format_bool(value: bool) -> String {
    if value { "true" } else { "false" }.to_string()
}

fn push_row(out: &mut String, fields: &[String]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&escape_field(field));
    }
    out.push('\n');
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/csv.rs"]
mod tests;
