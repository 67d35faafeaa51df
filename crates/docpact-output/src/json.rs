use crate::OutputFormatter;
use docpact_enforce::types::Report;

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &Report) -> String {
        serde_json::to_string_pretty(report).unwrap_or_default()
    }
}
