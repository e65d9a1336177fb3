use crate::diff::ComparisonReport;

/// Serialize a report to a compact JSON string.
pub fn serialize_report(report: &ComparisonReport) -> serde_json::Result<String> {
    serde_json::to_string(report)
}

/// Serialize a report to indented JSON for files and terminals.
pub fn serialize_report_pretty(report: &ComparisonReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
