use brakeport_types::Severity;

/// Map a scanner confidence label to a quality severity.
///
/// Matching is case-insensitive. Unrecognized labels, including the empty
/// string, fall through to `Info`; downstream dashboards treat that bucket
/// as "present but unranked", so the default must stay stable.
pub fn severity_for_confidence(confidence: &str) -> Severity {
    match confidence.to_lowercase().as_str() {
        "high" => Severity::Critical,
        "medium" => Severity::Major,
        "weak" | "low" => Severity::Minor,
        _ => Severity::Info,
    }
}
