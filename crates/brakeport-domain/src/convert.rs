use crate::fingerprint::fingerprint_for_warning;
use crate::severity::severity_for_confidence;
use brakeport_types::{Lines, Location, ScanWarning, Violation};

/// Convert scanner warnings into quality violations.
///
/// Total function: warnings missing any of file, warning_type, or message,
/// or with an unset (`0`) line, are dropped without error. Relative order of
/// the survivors is preserved.
///
/// The fingerprint hashes the path as reported; `location.path` carries the
/// normalized form. The two must not be conflated.
pub fn convert_warnings(warnings: &[ScanWarning]) -> Vec<Violation> {
    let mut violations = Vec::with_capacity(warnings.len());

    for warning in warnings {
        if warning.file.is_empty()
            || warning.line == 0
            || warning.warning_type.is_empty()
            || warning.message.is_empty()
        {
            continue;
        }

        violations.push(Violation {
            description: warning.message.clone(),
            check_name: warning.warning_type.clone(),
            fingerprint: fingerprint_for_warning(
                warning.file.as_reported(),
                warning.line,
                &warning.warning_type,
                &warning.message,
                &warning.code,
            ),
            severity: severity_for_confidence(&warning.confidence),
            location: Location {
                path: warning.file.normalized().to_string(),
                lines: Lines {
                    begin: warning.line,
                },
            },
        });
    }

    violations
}
