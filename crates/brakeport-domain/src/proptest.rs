//! Property-based tests for the conversion core.
//!
//! These verify invariants around:
//! - Fingerprint shape and determinism
//! - Severity mapping totality and case-insensitivity
//! - Filtering and order preservation in conversion

use crate::convert::convert_warnings;
use crate::fingerprint::fingerprint_for_warning;
use crate::severity::severity_for_confidence;
use brakeport_types::{ScanPath, ScanWarning};
use proptest::prelude::*;

/// Strategy for scanner-ish path strings, with and without the `./` prefix.
fn arb_path() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[a-z][a-z0-9_/]{0,30}\\.rb").unwrap(),
        prop::string::string_regex("\\./[a-z][a-z0-9_/]{0,30}\\.rb").unwrap(),
    ]
}

/// Strategy for confidence labels: known ones in mixed case, plus noise.
fn arb_confidence() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("High".to_string()),
        Just("medium".to_string()),
        Just("WEAK".to_string()),
        Just("Low".to_string()),
        Just(String::new()),
        prop::string::string_regex("[A-Za-z]{0,12}").unwrap(),
    ]
}

fn arb_warning() -> impl Strategy<Value = ScanWarning> {
    (
        prop::string::string_regex("[A-Za-z ]{0,20}").unwrap(),
        prop::string::string_regex("[A-Za-z0-9 .,]{0,40}").unwrap(),
        prop_oneof![Just(String::new()), arb_path()],
        -3i64..1000,
        arb_confidence(),
        prop::string::string_regex("[A-Za-z0-9().]{0,20}").unwrap(),
    )
        .prop_map(|(warning_type, message, file, line, confidence, code)| ScanWarning {
            warning_type,
            message,
            file: ScanPath::new(file),
            line,
            confidence,
            code,
        })
}

fn is_retained(warning: &ScanWarning) -> bool {
    !warning.file.is_empty()
        && warning.line != 0
        && !warning.warning_type.is_empty()
        && !warning.message.is_empty()
}

proptest! {
    #[test]
    fn fingerprint_is_always_64_lowercase_hex(
        file in ".*",
        line in any::<i64>(),
        warning_type in ".*",
        message in ".*",
        code in ".*",
    ) {
        let fingerprint = fingerprint_for_warning(&file, line, &warning_type, &message, &code);
        prop_assert_eq!(fingerprint.len(), 64);
        prop_assert!(fingerprint
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn fingerprint_is_deterministic(
        file in ".*",
        line in any::<i64>(),
        warning_type in ".*",
        message in ".*",
        code in ".*",
    ) {
        let a = fingerprint_for_warning(&file, line, &warning_type, &message, &code);
        let b = fingerprint_for_warning(&file, line, &warning_type, &message, &code);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn severity_is_case_insensitive_for_ascii_labels(confidence in "[A-Za-z]{0,12}") {
        let lower = severity_for_confidence(&confidence.to_lowercase());
        let upper = severity_for_confidence(&confidence.to_uppercase());
        let mixed = severity_for_confidence(&confidence);
        prop_assert_eq!(lower, mixed);
        prop_assert_eq!(upper, mixed);
    }

    #[test]
    fn conversion_retains_exactly_the_complete_warnings_in_order(
        warnings in prop::collection::vec(arb_warning(), 0..16)
    ) {
        let violations = convert_warnings(&warnings);

        let expected: Vec<&ScanWarning> =
            warnings.iter().filter(|w| is_retained(w)).collect();

        prop_assert_eq!(violations.len(), expected.len());
        for (violation, warning) in violations.iter().zip(expected) {
            prop_assert_eq!(&violation.description, &warning.message);
            prop_assert_eq!(&violation.check_name, &warning.warning_type);
            prop_assert_eq!(violation.location.lines.begin, warning.line);
            prop_assert_eq!(violation.location.path.as_str(), warning.file.normalized());
        }
    }

    #[test]
    fn conversion_never_fabricates_violations(
        warnings in prop::collection::vec(arb_warning(), 0..16)
    ) {
        prop_assert!(convert_warnings(&warnings).len() <= warnings.len());
    }
}
