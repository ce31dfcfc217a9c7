use crate::ScanPath;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// A single warning as reported by the scanner.
///
/// Every field is optional on the wire and decodes to its zero value when
/// absent, so downstream filtering can treat "missing" and "empty" uniformly.
/// Unrecognized fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScanWarning {
    #[serde(default)]
    pub warning_type: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub file: ScanPath,
    /// 1-based line number; `0` means the scanner did not report one.
    #[serde(default)]
    pub line: i64,
    /// Free-text confidence label, matched case-insensitively downstream.
    #[serde(default)]
    pub confidence: String,
    /// Source snippet associated with the warning, if the scanner captured one.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub code: String,
}

/// The decoded scanner report: an ordered list of warnings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScanReport {
    /// Absent and explicitly-null `warnings` both decode to an empty list.
    #[serde(default, deserialize_with = "warnings_or_empty")]
    pub warnings: Vec<ScanWarning>,
}

fn warnings_or_empty<'de, D>(deserializer: D) -> Result<Vec<ScanWarning>, D::Error>
where
    D: Deserializer<'de>,
{
    let warnings = Option::<Vec<ScanWarning>>::deserialize(deserializer)?;
    Ok(warnings.unwrap_or_default())
}
