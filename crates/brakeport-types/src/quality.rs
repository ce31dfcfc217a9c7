use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Severity is intentionally small: it maps cleanly to dashboard signals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Major,
    Minor,
    Info,
}

/// Line range of a violation. Quality consumers only use the start line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Lines {
    pub begin: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Location {
    pub path: String,
    pub lines: Lines,
}

/// One converted warning in the emitted quality report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Violation {
    pub description: String,
    pub check_name: String,
    /// Stable identifier intended for dedup and trending: a SHA-256 hex
    /// digest over the identity fields of the source warning.
    pub fingerprint: String,
    pub severity: Severity,
    pub location: Location,
}
