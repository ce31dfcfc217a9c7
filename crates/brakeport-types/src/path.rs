use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// File path exactly as the scanner reported it.
///
/// Scanners commonly prefix repo-relative paths with `./`. Consumers want the
/// bare form, while fingerprints must hash the reported form so identifiers
/// stay stable across runs. This newtype keeps both views available:
/// - [`ScanPath::as_reported`]: verbatim scanner value
/// - [`ScanPath::normalized`]: a single leading `./` stripped, nothing else
#[derive(
    Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct ScanPath(String);

impl ScanPath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_string())
    }

    /// The path verbatim, including any `./` prefix.
    pub fn as_reported(&self) -> &str {
        &self.0
    }

    /// The reported path with one leading `./` removed if present.
    ///
    /// Deliberately no other normalization: no absolute-path resolution,
    /// no repeated prefix stripping, no trailing-slash handling.
    pub fn normalized(&self) -> &str {
        self.0.strip_prefix("./").unwrap_or(&self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ScanPath {
    fn from(value: &str) -> Self {
        ScanPath::new(value)
    }
}

impl From<String> for ScanPath {
    fn from(value: String) -> Self {
        Self(value)
    }
}
