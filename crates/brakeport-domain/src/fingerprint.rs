use sha2::{Digest, Sha256};

/// Compute the stable SHA-256 fingerprint for a scanner warning.
///
/// Identity fields, joined with `:`:
/// - file (as reported by the scanner, before `./` stripping)
/// - line (decimal)
/// - warning_type
/// - message
/// - code (appended only when non-empty)
///
/// The digest is hex-encoded lowercase, 64 characters. Downstream tooling
/// re-derives and compares these, so the canonical string must not change.
pub fn fingerprint_for_warning(
    file: &str,
    line: i64,
    warning_type: &str,
    message: &str,
    code: &str,
) -> String {
    let mut canonical = format!("{file}:{line}:{warning_type}:{message}");
    if !code.is_empty() {
        canonical.push(':');
        canonical.push_str(code);
    }

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    hex::encode(hasher.finalize())
}
