//! Pure conversion of scanner warnings into quality violations (no IO).
//!
//! Input: decoded warnings from the scanner report.
//! Output: ordered violations ready for encoding.

#![forbid(unsafe_code)]

pub mod convert;
pub mod fingerprint;
pub mod severity;

pub use convert::convert_warnings;
pub use fingerprint::fingerprint_for_warning;
pub use severity::severity_for_confidence;

#[cfg(test)]
mod proptest;
