//! The convert use case: decode, convert, encode in one pass.

use crate::decode::decode_report;
use crate::encode::{OutputStyle, encode_report};
use crate::error::ConvertError;
use brakeport_domain::convert_warnings;
use std::io::{Read, Write};

/// Counters describing one convert run.
///
/// Kept off the output stream: the emitted document is the report itself,
/// and a successful run must leave the error stream untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Warnings present in the decoded report.
    pub warnings_decoded: usize,
    /// Violations that survived filtering and were written out.
    pub violations_emitted: usize,
}

/// Run the whole pipeline: decode the scanner report from `input`, convert
/// its warnings, and encode the quality report onto `output`.
pub fn run_convert(
    input: impl Read,
    output: impl Write,
    style: OutputStyle,
) -> Result<ConvertSummary, ConvertError> {
    let report = decode_report(input)?;
    let violations = convert_warnings(&report.warnings);

    let summary = ConvertSummary {
        warnings_decoded: report.warnings.len(),
        violations_emitted: violations.len(),
    };

    encode_report(&violations, output, style)?;
    Ok(summary)
}
