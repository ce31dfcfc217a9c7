use crate::error::DecodeError;
use brakeport_types::ScanReport;
use std::io::Read;

/// Decode a scanner report from a byte stream.
///
/// Reads the stream to completion as one JSON document. A missing or null
/// `warnings` field decodes to an empty list, so the returned report always
/// holds a well-formed sequence.
pub fn decode_report(input: impl Read) -> Result<ScanReport, DecodeError> {
    Ok(serde_json::from_reader(input)?)
}
