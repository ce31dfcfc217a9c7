use crate::error::EncodeError;
use brakeport_types::Violation;
use std::io::Write;

/// Layout of the emitted JSON.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputStyle {
    /// One-line JSON followed by a trailing newline. Matches the historical
    /// emitter byte-for-byte.
    #[default]
    Compact,
    /// Indented JSON for human consumption.
    Pretty,
}

/// Encode violations as a JSON array onto a byte stream, preserving order.
///
/// An empty input encodes as `[]`. Output is plain UTF-8, no BOM, with a
/// trailing newline. Only the write side can fail here; the data itself was
/// built from validated types.
pub fn encode_report(
    violations: &[Violation],
    mut output: impl Write,
    style: OutputStyle,
) -> Result<(), EncodeError> {
    let mut data = match style {
        OutputStyle::Compact => serde_json::to_vec(violations)?,
        OutputStyle::Pretty => serde_json::to_vec_pretty(violations)?,
    };
    data.push(b'\n');
    output.write_all(&data)?;
    Ok(())
}
