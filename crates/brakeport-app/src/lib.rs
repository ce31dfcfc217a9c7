//! Use case orchestration for brakeport.
//!
//! This crate provides the application layer: decode the scanner report,
//! convert it, encode the result. It is intentionally thin and delegates the
//! conversion itself to `brakeport-domain`.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod convert;
mod decode;
mod encode;
mod error;

pub use convert::{ConvertSummary, run_convert};
pub use decode::decode_report;
pub use encode::{OutputStyle, encode_report};
pub use error::{ConvertError, DecodeError, EncodeError};
