//! Stable DTOs used across the brakeport workspace.
//!
//! This crate is intentionally boring:
//! - data types for the decoded scanner report
//! - data types for the emitted quality report
//! - the scanner path newtype with its two views (reported vs normalized)

#![forbid(unsafe_code)]

pub mod path;
pub mod quality;
pub mod scan;

pub use path::ScanPath;
pub use quality::{Lines, Location, Severity, Violation};
pub use scan::{ScanReport, ScanWarning};
