//! Error types for the analyzer.
//!
//! The only error the scanning core produces is the unrecognised-character
//! record; it is data in the scan output rather than a returned `Err`.
//! Driver I/O failures get their own enum and propagate normally.

pub mod errors;
