//! Token and error record sinks.
//!
//! The sinks are generic over `io::Write` and injected by the driver, so
//! tests capture the streams in memory while the binary points them at
//! `Token.txt` and `Error.txt`.

pub mod sinks;
