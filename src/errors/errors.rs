use thiserror::Error;

/// Record of a character no classifier accepted. Scanning never aborts on
/// one of these: the record is collected and the cursor moves on.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unrecognised character {character:?} at line {line}")]
pub struct ScanError {
    pub character: char,
    pub line: u32,
}

/// Driver-level failures. The scanning core itself has no fatal errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
