//! Lexical analysis module.
//!
//! This module contains the scanner that converts source lines into a
//! stream of tokens. It handles:
//!
//! - Classifier-based tokenization in a fixed priority order
//! - Recognition of keywords, identifiers, numbers, operators, and
//!   punctuation
//! - Symbol table registration of identifier occurrences
//! - Whitespace and unrecognised-character handling

pub mod classifiers;
pub mod scanner;
pub mod tokens;
