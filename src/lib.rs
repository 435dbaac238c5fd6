#![allow(clippy::module_inception)]

//! Lexical analyzer for a small C-like language.
//!
//! Source text is consumed one line at a time and partitioned into
//! keywords, identifiers, numeric literals, operators, and punctuation.
//! Every identifier occurrence is recorded in a hashed symbol table;
//! characters no classifier accepts become error records and scanning
//! continues at the next character.

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod output;
pub mod symbols;

pub use errors::errors::{Error, ScanError};
pub use lexer::scanner::{analyze, scan};
pub use lexer::tokens::{Token, TokenKind};
pub use symbols::table::{SymbolTable, MAX};
