use std::io::{self, Write};

use crate::{errors::errors::ScanError, lexer::tokens::Token};

/// Writes one `<KIND, lexeme>` record per token.
pub struct TokenSink<W: Write> {
    out: W,
}

impl<W: Write> TokenSink<W> {
    pub fn new(out: W) -> TokenSink<W> {
        TokenSink { out }
    }

    pub fn write(&mut self, token: &Token) -> io::Result<()> {
        writeln!(self.out, "{}", token)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Writes one `Error: <char> at line <n>` record per unrecognised character.
pub struct ErrorSink<W: Write> {
    out: W,
}

impl<W: Write> ErrorSink<W> {
    pub fn new(out: W) -> ErrorSink<W> {
        ErrorSink { out }
    }

    pub fn write(&mut self, error: &ScanError) -> io::Result<()> {
        writeln!(self.out, "Error: {} at line {}", error.character, error.line)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
