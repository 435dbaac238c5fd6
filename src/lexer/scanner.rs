use crate::{errors::errors::ScanError, symbols::table::SymbolTable, MK_TOKEN};

use super::{
    classifiers,
    tokens::{Token, TokenKind, KEYWORDS},
};

/// Scans one line of source text into tokens and error records, recording
/// every identifier occurrence in the symbol table.
///
/// Classification walks a cursor across the line: whitespace is skipped,
/// then the classifiers are tried in fixed priority order (identifier,
/// number, operator, punctuation) and the first match wins. A character no
/// classifier accepts produces one error record and the cursor advances by
/// one, so scanning always reaches the end of the line.
pub fn scan(line: &str, line_no: u32, table: &mut SymbolTable) -> (Vec<Token>, Vec<ScanError>) {
    let chars: Vec<char> = line.chars().collect();
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        if chars[pos].is_whitespace() {
            pos += 1;
            continue;
        }

        let end = classifiers::identifier(&chars, pos);
        if end > pos {
            let lexeme: String = chars[pos..end].iter().collect();
            if KEYWORDS.contains(lexeme.as_str()) {
                tokens.push(MK_TOKEN!(TokenKind::Keyword, lexeme, line_no));
            } else {
                table.insert(&lexeme, "local", "identifier", line_no);
                tokens.push(MK_TOKEN!(TokenKind::Identifier, lexeme, line_no));
            }
            pos = end;
            continue;
        }

        let end = classifiers::number(&chars, pos);
        if end > pos {
            let lexeme: String = chars[pos..end].iter().collect();
            tokens.push(MK_TOKEN!(TokenKind::Number, lexeme, line_no));
            pos = end;
            continue;
        }

        let end = classifiers::operator(&chars, pos);
        if end > pos {
            let lexeme: String = chars[pos..end].iter().collect();
            tokens.push(MK_TOKEN!(TokenKind::Operator, lexeme, line_no));
            pos = end;
            continue;
        }

        let end = classifiers::punctuation(&chars, pos);
        if end > pos {
            tokens.push(MK_TOKEN!(TokenKind::Punctuation, chars[pos].to_string(), line_no));
            pos = end;
            continue;
        }

        errors.push(ScanError {
            character: chars[pos],
            line: line_no,
        });
        pos += 1;
    }

    (tokens, errors)
}

/// Scans a whole source text, numbering lines from 1.
pub fn analyze(source: &str, table: &mut SymbolTable) -> (Vec<Token>, Vec<ScanError>) {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    for (index, line) in source.lines().enumerate() {
        let (mut line_tokens, mut line_errors) = scan(line, index as u32 + 1, table);
        tokens.append(&mut line_tokens);
        errors.append(&mut line_errors);
    }

    (tokens, errors)
}
