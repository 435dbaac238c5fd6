//! Position classifiers tried by the scanner in priority order.
//!
//! Each classifier is a pure function from a line (as characters) and a
//! start position to an end position. An end equal to the start means no
//! match; an end past the start means the lexeme is `[start, end)`.

use lazy_static::lazy_static;
use regex::Regex;

use super::tokens::{OPERATORS, PUNCTUATION};

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap();
}

/// Maximal-munch identifier or keyword: a letter or underscore followed by
/// any run of letters, digits, and underscores.
pub fn identifier(chars: &[char], start: usize) -> usize {
    let remainder: String = chars[start..].iter().collect();

    match IDENTIFIER.find(&remainder) {
        // The pattern only matches ASCII, so byte length == char count.
        Some(found) => start + found.end(),
        None => start,
    }
}

/// Numeric literal: optional sign, digits with at most one decimal point,
/// optional exponent.
///
/// A second decimal point stops consumption and returns the prefix already
/// validated, so `1.2.3` yields `1.2` and the scanner resumes at the second
/// dot. The exponent marker is only consumed when a digit or explicit sign
/// follows it, and a bare sign with nothing after it is not a number.
pub fn number(chars: &[char], start: usize) -> usize {
    let mut i = start;
    let mut has_decimal = false;

    let signed = matches!(chars.get(i), Some(&'+') | Some(&'-'));
    if signed {
        i += 1;
    }

    while let Some(&c) = chars.get(i) {
        if c == '.' {
            if has_decimal {
                break;
            }
            has_decimal = true;
        } else if !c.is_ascii_digit() {
            break;
        }
        i += 1;
    }

    if matches!(chars.get(i), Some(&'E') | Some(&'e'))
        && matches!(chars.get(i + 1), Some(c) if c.is_ascii_digit() || *c == '+' || *c == '-')
    {
        i += 2;
        while matches!(chars.get(i), Some(c) if c.is_ascii_digit()) {
            i += 1;
        }
    }

    if signed && i == start + 1 {
        return start;
    }

    i
}

/// Operator: first entry of [`OPERATORS`] whose full text matches at the
/// cursor wins. List order is the priority order, not longest-match, so an
/// earlier entry can shadow a longer one sharing its prefix.
pub fn operator(chars: &[char], start: usize) -> usize {
    for op in OPERATORS {
        let len = op.chars().count();
        if start + len <= chars.len() && op.chars().eq(chars[start..start + len].iter().copied()) {
            return start + len;
        }
    }

    start
}

/// Single-character punctuation.
pub fn punctuation(chars: &[char], start: usize) -> usize {
    match chars.get(start) {
        Some(c) if PUNCTUATION.contains(c) => start + 1,
        _ => start,
    }
}
