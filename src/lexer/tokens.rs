use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

lazy_static! {
    pub static ref KEYWORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        for keyword in [
            "loop", "agar", "magar", "asm", "else", "new", "this", "auto", "enum",
            "operator", "throw", "bool", "explicit", "private", "true", "break",
            "export", "protected", "try", "case", "extern", "public", "typedef",
            "catch", "false", "register", "typeid", "char", "float", "typename",
            "class", "for", "return", "union", "const", "friend", "short", "unsigned",
            "goto", "signed", "using", "continue", "if", "sizeof", "virtual", "default",
            "inline", "static", "void", "delete", "int", "volatile", "do", "long",
            "struct", "double", "mutable", "switch", "while", "namespace",
        ] {
            set.insert(keyword);
        }
        set
    };
}

// Matching priority order. Earlier entries win even when a later entry
// shares a prefix and would match more characters.
pub const OPERATORS: [&str; 20] = [
    "!=", "<>", "=:=", "==", "*", "+", "/", "-", ">>", "<<", "++", "=+",
    "&&", "||", "=>", "=<", "%", ":", "::", "--",
];

pub const PUNCTUATION: [char; 10] = ['[', '{', '<', '>', '}', ']', '(', ')', ';', ','];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Number,
    Operator,
    Punctuation,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Keyword => write!(f, "KEYWORD"),
            TokenKind::Identifier => write!(f, "IDENTIFIER"),
            TokenKind::Number => write!(f, "NUMBER"),
            TokenKind::Operator => write!(f, "OPERATOR"),
            TokenKind::Punctuation => write!(f, "PUNCTUATION"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}, {}>", self.kind, self.lexeme)
    }
}

impl Token {
    pub fn debug(&self) {
        let label = match self.kind {
            TokenKind::Keyword => "Keyword",
            TokenKind::Identifier => "Identifier",
            TokenKind::Number => "Number",
            TokenKind::Operator => "Operator",
            TokenKind::Punctuation => "Punctuation",
        };
        println!("{}: {}", label, self.lexeme);
    }
}
