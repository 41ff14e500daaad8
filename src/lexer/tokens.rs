use lazy_static::lazy_static;
use regex::Regex;
use std::{collections::HashSet, fmt::Display};

pub const RESERVED_WORDS: [&str; 11] = [
    "int", "string", "array", "for", "if", "else", "while", "input", "print", "let", "return",
];

pub const OPERATORS: [&str; 11] = ["+", "-", "*", "/", "%", "=", "<", "<=", "==", "=>", ">"];

pub const SEPARATORS: [&str; 9] = ["(", ")", "[", "]", "{", "}", "?", ",", ";"];

/// Reference recorded for tokens that need no symbol table lookup.
pub const NO_REFERENCE: i64 = -1;

lazy_static! {
    pub static ref IDENTIFIER_REGEX: Regex = Regex::new("^[a-zA-Z][a-zA-Z0-9]*$").unwrap();
    pub static ref INTEGER_REGEX: Regex = Regex::new("^0$|^[+-]?[1-9][0-9]*$").unwrap();
    pub static ref STRING_REGEX: Regex = Regex::new("^\"[a-zA-Z0-9 ]*\"$").unwrap();
    pub static ref STRING_LITERAL_REGEX: Regex = Regex::new("\"[^\"]*\"").unwrap();
}

/// The fixed token vocabulary of the language, built once per analyzer.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    reserved_words: HashSet<&'static str>,
    operators: HashSet<&'static str>,
    separators: HashSet<&'static str>,
    separators_by_length: Vec<&'static str>,
}

impl Vocabulary {
    pub fn new() -> Self {
        let mut separators_by_length = SEPARATORS.to_vec();
        separators_by_length.sort_by(|a, b| b.len().cmp(&a.len()));

        Vocabulary {
            reserved_words: RESERVED_WORDS.into_iter().collect(),
            operators: OPERATORS.into_iter().collect(),
            separators: SEPARATORS.into_iter().collect(),
            separators_by_length,
        }
    }

    /// Matches reserved words regardless of case, returning the lower-case spelling.
    pub fn reserved_word(&self, token: &str) -> Option<&'static str> {
        self.reserved_words.get(token.to_lowercase().as_str()).copied()
    }

    pub fn operator(&self, token: &str) -> Option<&'static str> {
        self.operators.get(token).copied()
    }

    pub fn separator(&self, token: &str) -> Option<&'static str> {
        self.separators.get(token).copied()
    }

    /// Separators ordered longest first, so padding never splits a longer symbol.
    pub fn separators_by_length(&self) -> &[&'static str] {
        &self.separators_by_length
    }

    pub fn is_identifier(&self, token: &str) -> bool {
        self.reserved_word(token).is_none() && IDENTIFIER_REGEX.is_match(token)
    }

    pub fn is_constant(&self, token: &str) -> bool {
        INTEGER_REGEX.is_match(token) || STRING_REGEX.is_match(token)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Vocabulary::new()
    }
}

/// Token class recorded in the program internal form.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    ReservedWord(&'static str),
    Operator(&'static str),
    Separator(&'static str),
    Identifier,
    Constant,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::ReservedWord(word) => write!(f, "{}", word),
            TokenKind::Operator(operator) => write!(f, "{}", operator),
            TokenKind::Separator(separator) => write!(f, "{}", separator),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Constant => write!(f, "constant"),
        }
    }
}

/// One classified token: its class plus, for identifiers and constants, the
/// symbol table position it was interned at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PifEntry {
    pub kind: TokenKind,
    pub position: Option<usize>,
}

impl PifEntry {
    pub fn reference(&self) -> i64 {
        self.position.map_or(NO_REFERENCE, |position| position as i64)
    }

    pub fn as_pair(&self) -> (String, i64) {
        (self.kind.to_string(), self.reference())
    }
}

impl Display for PifEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.kind, self.reference())
    }
}
