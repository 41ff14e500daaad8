use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::OPERATORS;

/// A lexical error together with the 1-indexed source line it was found on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    line: usize,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: usize) -> Self {
        Error {
            internal_error: error_impl,
            line,
        }
    }

    pub fn get_line(&self) -> usize {
        self.line
    }

    pub fn get_token(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidToken { token } => token,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidToken { .. } => "InvalidToken",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidToken { token } => invalid_token_tip(token),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Lexical error at line {}: {}", self.line, self.internal_error)
    }
}

impl std::error::Error for Error {}

fn invalid_token_tip(token: &str) -> ErrorTip {
    if token.starts_with('"') {
        if token.len() < 2 || !token.ends_with('"') {
            return ErrorTip::Suggestion(String::from(
                "String constant is missing its closing quote",
            ));
        }
        return ErrorTip::Suggestion(String::from(
            "String constants may only contain letters, digits and spaces",
        ));
    }

    let starts_with_digit = token.chars().next().is_some_and(|c| c.is_ascii_digit());
    if starts_with_digit && token.chars().any(|c| c.is_ascii_alphabetic()) {
        return ErrorTip::Suggestion(String::from("Identifiers must start with a letter"));
    }

    if token.len() > 1 && OPERATORS.iter().any(|operator| token.contains(*operator)) {
        return ErrorTip::Suggestion(String::from(
            "Operators must be separated from their operands by whitespace",
        ));
    }

    if token.len() > 1 && token.starts_with('0') && token.chars().all(|c| c.is_ascii_digit()) {
        return ErrorTip::Suggestion(String::from("Integer constants may not have leading zeros"));
    }

    ErrorTip::None
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("Invalid token '{token}'")]
    InvalidToken { token: String },
}

/// Outcome of one analysis pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    LexicallyCorrect,
    Errors(Vec<Error>),
}

impl Verdict {
    pub fn from_errors(errors: Vec<Error>) -> Self {
        if errors.is_empty() {
            Verdict::LexicallyCorrect
        } else {
            Verdict::Errors(errors)
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::LexicallyCorrect)
    }

    pub fn errors(&self) -> &[Error] {
        match self {
            Verdict::LexicallyCorrect => &[],
            Verdict::Errors(errors) => errors,
        }
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::LexicallyCorrect => write!(f, "Lexically correct"),
            Verdict::Errors(errors) => {
                let messages = errors.iter().map(|error| error.to_string()).collect::<Vec<String>>();
                write!(f, "{}", messages.join("\n"))
            }
        }
    }
}

/// Failures of the file-reading and report-writing layer around the analyzer.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("File {file} not found")]
    SourceNotFound { file: String },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
