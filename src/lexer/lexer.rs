use crate::{
    errors::errors::{Error, ErrorImpl, Verdict},
    symbol_table::symbol_table::SymbolTable,
    MK_PIF_ENTRY,
};

use super::tokens::{PifEntry, TokenKind, Vocabulary, STRING_LITERAL_REGEX};

/// Turns source text into a program internal form, interning identifiers and
/// constants into their own symbol tables.
///
/// The symbol tables live as long as the analyzer. The PIF is rebuilt on every
/// call to [`LexicalAnalyzer::analyze`]. An analyzer must not be shared across
/// concurrent passes; analyze independent programs with separate instances.
#[derive(Debug, Clone, Default)]
pub struct LexicalAnalyzer {
    vocabulary: Vocabulary,
    identifiers: SymbolTable,
    constants: SymbolTable,
    pif: Vec<PifEntry>,
}

impl LexicalAnalyzer {
    pub fn new() -> LexicalAnalyzer {
        LexicalAnalyzer {
            vocabulary: Vocabulary::new(),
            identifiers: SymbolTable::new(),
            constants: SymbolTable::new(),
            pif: vec![],
        }
    }

    pub fn pif(&self) -> &[PifEntry] {
        &self.pif
    }

    pub fn identifiers(&self) -> &SymbolTable {
        &self.identifiers
    }

    pub fn constants(&self) -> &SymbolTable {
        &self.constants
    }

    /// Splits one line into raw tokens.
    ///
    /// String literals are kept whole, separators always become tokens of their
    /// own, and everything else is split on whitespace. Operators are not
    /// separated from their neighbours, so `a+b` stays a single token.
    pub fn tokenize(&self, line: &str) -> Vec<String> {
        let mut tokens = vec![];
        // whether the next piece continues the last token instead of starting one
        let mut glued = false;
        let mut last = 0;

        for literal in STRING_LITERAL_REGEX.find_iter(line) {
            glued = self.split_code(&line[last..literal.start()], &mut tokens, glued);
            push_piece(&mut tokens, literal.as_str(), glued);
            glued = true;
            last = literal.end();
        }
        self.split_code(&line[last..], &mut tokens, glued);

        tokens
    }

    /// Pads separators in text outside string literals and splits it on
    /// whitespace. Returns whether the text ends glued to what follows.
    fn split_code(&self, code: &str, tokens: &mut Vec<String>, glued: bool) -> bool {
        if code.is_empty() {
            return glued;
        }

        let mut padded = String::from(code);
        for separator in self.vocabulary.separators_by_length() {
            padded = padded.replace(*separator, &format!(" {} ", separator));
        }

        let leading_space = padded.starts_with(char::is_whitespace);
        for (index, piece) in padded.split_whitespace().enumerate() {
            push_piece(tokens, piece, glued && index == 0 && !leading_space);
        }

        !padded.ends_with(char::is_whitespace)
    }

    /// Classifies a raw token. The order of the checks is significant: reserved
    /// words also have the shape of identifiers and must win over them.
    pub fn classify(&self, token: &str) -> Option<TokenKind> {
        if let Some(word) = self.vocabulary.reserved_word(token) {
            Some(TokenKind::ReservedWord(word))
        } else if let Some(operator) = self.vocabulary.operator(token) {
            Some(TokenKind::Operator(operator))
        } else if let Some(separator) = self.vocabulary.separator(token) {
            Some(TokenKind::Separator(separator))
        } else if self.vocabulary.is_identifier(token) {
            Some(TokenKind::Identifier)
        } else if self.vocabulary.is_constant(token) {
            Some(TokenKind::Constant)
        } else {
            None
        }
    }

    /// Runs a full pass over `code`.
    ///
    /// Every line is processed even after an error; invalid tokens are skipped
    /// and reported in the verdict. The returned PIF is only complete when the
    /// verdict is [`Verdict::LexicallyCorrect`].
    pub fn analyze(&mut self, code: &str) -> (Vec<PifEntry>, Verdict) {
        self.pif.clear();
        let mut errors = vec![];

        for (index, line) in code.split('\n').enumerate() {
            let line_number = index + 1;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            for token in self.tokenize(line) {
                let entry = match self.classify(&token) {
                    Some(TokenKind::Identifier) => {
                        MK_PIF_ENTRY!(TokenKind::Identifier, self.identifiers.intern(&token))
                    }
                    Some(TokenKind::Constant) => {
                        MK_PIF_ENTRY!(TokenKind::Constant, self.constants.intern(&token))
                    }
                    Some(kind) => MK_PIF_ENTRY!(kind),
                    None => {
                        let error = Error::new(ErrorImpl::InvalidToken { token }, line_number);
                        log::warn!("{}", error);
                        errors.push(error);
                        continue;
                    }
                };

                log::trace!("line {}: {:?} -> {}", line_number, token, entry);
                self.pif.push(entry);
            }
        }

        log::debug!(
            "analyzed {} entries, {} identifiers, {} constants, {} errors",
            self.pif.len(),
            self.identifiers.len(),
            self.constants.len(),
            errors.len()
        );

        (self.pif.clone(), Verdict::from_errors(errors))
    }
}

fn push_piece(tokens: &mut Vec<String>, piece: &str, glued: bool) {
    if glued {
        if let Some(last) = tokens.last_mut() {
            last.push_str(piece);
            return;
        }
    }

    tokens.push(String::from(piece));
}
