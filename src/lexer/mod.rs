//! Lexical analysis module.
//!
//! This module contains the analyzer that converts source text into a program
//! internal form (PIF). It handles:
//!
//! - Splitting lines into raw tokens while keeping string literals whole
//! - Classifying tokens as reserved words, operators, separators, identifiers
//!   or constants
//! - Interning identifiers and constants into their symbol tables
//! - Collecting every lexical error of a pass instead of stopping at the first

pub mod lexer;
pub mod tokens;
