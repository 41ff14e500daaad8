//! Error types and error handling for the lexical analyzer.
//!
//! This module defines:
//!
//! - Lexical errors carrying the line they occurred on
//! - The verdict of an analysis pass (success or every error found)
//! - Hints shown next to an error when the driver displays it
//! - Errors of the surrounding file and report layer

pub mod errors;

#[cfg(test)]
mod tests;
