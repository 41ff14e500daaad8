//! Deduplicating symbol tables for identifiers and constants.
//!
//! One abstraction serves both tables; the analyzer owns one instance per kind
//! of lexeme and nothing inside the table distinguishes the two.

pub mod symbol_table;

#[cfg(test)]
mod tests;
