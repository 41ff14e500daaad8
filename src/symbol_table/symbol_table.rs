use std::fmt::Display;

use crate::hashtable::hashtable::HashTable;

/// Maps lexemes to the position they were first seen at.
///
/// Positions start at 0 and follow first-seen order. A position is handed out
/// once: removing a lexeme does not free its position, and interning it again
/// assigns a fresh one.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    table: HashTable<usize>,
    next_position: usize,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            table: HashTable::new(),
            next_position: 0,
        }
    }

    /// Returns the lexeme's position, assigning the next free one if it is new.
    pub fn intern(&mut self, lexeme: &str) -> usize {
        if let Some(position) = self.table.get(lexeme) {
            return *position;
        }

        let position = self.next_position;
        self.table.put(lexeme, position);
        self.next_position += 1;

        log::debug!("interned {:?} at position {}", lexeme, position);
        position
    }

    /// Stores `lexeme` at `position` without touching the counter.
    pub fn add(&mut self, lexeme: &str, position: usize) {
        self.table.put(lexeme, position);
    }

    pub fn get(&self, lexeme: &str) -> Option<usize> {
        self.table.get(lexeme).copied()
    }

    pub fn remove(&mut self, lexeme: &str) {
        self.table.remove(lexeme);
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn table(&self) -> &HashTable<usize> {
        &self.table
    }
}

impl Display for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.table)
    }
}
