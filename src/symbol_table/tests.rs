//! Unit tests for the symbol table.

use super::symbol_table::SymbolTable;

#[test]
fn test_intern_assigns_first_seen_positions() {
    let mut table = SymbolTable::new();

    assert_eq!(table.intern("x"), 0);
    assert_eq!(table.intern("y"), 1);
    assert_eq!(table.intern("z"), 2);
    assert_eq!(table.len(), 3);
}

#[test]
fn test_intern_is_idempotent() {
    let mut table = SymbolTable::new();
    table.intern("a");

    for _ in 0..5 {
        assert_eq!(table.intern("count"), 1);
    }
    assert_eq!(table.len(), 2);
}

#[test]
fn test_intern_is_case_sensitive() {
    let mut table = SymbolTable::new();

    assert_eq!(table.intern("abc"), 0);
    assert_eq!(table.intern("ABC"), 1);
}

#[test]
fn test_remove_then_intern_gets_new_position() {
    let mut table = SymbolTable::new();
    assert_eq!(table.intern("x"), 0);
    assert_eq!(table.intern("y"), 1);

    table.remove("x");
    assert_eq!(table.get("x"), None);

    assert_eq!(table.intern("x"), 2);
    assert_eq!(table.get("y"), Some(1));
}

#[test]
fn test_add_and_get_are_raw() {
    let mut table = SymbolTable::new();
    table.add("k", 42);

    assert_eq!(table.get("k"), Some(42));
    assert_eq!(table.intern("other"), 0);
}

#[test]
fn test_remove_missing_lexeme_is_noop() {
    let mut table = SymbolTable::new();
    table.intern("x");
    table.remove("missing");

    assert_eq!(table.len(), 1);
    assert!(!table.is_empty());
}

#[test]
fn test_display_matches_table_dump() {
    let mut table = SymbolTable::new();
    table.intern("a");
    table.intern("b");

    assert_eq!(table.to_string(), "0: (b, 1) -> None\n1: (a, 0) -> None\n");
    assert_eq!(table.to_string(), table.table().to_string());
}
