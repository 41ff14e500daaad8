//! Utility macros for the analyzer.
//!
//! - `MK_PIF_ENTRY!` - Creates a PifEntry instance

/// Creates a PifEntry instance.
///
/// With only a kind the entry carries no symbol table position; pass a position
/// for identifiers and constants.
///
/// # Example
///
/// ```ignore
/// let entry = MK_PIF_ENTRY!(TokenKind::Separator(";"));
/// let entry = MK_PIF_ENTRY!(TokenKind::Identifier, 0);
/// ```
#[macro_export]
macro_rules! MK_PIF_ENTRY {
    ($kind:expr) => {
        PifEntry {
            kind: $kind,
            position: None,
        }
    };
    ($kind:expr, $position:expr) => {
        PifEntry {
            kind: $kind,
            position: Some($position),
        }
    };
}
