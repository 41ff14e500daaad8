#![allow(clippy::module_inception)]

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{
    errors::errors::{Error, ErrorTip, ReportError},
    lexer::{
        lexer::LexicalAnalyzer,
        tokens::{PifEntry, SEPARATORS},
    },
};

pub mod errors;
pub mod hashtable;
pub mod lexer;
pub mod macros;
pub mod symbol_table;

pub const PIF_FILE: &str = "PIF.out";
pub const SYMBOL_TABLE_FILE: &str = "ST.out";

/// Reads a whole program from disk.
pub fn read_source(path: &Path) -> Result<String, ReportError> {
    fs::read_to_string(path).map_err(|error| match error.kind() {
        ErrorKind::NotFound => ReportError::SourceNotFound {
            file: path.to_string_lossy().to_string(),
        },
        _ => ReportError::Io(error),
    })
}

/// Returns the 1-indexed `line` of `source`, if it exists.
pub fn get_line(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source.split('\n').nth(line - 1)
}

pub fn format_pif(pif: &[PifEntry]) -> String {
    let mut result = String::from("Program Internal Form (PIF):\n");
    for entry in pif {
        result.push_str(&format!("{}\n", entry));
    }

    result
}

pub fn format_symbol_tables(analyzer: &LexicalAnalyzer) -> String {
    format!(
        "Symbol Table Identifiers:\nData Structure: HashTable\n{}\nSymbol Table Constants:\nData Structure: HashTable\n{}",
        analyzer.identifiers(),
        analyzer.constants()
    )
}

/// Writes `PIF.out` and `ST.out` into `dir`, creating it if needed. Returns the
/// paths written.
pub fn write_reports(
    analyzer: &LexicalAnalyzer,
    pif: &[PifEntry],
    dir: &Path,
) -> Result<(PathBuf, PathBuf), ReportError> {
    fs::create_dir_all(dir)?;

    let pif_path = dir.join(PIF_FILE);
    fs::write(&pif_path, format_pif(pif))?;

    let symbol_table_path = dir.join(SYMBOL_TABLE_FILE);
    fs::write(&symbol_table_path, format_symbol_tables(analyzer))?;

    Ok((pif_path, symbol_table_path))
}

pub fn format_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: InvalidToken (Identifiers must start with a letter)
        -> p1err.txt
           |
         3 | let c = 5x;
           | --------^
    */

    let line_string = error.get_line().to_string();
    let padding = line_string.len() + 2;
    let line_text = get_line(source, error.get_line()).unwrap_or("").trim();
    let arrows = token_column(line_text, error.get_token()).unwrap_or(0) + 1;

    let mut result = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}\n", error.get_error_name())
    } else {
        format!("Error: {} ({})\n", error.get_error_name(), error.get_tip())
    };
    result.push_str(&format!("-> {}\n", file));
    result.push_str(&format!("{:>padding$}\n", "|"));
    result.push_str(&format!("{} | {}\n", line_string, line_text));
    result.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    result
}

/// Byte offset of `token` in `line`, preferring a match that stands on its own
/// over one inside a longer token.
fn token_column(line: &str, token: &str) -> Option<usize> {
    let is_boundary = |c: Option<char>| {
        c.is_none_or(|c| {
            c.is_whitespace() || SEPARATORS.iter().any(|separator| separator.starts_with(c))
        })
    };

    line.match_indices(token)
        .map(|(start, _)| start)
        .find(|&start| {
            is_boundary(line[..start].chars().next_back())
                && is_boundary(line[start + token.len()..].chars().next())
        })
        .or_else(|| line.find(token))
}

pub fn display_error(error: &Error, source: &str, file: &str) {
    print!("{}", format_error(error, source, file));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_line() {
        let source = "let x;\n\nprint x;\n";

        assert_eq!(get_line(source, 1), Some("let x;"));
        assert_eq!(get_line(source, 2), Some(""));
        assert_eq!(get_line(source, 3), Some("print x;"));
        assert_eq!(get_line(source, 0), None);
        assert_eq!(get_line(source, 5), None);
    }

    #[test]
    fn test_format_pif() {
        let mut analyzer = LexicalAnalyzer::new();
        let (pif, _) = analyzer.analyze("let x = \"a\";");

        assert_eq!(
            format_pif(&pif),
            "Program Internal Form (PIF):\n(let, -1)\n(identifier, 0)\n(=, -1)\n(constant, 0)\n(;, -1)\n"
        );
    }

    #[test]
    fn test_format_symbol_tables() {
        let mut analyzer = LexicalAnalyzer::new();
        analyzer.analyze("a = 1 ;\nb = 0 ;");

        assert_eq!(
            format_symbol_tables(&analyzer),
            "Symbol Table Identifiers:\nData Structure: HashTable\n\
             0: (b, 1) -> None\n1: (a, 0) -> None\n\
             \nSymbol Table Constants:\nData Structure: HashTable\n\
             0: (0, 1) -> None\n1: (1, 0) -> None\n"
        );
    }

    #[test]
    fn test_format_error() {
        let source = "let a = 1;\n  let b = 5x;\n";
        let mut analyzer = LexicalAnalyzer::new();
        let (_, verdict) = analyzer.analyze(source);

        assert_eq!(
            format_error(&verdict.errors()[0], source, "p1err.txt"),
            "Error: InvalidToken (Identifiers must start with a letter)\n\
             -> p1err.txt\n  |\n2 | let b = 5x;\n  | --------^\n"
        );
    }

    #[test]
    fn test_format_error_points_at_whole_token() {
        let source = "let ab5x = 5x;";
        let mut analyzer = LexicalAnalyzer::new();
        let (_, verdict) = analyzer.analyze(source);

        assert_eq!(
            format_error(&verdict.errors()[0], source, "p1err.txt"),
            "Error: InvalidToken (Identifiers must start with a letter)\n\
             -> p1err.txt\n  |\n1 | let ab5x = 5x;\n  | -----------^\n"
        );
    }

    #[test]
    fn test_token_column() {
        assert_eq!(token_column("let ab5x = 5x;", "5x"), Some(11));
        assert_eq!(token_column("print(5x)", "5x"), Some(6));
        assert_eq!(token_column("a5x5x", "5x"), Some(1));
        assert_eq!(token_column("let a;", "5x"), None);
    }

    #[test]
    fn test_read_missing_source() {
        let result = read_source(Path::new("definitely/not/here.txt"));

        assert!(matches!(result, Err(ReportError::SourceNotFound { .. })));
    }
}
