use std::{
    env,
    path::{Path, PathBuf},
    process,
    time::Instant,
};

use pif_lexer::{
    display_error, errors::errors::ReportError, format_pif, format_symbol_tables,
    lexer::lexer::LexicalAnalyzer, read_source, write_reports,
};

const DEFAULT_FILES: [&str; 4] = ["p1.txt", "p2.txt", "p3.txt", "p1err.txt"];

struct Args {
    files: Vec<String>,
    out_dir: PathBuf,
}

fn parse_args() -> Result<Args, String> {
    let mut files = vec![];
    let mut out_dir = PathBuf::from(".");
    let mut args = env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--out" => {
                out_dir = PathBuf::from(args.next().ok_or("--out expects a directory")?);
            }
            flag if flag.starts_with("--") => return Err(format!("Unknown flag {}", flag)),
            _ => files.push(arg),
        }
    }

    if files.is_empty() {
        files = DEFAULT_FILES.iter().map(|file| file.to_string()).collect();
    }

    Ok(Args { files, out_dir })
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Usage: pif_lexer [--out <dir>] [files...]");
            process::exit(2);
        }
    };

    for file in &args.files {
        println!("\nAnalyzing {}:", file);

        if let Err(error) = analyze_program(file, &args.out_dir) {
            println!("{}", error);
        }
    }
}

fn analyze_program(file: &str, out_dir: &Path) -> Result<(), ReportError> {
    let source = read_source(Path::new(file))?;

    let start = Instant::now();
    let mut analyzer = LexicalAnalyzer::new();
    let (pif, verdict) = analyzer.analyze(&source);

    println!("Analyzed in {:?}", start.elapsed());

    if !verdict.is_correct() {
        for error in verdict.errors() {
            display_error(error, &source, file);
        }
        println!("{}", verdict);
        return Ok(());
    }

    write_reports(&analyzer, &pif, out_dir)?;

    print!("\n{}", format_pif(&pif));
    println!("{}", format_symbol_tables(&analyzer));

    println!("\nAnalysis Result:");
    println!("{}", verdict);

    Ok(())
}
