use clap::{Parser, Subcommand};
use lox_lexer::{
    ErrorReporter, LexErrorKind, LexerError, Scanner, ScannerConfig, Token, UnknownCharPolicy,
};
use std::io::{ErrorKind, Read};

/// Exit code for source that failed to scan cleanly.
const EXIT_DATA_ERR: i32 = 65;
/// Exit code for input that could not be read.
const EXIT_NO_INPUT: i32 = 66;

#[derive(Parser)]
#[command(name = "lox")]
#[command(about = "Lox scanner: turn Lox source into tokens")]
#[command(version)]
struct Cli {
    /// Silently skip characters that start no token instead of reporting them
    #[arg(long, global = true)]
    skip_unknown: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the tokens of a .lox file, one per line
    Tokens {
        /// Input .lox file, or `-` for stdin
        path: String,
    },

    /// Check a .lox file for lexical errors without printing tokens
    Check {
        /// Input .lox file, or `-` for stdin
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = ScannerConfig::new().unknown_chars(if cli.skip_unknown {
        UnknownCharPolicy::Skip
    } else {
        UnknownCharPolicy::Report
    });

    let code = match cli.command {
        Command::Tokens { path } => cmd_tokens(&path, config),
        Command::Check { path } => cmd_check(&path, config),
    };
    std::process::exit(code);
}

/// Reporter that prints each error to stderr as it arrives.
#[derive(Default)]
struct StderrReporter {
    had_error: bool,
}

impl ErrorReporter for StderrReporter {
    fn report(&mut self, line: usize, kind: LexErrorKind) {
        eprintln!("{}", LexerError::new(kind, line));
        self.had_error = true;
    }
}

/// Read the source at `path`, or all of `stdin` when `path` is `-`.
fn read_source(path: &str, mut stdin: impl Read) -> Result<String, String> {
    if path == "-" {
        let mut source = String::new();
        stdin
            .read_to_string(&mut source)
            .map_err(|e| format!("Error reading stdin: {e}"))?;
        return Ok(source);
    }

    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => format!("Error: file not found: {path}"),
        _ => format!("Error reading {path}: {e}"),
    })
}

fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&token.to_string());
        out.push('\n');
    }
    out
}

/// Scan `source`, printing errors to stderr. Returns the tokens and the exit
/// code the scan warrants.
fn scan_source(source: &str, config: ScannerConfig) -> (Vec<Token>, i32) {
    let mut reporter = StderrReporter::default();
    let tokens = Scanner::with_config(source, config).scan_tokens(&mut reporter);
    let code = if reporter.had_error { EXIT_DATA_ERR } else { 0 };
    (tokens, code)
}

fn cmd_tokens(path: &str, config: ScannerConfig) -> i32 {
    let source = match read_source(path, std::io::stdin()) {
        Ok(source) => source,
        Err(message) => {
            eprintln!("{message}");
            return EXIT_NO_INPUT;
        }
    };

    let (tokens, code) = scan_source(&source, config);
    print!("{}", render_tokens(&tokens));
    code
}

fn cmd_check(path: &str, config: ScannerConfig) -> i32 {
    let source = match read_source(path, std::io::stdin()) {
        Ok(source) => source,
        Err(message) => {
            eprintln!("{message}");
            return EXIT_NO_INPUT;
        }
    };

    let (_, code) = scan_source(&source, config);
    if code == 0 {
        eprintln!("OK: {path}");
    }
    code
}
