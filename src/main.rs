//! ion CLI: evaluate an expression, or compile and run it on the VM.

use std::borrow::Cow;
use std::io;
use std::process;

use clap::{Parser, ValueEnum};
use colored::Colorize;
use tracing_subscriber::{fmt, EnvFilter};

use ionlang::bytecode::VM;
use ionlang::error::IonError;
use ionlang::lexer::{ScanOptions, Scanner, TokenKind};
use ionlang::symbol::SymbolTable;
use ionlang::{ExecutionMode, Options};

/// ion evaluates integer expressions such as `2*(3+4)*5`, either directly or
/// by compiling them to bytecode for a small stack machine.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The expression to run.
    #[arg(allow_hyphen_values = true)]
    expr: String,

    /// How to run the expression.
    #[arg(short, long, value_enum, default_value_t = Mode::Bytecode)]
    mode: Mode,

    /// Print the bytecode before running it.
    #[arg(short, long)]
    disassemble: bool,

    /// Print the token stream before running.
    #[arg(short, long)]
    tokens: bool,

    /// Skip whitespace between tokens.
    #[arg(short, long)]
    whitespace: bool,

    /// Reject input left over after the expression.
    #[arg(short, long)]
    strict: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Evaluate while parsing
    Eval,
    /// Compile to bytecode and run it on the VM
    Bytecode,
}

impl From<Mode> for ExecutionMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Eval => ExecutionMode::Evaluate,
            Mode::Bytecode => ExecutionMode::Bytecode,
        }
    }
}

/// Initialize logging with a default filter.
///
/// Use `RUST_LOG` environment variable to override the default filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_logging();
    let args = Args::parse();

    let options = Options {
        mode: args.mode.into(),
        skip_whitespace: args.whitespace,
        require_end: args.strict,
    };

    if args.tokens {
        print_tokens(&args.expr, options.scan_options());
    }

    match run(&args.expr, &options, args.disassemble) {
        Ok(value) => println!("{}", value),
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e.to_string().red());
            process::exit(1);
        }
    }
}

fn run(source: &str, options: &Options, disassemble: bool) -> Result<i32, IonError> {
    if !disassemble || options.mode == ExecutionMode::Evaluate {
        return ionlang::run_with_options(source, options);
    }

    let chunk = ionlang::compile_with_options(source, options)?;
    print!("{}", ionlang::disassemble(&chunk));
    println!("---");

    Ok(VM::new().run(&chunk)?)
}

fn print_tokens(source: &str, options: ScanOptions) {
    let mut symbols = SymbolTable::new();
    let tokens = Scanner::with_options(source, &mut symbols, options).scan_tokens();

    for token in tokens {
        let text = String::from_utf8_lossy(&source.as_bytes()[token.span.start..token.span.end]);
        let kind: Cow<'_, str> = match token.kind {
            TokenKind::Int(value) => format!("integer {}", value).into(),
            TokenKind::Name(symbol) => {
                format!("name {}", symbols.resolve(symbol).unwrap_or("?")).into()
            }
            other => other.to_string().into(),
        };
        println!("{:4}..{:<4} {:<16} {}", token.span.start, token.span.end, kind, text);
    }
    println!("---");
}
