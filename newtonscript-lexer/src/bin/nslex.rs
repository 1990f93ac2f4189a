//! nslex: lex NewtonScript source and print the tokens.

use clap::Parser;
use newtonscript_lexer::{newtonscript_rules, render, OutputFormat, RulesOptions};
use rule_lexer::{Lexer, SkipUnmatched};
use std::fs::File;
use std::io::{BufWriter, Read, Write};

/// Lex NewtonScript source.
#[derive(clap::Parser, Debug)]
struct Args {
    /// Output format.
    #[clap(long, value_enum, default_value_t = OutputFormat::Xml)]
    format: OutputFormat,

    /// Optional input file; "-" may be used to indicate stdin.
    #[clap(long, default_value = None)]
    input: Option<String>,

    /// Optional output file; "-" may be used to indicate stdout.
    #[clap(long, default_value = None)]
    output: Option<String>,

    /// Emit whitespace and comment tokens.
    #[clap(long)]
    keep_trivia: bool,

    /// Skip unexpected characters with a warning instead of failing.
    #[clap(long)]
    recover: bool,
}

fn squash_standard_io(path: &Option<String>) -> Option<&str> {
    match path.as_deref() {
        Some("-") | None => None,
        Some(p) => Some(p),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Only initialize if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        let filter = EnvFilter::from_default_env();
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .init();
    }
}

fn read_input(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let mut source = String::new();
    match squash_standard_io(&args.input) {
        None => std::io::stdin().lock().read_to_string(&mut source)?,
        Some(path) => File::open(path)?.read_to_string(&mut source)?,
    };
    Ok(source)
}

fn open_writer(args: &Args) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
    Ok(match squash_standard_io(&args.output) {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args = Args::parse();

    let options = if args.keep_trivia {
        RulesOptions::keep_trivia()
    } else {
        RulesOptions::default()
    };
    let source = read_input(&args)?;
    tracing::debug!(bytes = source.len(), ?options, "lexing");

    let mut lexer = Lexer::from_table(newtonscript_rules(&options)?, source);
    if args.recover {
        lexer = lexer.with_fallback(SkipUnmatched);
    }
    let tokens = lexer.tokenize()?;

    let mut writer = open_writer(&args)?;
    writer.write_all(render(args.format, &tokens)?.as_bytes())?;
    writer.flush()?;
    Ok(())
}
