use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use shift_cipher::{Breaker, Key, ShiftCipher};

mod menu;
mod report;

/// Command-line arguments for the shift cipher tool.
#[derive(Parser, Debug)]
#[command(version, about = "Printable-ASCII shift cipher: encrypt, decrypt, break and analyze")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encrypt text with a numeric key
    Encrypt(KeyedArgs),
    /// Decrypt text with a numeric key
    Decrypt(KeyedArgs),
    /// Recover the key by trying all of them and scoring with English letter frequencies
    Break(BreakArgs),
    /// Print the letter frequency table and the English similarity score
    Analyze(AnalyzeArgs),
    /// Interactive menu on stdin/stdout
    Menu,
}

/// Where the text to process comes from (exactly one source).
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct Input {
    #[arg(short, long, help = "Text to process")]
    text: Option<String>,

    #[arg(short, long, help = "Path to the input file")]
    file: Option<PathBuf>,
}

impl Input {
    fn read(&self) -> Result<String> {
        match (&self.text, &self.file) {
            (Some(text), _) => Ok(text.clone()),
            (None, Some(path)) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read the input file {}", path.display())),
            (None, None) => anyhow::bail!("Either --text or --file is required"),
        }
    }
}

#[derive(Args, Debug)]
struct KeyedArgs {
    #[command(flatten)]
    input: Input,

    #[arg(short, long, allow_hyphen_values = true, help = "Numeric key (any non-negative integer)")]
    key: String,

    #[arg(short, long, help = "Path to the output file")]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct BreakArgs {
    #[command(flatten)]
    input: Input,

    #[arg(short, long, help = "Path to the output file for the recovered plaintext")]
    output: Option<PathBuf>,

    #[arg(long, default_value_t = 1, help = "Number of candidates to list")]
    top: usize,
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    #[command(flatten)]
    input: Input,
}

/// Direction of a keyed transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OperationMode {
    Encrypt,
    Decrypt,
}

impl OperationMode {
    /// Parse the operator's key, then run the transform with it
    fn apply(self, text: &str, key: &str) -> shift_cipher::Result<String> {
        let key: Key = key.parse()?;
        match self {
            OperationMode::Encrypt => shift_cipher::encrypt(text, key.value()),
            OperationMode::Decrypt => shift_cipher::decrypt(text, key.value()),
        }
    }

    fn label(self) -> &'static str {
        match self {
            OperationMode::Encrypt => "Encrypted",
            OperationMode::Decrypt => "Decrypted",
        }
    }
}

/// Main entry point for the shift cipher tool.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli: Cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Encrypt(args) => transform(&args, OperationMode::Encrypt),
        Command::Decrypt(args) => transform(&args, OperationMode::Decrypt),
        Command::Break(args) => break_text(&args),
        Command::Analyze(args) => {
            let text = args.input.read()?;
            print!("{}", report::analysis_report(&text));
            Ok(())
        }
        Command::Menu => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            menu::run(&mut stdin.lock(), &mut stdout.lock()).context("Interactive session failed")
        }
    }
}

fn transform(args: &KeyedArgs, mode: OperationMode) -> Result<()> {
    let text = args.input.read()?;
    log::info!("{:?} {} characters", mode, text.chars().count());

    let result = mode.apply(&text, &args.key)?;
    emit(args.output.as_deref(), &result)
}

fn break_text(args: &BreakArgs) -> Result<()> {
    let ciphertext = args.input.read()?;
    let breaker = Breaker::new(ShiftCipher::default());
    let ranked = breaker.rank(&ciphertext, args.top.max(1));

    print!("{}", report::break_report(&ranked));

    match (args.output.as_deref(), ranked.first()) {
        (Some(path), Some(best)) => write_output(path, &best.plaintext),
        _ => Ok(()),
    }
}

/// Print the result, or write it to `output` when one is given
fn emit(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            write_output(path, content)?;
            println!("Operation completed successfully! Output saved to: {}", path.display());
            Ok(())
        }
        None => {
            println!("{}", content);
            Ok(())
        }
    }
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .with_context(|| format!("Failed to write the output file {}", path.display()))?;
    log::info!("wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
