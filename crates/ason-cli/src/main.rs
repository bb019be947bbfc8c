//! `ason` CLI — convert between ASON and JSON from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # JSON → ASON (stdin → stdout; also the default when no subcommand is given)
//! echo '{"a":5,"b":6}' | ason encode
//!
//! # ASON → JSON
//! echo 'true' | ason decode
//!
//! # Pretty-printed JSON under the strict grammar
//! ason decode --pretty --strict -i data.ason
//!
//! # File to file
//! ason encode -i data.json -o data.ason
//! ```
//!
//! Exit codes: `0` success, `13` invalid usage, `14` conversion failure.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use std::process;

const EXIT_INVALID_USAGE: i32 = 13;
const EXIT_CONVERSION_FAILED: i32 = 14;

#[derive(Parser)]
#[command(name = "ason", version, about = "ASON <-> JSON converter")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert JSON to ASON
    Encode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Convert ASON to JSON
    Decode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Pretty-print the resulting JSON
        #[arg(short, long)]
        pretty: bool,
        /// Abort on grammar violations instead of normalizing them
        #[arg(short, long)]
        strict: bool,
    },
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version also land here, with a zero exit
            let code = if err.use_stderr() { EXIT_INVALID_USAGE } else { 0 };
            let _ = err.print();
            process::exit(code);
        }
    };

    if let Err(err) = run(cli) {
        eprintln!("Conversion failed: {err:#}");
        process::exit(EXIT_CONVERSION_FAILED);
    }
}

fn run(cli: Cli) -> Result<()> {
    // JSON → ASON is the default direction
    let command = cli.command.unwrap_or(Commands::Encode {
        input: None,
        output: None,
    });

    match command {
        Commands::Encode { input, output } => {
            let json = read_input(input.as_deref())?;
            let ason =
                ason_core::json_to_ason(&json).context("failed to convert JSON to ASON")?;
            write_output(output.as_deref(), &ason)?;
        }
        Commands::Decode {
            input,
            output,
            pretty,
            strict,
        } => {
            let ason = read_input(input.as_deref())?;
            let json = ason_core::ason_to_json(&ason, pretty, strict)
                .context("failed to convert ASON to JSON")?;
            write_output(output.as_deref(), &json)?;
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read file: {path}")),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("failed to write file: {path}"))?,
        None => print!("{content}"),
    }
    Ok(())
}
