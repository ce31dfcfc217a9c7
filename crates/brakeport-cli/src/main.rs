//! CLI entry point for brakeport.
//!
//! This module is intentionally thin: it handles argument parsing, stream
//! wiring, and exit codes. All conversion logic lives in the
//! `brakeport-app` crate.

use anyhow::Context;
use brakeport_app::{OutputStyle, run_convert};
use camino::Utf8PathBuf;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};

#[derive(Parser, Debug)]
#[command(
    name = "brakeport",
    version,
    about = "Convert Brakeman security reports into Code Quality reports"
)]
struct Cli {
    /// Read the scanner report from this file instead of stdin.
    #[arg(long, short)]
    input: Option<Utf8PathBuf>,

    /// Write the converted report to this file instead of stdout.
    #[arg(long, short)]
    output: Option<Utf8PathBuf>,

    /// Pretty-print the emitted JSON.
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let style = if cli.pretty {
        OutputStyle::Pretty
    } else {
        OutputStyle::Compact
    };

    let input: Box<dyn Read> = match &cli.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("open input: {path}"))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    match &cli.output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("create output: {path}"))?;
            let mut writer = BufWriter::new(file);
            run_convert(input, &mut writer, style)?;
            writer.flush().with_context(|| format!("flush output: {path}"))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            run_convert(input, &mut stdout, style)?;
            stdout.flush().context("flush stdout")?;
        }
    }

    Ok(())
}
