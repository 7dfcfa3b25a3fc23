use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use valgen_codegen::generate;
use valgen_core::{normalize, parse_document, InputFormat};

#[derive(Parser)]
#[command(name = "valgen")]
#[command(about = "Translate a schema document into Ajv, Zod, and Joi validator modules")]
#[command(version)]
struct Cli {
    /// Input schema file (YAML or JSON)
    input: PathBuf,

    /// Output directory, created if missing
    #[arg(long, default_value = "out")]
    out: PathBuf,

    /// Enable verbose logging (sets log level to debug)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for confirmation lines
    let log_level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let text = fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read input file: {}", cli.input.display()))?;
    let raw = parse_document(&text, InputFormat::from_path(&cli.input))
        .with_context(|| format!("Failed to parse schema from: {}", cli.input.display()))?;

    let schema = normalize(&raw);

    let written = generate(&schema, &cli.out)
        .with_context(|| format!("Failed to generate validators in: {}", cli.out.display()))?;

    for path in written {
        println!("Generated: {}", path.display());
    }

    Ok(())
}
