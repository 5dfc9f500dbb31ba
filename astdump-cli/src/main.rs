use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use astdump_core::{Schema, compiler_schema, emit_printer};
use clap::Parser;

/// Generate the compiler's diagnostic tree printer from its node schema.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "PATH",
        help = "Write the generated source to PATH instead of stdout"
    )]
    output: Option<String>,

    #[arg(long, help = "List node descriptors in emission order instead of generating code")]
    list: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    execute(cli)
}

/// Logs go to stderr; stdout carries only the generated artifact.
/// Enable with `RUST_LOG=astdump_core=debug`.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn execute(cli: Cli) -> Result<()> {
    // Build everything before touching the output so a schema defect
    // leaves no partial source behind.
    let schema = compiler_schema().context("embedded node schema is inconsistent")?;
    tracing::info!(nodes = schema.len(), "loaded node schema");

    let text = if cli.list {
        list_descriptors(&schema)
    } else {
        emit_printer(&schema)
    };
    write_output(cli.output.as_deref(), text.as_bytes())
}

fn list_descriptors(schema: &Schema) -> String {
    let mut lines = String::new();
    for descriptor in schema.iter() {
        lines.push_str(&descriptor.name);
        lines.push('\n');
    }
    lines
}

fn write_output(path: Option<&str>, bytes: &[u8]) -> Result<()> {
    let Some(path) = path else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(bytes).context("failed to write to stdout")?;
        stdout.flush()?;
        return Ok(());
    };
    if let Some(parent) = PathBuf::from(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {parent:?}"))?;
        }
    }
    fs::write(path, bytes).with_context(|| format!("failed to write output file {path}"))?;
    Ok(())
}
