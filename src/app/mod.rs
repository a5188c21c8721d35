pub mod cli;
pub mod tracing;

pub use cli::Cli;

use crate::drain::RecordAssembler;
use crate::error::AppError;
use clap::Parser;
use std::io::{Read, Write};

/// Binary entry point: parse flags, initialize tracing, decode stdin.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    tracing::init_tracing(cli.log_level);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let count = decode(&cli, stdin.lock(), stdout.lock())?;
    ::tracing::info!("Wrote {count} records");
    Ok(())
}

/// Read one request body from `input` and write its records as NDJSON.
///
/// Nothing is written when the batch is rejected.
pub fn decode<R: Read, W: Write>(cli: &Cli, mut input: R, mut output: W) -> Result<usize, AppError> {
    let settings = cli.settings()?;
    let assembler = RecordAssembler::from_settings(&settings)?;

    let mut content = String::new();
    input.read_to_string(&mut content)?;

    let records = assembler.assemble(Some(&content), &cli.metadata())?;
    for record in &records {
        serde_json::to_writer(&mut output, record)?;
        output.write_all(b"\n")?;
    }
    output.flush()?;

    Ok(records.len())
}
