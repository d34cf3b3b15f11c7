//! apidiff CLI
//!
//! Compares two OpenAPI 3.1 JSON documents and prints which operations and
//! component schemas were added, removed, or changed.

use apidiff_core::errors::ApiDiffError;
use apidiff_core::logging_facility::{self, Profile};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;

mod commands;
mod config;

/// Environment variable selecting the log output format (`json` or text)
const LOG_FORMAT_ENV: &str = "APIDIFF_LOG_FORMAT";

#[derive(Debug, Parser)]
#[command(name = "apidiff")]
#[command(about = "OpenAPI contract diff", long_about = None)]
#[command(
    override_usage = "apidiff [--before <path>] [--after <path>] [--limit <n>] [--format <text|json>] [-h|--help]"
)]
#[command(help_template = "{usage-heading} {usage}")]
struct Cli {
    #[command(flatten)]
    diff: commands::diff::DiffArgs,
}

/// Parse the command line, turning unknown flags into a usage error.
///
/// Help exits immediately with status 0; other clap errors exit through clap.
fn parse_cli() -> Result<Cli, ApiDiffError> {
    match Cli::try_parse() {
        Ok(cli) => Ok(cli),
        Err(e) if e.kind() == ErrorKind::UnknownArgument => {
            let arg = match e.get(ContextKind::InvalidArg) {
                Some(ContextValue::String(arg)) => arg.clone(),
                _ => e.to_string(),
            };
            Err(ApiDiffError::UnrecognizedArgument { arg })
        }
        Err(e) => e.exit(),
    }
}

fn main() {
    logging_facility::init(Profile::from_format(
        std::env::var(LOG_FORMAT_ENV).ok().as_deref(),
    ));

    let result = parse_cli()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
        .and_then(|cli| commands::diff::execute(cli.diff));

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
