//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `cloudrec_core` linkage.
//! - Build one save request from arguments and submit it to a transport that
//!   prints the envelope instead of sending it.
//!
//! Usage: `cloudrec_cli <public|private> <RecordType> [key=value ...]`.
//! Values are parsed as JSON when possible, otherwise kept as strings.
//! Set `CLOUDREC_LOG_DIR` (and optionally `CLOUDREC_LOG_LEVEL`) to write logs.

use cloudrec_core::{
    init_logging_with, submit, Database, LoggingConfig, LoggingError, Record, RecordValue,
    Transport,
};
use serde_json::{Map, Value};
use std::process::ExitCode;

/// Prints envelopes as pretty JSON on stdout.
struct StdoutTransport;

impl Transport for StdoutTransport {
    type Error = serde_json::Error;

    fn send(&self, _action: &str, payload: &Map<String, Value>) -> Result<(), Self::Error> {
        println!("{}", serde_json::to_string_pretty(payload)?);
        Ok(())
    }
}

fn main() -> ExitCode {
    if let Err(err) = start_logging() {
        eprintln!("warning: logging disabled: {err}");
    }

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if args.is_empty() {
        println!("cloudrec_core version={}", cloudrec_core::core_version());
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn start_logging() -> Result<(), LoggingError> {
    if let Some(config) = LoggingConfig::from_env()? {
        init_logging_with(&config)?;
    }
    Ok(())
}

fn run(args: &[String]) -> Result<(), String> {
    let database = match args[0].as_str() {
        "public" => Database::public(),
        "private" => Database::private(),
        other => return Err(format!("unknown database `{other}`; expected public|private")),
    };
    let record_type = args
        .get(1)
        .ok_or_else(|| "missing record type".to_string())?;

    let mut record = Record::new(record_type.as_str()).map_err(|err| err.to_string())?;
    for pair in &args[2..] {
        let (key, raw) = pair
            .split_once('=')
            .ok_or_else(|| format!("expected key=value, got `{pair}`"))?;
        record
            .set(key, parse_value(raw))
            .map_err(|err| err.to_string())?;
    }

    let request = database.save_request(vec![record]);
    submit(&request, &StdoutTransport).map_err(|err| err.to_string())
}

fn parse_value(raw: &str) -> RecordValue {
    serde_json::from_str::<Value>(raw)
        .map(RecordValue::from)
        .unwrap_or_else(|_| RecordValue::from(raw))
}
