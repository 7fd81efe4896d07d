//! # RockBLOCK Decoder
//!
//! Interactive decoder for 50-byte RockBLOCK Iridium SBD telemetry
//! payloads.
//!
//! Reads input from the terminal in a loop: a 100-character hex string is
//! decoded and printed; a pasted RockBLOCK notification email (detected
//! by its `IMEI:` line) is accumulated until a blank line, parsed for its
//! delivery fields, and its `Data:` payload decoded; entering `0` exits.
//! The loop owns all prompting and printing; the decoder itself is a pure
//! function of its input.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::{info, warn};

mod config;
mod error;
mod report;
mod sbd;

use config::Config;
use sbd::TelemetryRecord;

/// Sentinel input that terminates the prompt loop
const EXIT_SENTINEL: &str = "0";

/// Default configuration file path
const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("RockBLOCK Decoder v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = load_config()?;
    info!(
        utc_offset_hours = config.time.utc_offset_hours,
        format = %config.output.format,
        "configuration loaded"
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("Enter the hexadecimal string (or enter 0 to quit):");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break, // EOF
        };
        let input = line.trim();

        if input == EXIT_SENTINEL {
            println!("Exiting program. Goodbye!");
            break;
        }
        if input.is_empty() {
            continue;
        }

        // A pasted RockBLOCK notification starts with its IMEI line;
        // collect the rest of the paste up to a blank line.
        if input.contains("IMEI") {
            let mut body = String::from(input);
            body.push('\n');
            for line in lines.by_ref() {
                let line = line?;
                if line.trim().is_empty() {
                    break;
                }
                body.push_str(&line);
                body.push('\n');
            }
            handle_message(&body, &config);
            continue;
        }

        match sbd::decode_with_offset(input, config.time.utc_offset_hours) {
            Ok(record) => print_record(&record, &config),
            Err(e) => {
                warn!(error = %e, "rejected input");
                println!("Error: {}. Please try again.", e);
            }
        }
    }

    Ok(())
}

/// Load configuration from the CLI argument, the default path, or defaults
fn load_config() -> Result<Config> {
    if let Some(path) = std::env::args().nth(1) {
        return Ok(Config::load(&path)?);
    }
    if std::path::Path::new(DEFAULT_CONFIG_PATH).exists() {
        return Ok(Config::load(DEFAULT_CONFIG_PATH)?);
    }
    Ok(Config::default())
}

/// Parse a pasted notification body, then decode its payload
fn handle_message(body: &str, config: &Config) {
    let message = match sbd::envelope::parse_message(body) {
        Ok(message) => message,
        Err(e) => {
            warn!(error = %e, "rejected message body");
            println!("Error: {}. Please try again.", e);
            return;
        }
    };

    println!("IMEI: {}  MOMSN: {}", message.imei, message.momsn);
    if !message.transmit_time.is_empty() {
        println!("Transmit Time: {}", message.transmit_time);
    }

    match sbd::decode_with_offset(&message.data, config.time.utc_offset_hours) {
        Ok(record) => print_record(&record, config),
        Err(e) => {
            warn!(error = %e, "rejected payload from message body");
            println!("Error: {}. Please try again.", e);
        }
    }
}

/// Print a decoded record in the configured output format
fn print_record(record: &TelemetryRecord, config: &Config) {
    if config.output.format == "json" {
        match serde_json::to_string(record) {
            Ok(json) => println!("{}", json),
            Err(e) => warn!(error = %e, "failed to serialize record"),
        }
    } else {
        println!(
            "{}",
            report::render(
                record,
                &config.time.zone_label,
                &config.payload.expected_header
            )
        );
    }
}
