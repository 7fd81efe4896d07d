//! # RockBLOCK Message Envelope
//!
//! Extracts the delivery fields from the plain-text body of a RockBLOCK
//! message notification: IMEI, MOMSN, transmit time, the Iridium
//! network's own position estimate, the session status, and the `Data:`
//! hex payload that feeds the decoder.

use serde::Serialize;
use tracing::warn;

use crate::error::{DecoderError, Result};

/// Delivery metadata wrapped around one SBD payload
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SbdMessage {
    /// Modem IMEI
    pub imei: String,

    /// Mobile-originated message sequence number
    pub momsn: u32,

    /// Transmit time as reported by the gateway
    pub transmit_time: String,

    /// Iridium network position estimate, degrees
    pub iridium_latitude: f64,
    pub iridium_longitude: f64,

    /// Circular error probable of the network estimate, km
    pub iridium_cep: f64,

    /// Iridium session status
    pub session_status: u16,

    /// Hex-encoded payload for the decoder
    pub data: String,
}

/// Parse a RockBLOCK notification body into an [`SbdMessage`]
///
/// Fields appear one per line as `Name: value`. IMEI and Data are
/// essential; everything else falls back to its default when absent or
/// unparseable.
///
/// # Errors
///
/// Returns `MissingField` when IMEI or Data is absent.
pub fn parse_message(body: &str) -> Result<SbdMessage> {
    let imei = extract_field(body, "IMEI")
        .ok_or(DecoderError::MissingField("IMEI"))?
        .to_string();
    let data = extract_field(body, "Data")
        .ok_or(DecoderError::MissingField("Data"))?
        .to_string();

    Ok(SbdMessage {
        imei,
        momsn: numeric_field(body, "MOMSN"),
        transmit_time: extract_field(body, "Transmit Time")
            .unwrap_or_default()
            .to_string(),
        iridium_latitude: numeric_field(body, "Iridium Latitude"),
        iridium_longitude: numeric_field(body, "Iridium Longitude"),
        iridium_cep: numeric_field(body, "Iridium CEP"),
        session_status: numeric_field(body, "Iridium Session Status"),
        data,
    })
}

/// Find `name:` at the start of a line and return the rest of the line
fn extract_field<'a>(body: &'a str, name: &str) -> Option<&'a str> {
    for line in body.lines() {
        if let Some(rest) = line.trim_start().strip_prefix(name) {
            if let Some(value) = rest.trim_start().strip_prefix(':') {
                let value = value.trim();
                if !value.is_empty() {
                    return Some(value);
                }
            }
        }
    }
    None
}

/// Extract and parse a numeric field, defaulting on absence or garbage
fn numeric_field<T>(body: &str, name: &str) -> T
where
    T: std::str::FromStr + Default,
{
    match extract_field(body, name) {
        Some(value) => value.parse().unwrap_or_else(|_| {
            warn!(field = name, value, "unparseable numeric field");
            T::default()
        }),
        None => T::default(),
    }
}
