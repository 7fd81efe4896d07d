//! # RockBLOCK Decoder Library
//!
//! Decode 50-byte RockBLOCK Iridium SBD telemetry payloads from
//! high-altitude balloon flights.
//!
//! This library provides the core decoding engine: a 100-character
//! hexadecimal string is validated, converted to raw bytes, and mapped to
//! a fully typed [`sbd::TelemetryRecord`]. Presentation and the
//! interactive prompt loop live in the binary crate.

pub mod config;
pub mod error;
pub mod report;
pub mod sbd;
