//! # SBD Payload Decoding
//!
//! Decodes the fixed 50-byte RockBLOCK telemetry payload.

pub mod channels;
pub mod decoder;
pub mod envelope;
pub mod hex;
pub mod layout;
pub mod status;

pub use channels::{AnalogChannel, Measurement, SensorKind};
pub use decoder::{decode, decode_payload, decode_with_offset};
pub use envelope::SbdMessage;
pub use layout::{
    Altitude, AltitudeUnit, DmsAngle, Hemisphere, LocalTime, Meridiem, RawBytes, TelemetryRecord,
    UtcTime,
};
