//! # Telemetry Record Decoder
//!
//! Maps the raw 50-byte payload to a typed [`TelemetryRecord`]: fixed
//! byte offsets to fields, plus the derived conversions (local time,
//! decimal coordinates, channel voltages and calibrations, battery
//! voltage, status description).

use tracing::debug;

use super::channels::{self, AnalogChannel};
use super::hex;
use super::layout::*;
use super::status;
use crate::error::{DecoderError, Result};

/// UTC offset for Arizona (no DST), in hours
pub const ARIZONA_UTC_OFFSET_HOURS: i32 = -7;

/// Decode a 100-character hex string into a telemetry record
///
/// Validation happens first; field extraction is only reached with a full
/// 50-byte payload in hand. Local time uses the Arizona offset.
///
/// # Errors
///
/// Returns error if the input fails length or character validation.
pub fn decode(input: &str) -> Result<TelemetryRecord> {
    decode_with_offset(input, ARIZONA_UTC_OFFSET_HOURS)
}

/// Decode with an explicit UTC offset for the local-time derivation
pub fn decode_with_offset(input: &str, utc_offset_hours: i32) -> Result<TelemetryRecord> {
    let bytes = hex::decode_hex(input)?;
    decode_payload(&bytes, utc_offset_hours)
}

/// Decode an already-converted payload
pub fn decode_payload(bytes: &RawBytes, utc_offset_hours: i32) -> Result<TelemetryRecord> {
    let header: String = [
        read_u8(bytes, OFFSET_HEADER)? as char,
        read_u8(bytes, OFFSET_HEADER + 1)? as char,
    ]
    .iter()
    .collect();
    let header_valid = header == EXPECTED_HEADER;

    let serial_number = read_u24_be(bytes, OFFSET_SERIAL)?;

    let utc_time = UtcTime {
        hours: read_u8(bytes, OFFSET_UTC_HOURS)?,
        minutes: read_u8(bytes, OFFSET_UTC_MINUTES)?,
        seconds: read_u8(bytes, OFFSET_UTC_SECONDS)?,
    };
    let local_time = to_local_time(utc_time, utc_offset_hours);

    let latitude = read_dms(bytes, OFFSET_LATITUDE, Hemisphere::North, Hemisphere::South)?;
    let longitude = read_dms(bytes, OFFSET_LONGITUDE, Hemisphere::East, Hemisphere::West)?;

    let altitude = Altitude {
        value: read_i32_be(bytes, OFFSET_ALTITUDE)?,
        unit: if read_u8(bytes, OFFSET_ALTITUDE_UNIT)? == 0 {
            AltitudeUnit::Meters
        } else {
            AltitudeUnit::Feet
        },
    };

    let mut channel_list = [AnalogChannel {
        port: 0,
        sensor: channels::SensorKind::InternalTemperature,
        raw: 0,
        voltage: 0.0,
        measurement: channels::Measurement::RawVoltage { volts: 0.0 },
    }; ANALOG_CHANNEL_COUNT];
    for (port, channel) in channel_list.iter_mut().enumerate() {
        let raw = read_u16_be(bytes, OFFSET_ANALOG_BASE + port * BYTES_PER_CHANNEL)?;
        *channel = channels::decode_channel(port, raw);
    }

    let battery_voltage = channels::battery_voltage(read_u16_be(bytes, OFFSET_BATTERY)?);

    let status_code = read_u16_be(bytes, OFFSET_STATUS)?;
    let status_description = status::describe(status_code);

    debug!(
        serial = serial_number,
        status = status_code,
        header_valid,
        "decoded telemetry record"
    );

    Ok(TelemetryRecord {
        bytes: *bytes,
        header,
        header_valid,
        serial_number,
        utc_time,
        local_time,
        latitude,
        latitude_decimal: latitude.decimal_degrees(),
        longitude,
        longitude_decimal: longitude.decimal_degrees(),
        altitude,
        channels: channel_list,
        battery_voltage,
        status_code,
        status_description,
    })
}

/// Convert a UTC time to a 12-hour local wall clock
///
/// 24-hour local hour is `(utc + offset) mod 24`; on the 12-hour clock,
/// 0 maps to 12 AM (midnight) and 12 to 12 PM (noon). Minutes and
/// seconds pass through unchanged.
pub fn to_local_time(utc: UtcTime, utc_offset_hours: i32) -> LocalTime {
    let hours24 = (utc.hours as i32 + utc_offset_hours).rem_euclid(24) as u8;

    let (hours, meridiem) = match hours24 {
        0 => (12, Meridiem::Am),
        12 => (12, Meridiem::Pm),
        h if h > 12 => (h - 12, Meridiem::Pm),
        h => (h, Meridiem::Am),
    };

    LocalTime {
        hours,
        minutes: utc.minutes,
        seconds: utc.seconds,
        meridiem,
    }
}

fn read_dms(
    bytes: &RawBytes,
    offset: usize,
    zero: Hemisphere,
    nonzero: Hemisphere,
) -> Result<DmsAngle> {
    Ok(DmsAngle {
        degrees: read_u8(bytes, offset)?,
        minutes: read_u8(bytes, offset + 1)?,
        seconds: read_u8(bytes, offset + 2)?,
        hemisphere: if read_u8(bytes, offset + 3)? == 0 {
            zero
        } else {
            nonzero
        },
    })
}

// Checked readers: the offsets are compile-time constants over a
// fixed-size payload, so these can only fail on a broken internal
// contract, which surfaces as OutOfRange instead of a panic.

fn read_u8(bytes: &[u8], offset: usize) -> Result<u8> {
    bytes
        .get(offset)
        .copied()
        .ok_or(DecoderError::OutOfRange {
            offset,
            len: bytes.len(),
        })
}

fn read_u16_be(bytes: &[u8], offset: usize) -> Result<u16> {
    Ok(u16::from_be_bytes([
        read_u8(bytes, offset)?,
        read_u8(bytes, offset + 1)?,
    ]))
}

fn read_u24_be(bytes: &[u8], offset: usize) -> Result<u32> {
    Ok(u32::from_be_bytes([
        0,
        read_u8(bytes, offset)?,
        read_u8(bytes, offset + 1)?,
        read_u8(bytes, offset + 2)?,
    ]))
}

fn read_i32_be(bytes: &[u8], offset: usize) -> Result<i32> {
    Ok(i32::from_be_bytes([
        read_u8(bytes, offset)?,
        read_u8(bytes, offset + 1)?,
        read_u8(bytes, offset + 2)?,
        read_u8(bytes, offset + 3)?,
    ]))
}
