//! # Reference Text Rendering
//!
//! Formats a decoded [`TelemetryRecord`] the way the original ground
//! software printed it, preserving field order and labels for
//! compatibility. Presentation only; the decoder itself never prints.

use std::fmt::Write;

use crate::sbd::{hex, TelemetryRecord};

/// Render a record as the reference multi-line report
///
/// `zone_label` names the local timezone (e.g. "ARIZONA") and
/// `expected_header` is the ASCII marker the header is checked against.
pub fn render(record: &TelemetryRecord, zone_label: &str, expected_header: &str) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Hexadecimal Input: {}", hex::encode_hex(&record.bytes));
    let _ = writeln!(out);

    let _ = writeln!(out, "Decimal Output:");
    let decimals: Vec<String> = record.bytes.iter().map(|b| b.to_string()).collect();
    let _ = writeln!(out, "{}", decimals.join(" "));
    let _ = writeln!(out);

    let header_note = if record.header == expected_header {
        ""
    } else {
        " (unexpected header)"
    };
    let _ = writeln!(out, "ASCII Representation: {}{}", record.header, header_note);
    let _ = writeln!(out, "RockBLOCK Serial Number: {}", record.serial_number);

    let local = &record.local_time;
    let _ = writeln!(
        out,
        "{} Time: {}:{}:{} {}",
        zone_label,
        local.hours,
        local.minutes,
        local.seconds,
        local.meridiem.label()
    );
    let utc = &record.utc_time;
    let _ = writeln!(
        out,
        "UTC Time: {} hours, {} minutes, {} seconds",
        utc.hours, utc.minutes, utc.seconds
    );

    let lat = &record.latitude;
    let _ = writeln!(
        out,
        "Latitude: {}° {}' {}\" {}",
        lat.degrees,
        lat.minutes,
        lat.seconds,
        lat.hemisphere.label()
    );
    let lon = &record.longitude;
    let _ = writeln!(
        out,
        "Longitude: {}° {}' {}\" {}",
        lon.degrees,
        lon.minutes,
        lon.seconds,
        lon.hemisphere.label()
    );
    let _ = writeln!(out, "Latitude in Decimal: {}", record.latitude_decimal);
    let _ = writeln!(out, "Longitude in Decimal: {}", record.longitude_decimal);

    let _ = writeln!(
        out,
        "Altitude: {} {}",
        record.altitude.value,
        record.altitude.unit.label()
    );

    let _ = writeln!(out, "Analog Data:");
    for channel in &record.channels {
        let _ = writeln!(
            out,
            "Port {}, {}, {:.3} V, {}",
            channel.port,
            channel.sensor.label(),
            channel.voltage,
            channel.measurement
        );
    }

    let _ = writeln!(out, "Battery Voltage: {:.3} V", record.battery_voltage);
    let _ = writeln!(out);
    let _ = writeln!(out, "Modem Return Code: {}", record.status_code);
    let _ = writeln!(out, "Status: {}", record.status_description);

    out
}
