//! # SBD Payload Layout
//!
//! Byte offsets and record types for the fixed 50-byte RockBLOCK
//! telemetry payload.

use serde::Serialize;

/// Payload size in bytes
pub const SBD_PAYLOAD_SIZE: usize = 50;

/// Hex input length (two characters per byte)
pub const SBD_HEX_INPUT_LEN: usize = SBD_PAYLOAD_SIZE * 2;

/// ASCII header (2 bytes)
pub const OFFSET_HEADER: usize = 0;

/// RockBLOCK serial number, big-endian 24-bit unsigned (3 bytes)
pub const OFFSET_SERIAL: usize = 2;

/// UTC time: hour, minute, second (raw bytes)
pub const OFFSET_UTC_HOURS: usize = 5;
pub const OFFSET_UTC_MINUTES: usize = 6;
pub const OFFSET_UTC_SECONDS: usize = 7;

/// Latitude: degrees, minutes, seconds, hemisphere flag (0 = N, else S)
pub const OFFSET_LATITUDE: usize = 8;

/// Longitude: degrees, minutes, seconds, hemisphere flag (0 = E, else W)
pub const OFFSET_LONGITUDE: usize = 12;

/// Altitude, big-endian 32-bit signed (4 bytes)
pub const OFFSET_ALTITUDE: usize = 16;

/// Altitude unit flag (0 = meters, else feet)
pub const OFFSET_ALTITUDE_UNIT: usize = 20;

/// First analog channel (MSB, LSB) pair
pub const OFFSET_ANALOG_BASE: usize = 21;

/// Number of analog channels
pub const ANALOG_CHANNEL_COUNT: usize = 7;

/// Bytes per analog channel
pub const BYTES_PER_CHANNEL: usize = 2;

/// Battery (MSB, LSB) pair, doubled voltage scale
pub const OFFSET_BATTERY: usize = 35;

// Bytes 37-47 are reserved by this format version and not interpreted.

/// Modem status code, big-endian 16-bit unsigned (2 bytes)
pub const OFFSET_STATUS: usize = 48;

/// Expected ASCII header for a RockBLOCK payload
pub const EXPECTED_HEADER: &str = "RB";

/// Raw payload bytes, exactly 50 of them
pub type RawBytes = [u8; SBD_PAYLOAD_SIZE];

/// Serde lacks `Serialize` impls for arrays longer than 32 elements, so
/// serialize the raw payload through its slice (same sequence output).
fn serialize_raw_bytes<S>(bytes: &RawBytes, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    bytes[..].serialize(serializer)
}

/// UTC wall-clock time as transmitted by the modem
///
/// Raw bytes are passed through unmodified; values above 23/59 are the
/// modem's problem, not ours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UtcTime {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

/// AM/PM half of a 12-hour clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn label(&self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

/// Local 12-hour wall-clock time derived from [`UtcTime`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalTime {
    /// Hour on a 12-hour clock (1-12)
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub meridiem: Meridiem,
}

/// Hemisphere decoded from the flag byte following each DMS triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Single-letter label as printed by the reference output
    pub fn label(&self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
            Hemisphere::East => 'E',
            Hemisphere::West => 'W',
        }
    }

    /// South and West negate the decimal coordinate
    pub fn is_negative(&self) -> bool {
        matches!(self, Hemisphere::South | Hemisphere::West)
    }
}

/// Degrees-minutes-seconds angle with hemisphere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DmsAngle {
    pub degrees: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub hemisphere: Hemisphere,
}

impl DmsAngle {
    /// Convert to signed decimal degrees
    ///
    /// `deg + min/60 + sec/3600`, negated for South and West.
    pub fn decimal_degrees(&self) -> f64 {
        let value = self.degrees as f64
            + (self.minutes as f64 / 60.0)
            + (self.seconds as f64 / 3600.0);
        if self.hemisphere.is_negative() {
            -value
        } else {
            value
        }
    }
}

/// Altitude unit selected by the flag byte at offset 20
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AltitudeUnit {
    Meters,
    Feet,
}

impl AltitudeUnit {
    pub fn label(&self) -> &'static str {
        match self {
            AltitudeUnit::Meters => "meters",
            AltitudeUnit::Feet => "feet",
        }
    }
}

/// Altitude value plus its unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Altitude {
    pub value: i32,
    pub unit: AltitudeUnit,
}

/// Fully decoded telemetry record
///
/// Every field is a pure function of the raw payload bytes; the record is
/// immutable once constructed.
#[derive(Debug, Clone, Serialize)]
pub struct TelemetryRecord {
    /// Raw payload, kept for the decimal-dump rendering
    #[serde(serialize_with = "serialize_raw_bytes")]
    pub bytes: RawBytes,

    /// Two ASCII header characters (expected `"RB"`)
    pub header: String,

    /// Whether the header matches the expected RockBLOCK marker
    pub header_valid: bool,

    /// RockBLOCK serial number (24-bit)
    pub serial_number: u32,

    /// UTC time as transmitted
    pub utc_time: UtcTime,

    /// Derived local 12-hour time
    pub local_time: LocalTime,

    /// Latitude in DMS with hemisphere
    pub latitude: DmsAngle,

    /// Latitude in signed decimal degrees
    pub latitude_decimal: f64,

    /// Longitude in DMS with hemisphere
    pub longitude: DmsAngle,

    /// Longitude in signed decimal degrees
    pub longitude_decimal: f64,

    /// Altitude with its unit flag
    pub altitude: Altitude,

    /// The seven analog sensor channels, in port order
    pub channels: [super::channels::AnalogChannel; ANALOG_CHANNEL_COUNT],

    /// Battery voltage (doubled relative to the standard channel scale)
    pub battery_voltage: f32,

    /// Modem status code from the trailing byte pair
    pub status_code: u16,

    /// Human-readable status description
    pub status_description: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_constants() {
        assert_eq!(SBD_PAYLOAD_SIZE, 50);
        assert_eq!(SBD_HEX_INPUT_LEN, 100);

        // Last analog pair must end right before the battery pair
        let last_channel_end =
            OFFSET_ANALOG_BASE + ANALOG_CHANNEL_COUNT * BYTES_PER_CHANNEL;
        assert_eq!(last_channel_end, OFFSET_BATTERY);

        // Status pair is the final two bytes
        assert_eq!(OFFSET_STATUS + 2, SBD_PAYLOAD_SIZE);
    }

    #[test]
    fn test_decimal_degrees_north() {
        let angle = DmsAngle {
            degrees: 33,
            minutes: 30,
            seconds: 36,
            hemisphere: Hemisphere::North,
        };
        assert!((angle.decimal_degrees() - 33.51).abs() < 1e-9);
    }

    #[test]
    fn test_decimal_degrees_negated_south_west() {
        let south = DmsAngle {
            degrees: 12,
            minutes: 0,
            seconds: 0,
            hemisphere: Hemisphere::South,
        };
        assert_eq!(south.decimal_degrees(), -12.0);

        let west = DmsAngle {
            degrees: 112,
            minutes: 4,
            seconds: 12,
            hemisphere: Hemisphere::West,
        };
        assert!(west.decimal_degrees() < 0.0);
    }

    #[test]
    fn test_hemisphere_labels() {
        assert_eq!(Hemisphere::North.label(), 'N');
        assert_eq!(Hemisphere::South.label(), 'S');
        assert_eq!(Hemisphere::East.label(), 'E');
        assert_eq!(Hemisphere::West.label(), 'W');
        assert!(!Hemisphere::North.is_negative());
        assert!(!Hemisphere::East.is_negative());
        assert!(Hemisphere::South.is_negative());
        assert!(Hemisphere::West.is_negative());
    }

    #[test]
    fn test_altitude_unit_labels() {
        assert_eq!(AltitudeUnit::Meters.label(), "meters");
        assert_eq!(AltitudeUnit::Feet.label(), "feet");
    }
}
