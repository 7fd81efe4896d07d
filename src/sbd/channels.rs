//! # Analog Channel Calibration
//!
//! Converts raw 16-bit ADC readings into voltages and sensor-specific
//! measurements for the seven analog ports on the flight computer.

use std::fmt;

use serde::Serialize;

/// ADC counts to volts conversion factor
pub const ADC_TO_VOLTAGE: f32 = 0.004888;

/// The battery line sits behind a voltage divider, halving the reading
pub const BATTERY_DIVIDER: f32 = 2.0;

/// Sensor wired to each analog port, in fixed port order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SensorKind {
    InternalTemperature,
    Pressure,
    UvLight,
    Unused,
    ExternalTemperature,
    AccelerationY,
    AccelerationX,
}

impl SensorKind {
    /// Sensor wired to the given port (0-6)
    pub fn for_port(port: usize) -> SensorKind {
        match port {
            0 => SensorKind::InternalTemperature,
            1 => SensorKind::Pressure,
            2 => SensorKind::UvLight,
            3 => SensorKind::Unused,
            4 => SensorKind::ExternalTemperature,
            5 => SensorKind::AccelerationY,
            _ => SensorKind::AccelerationX,
        }
    }

    /// Label as printed by the reference output
    pub fn label(&self) -> &'static str {
        match self {
            SensorKind::InternalTemperature => "Internal Temperature",
            SensorKind::Pressure => "Pressure",
            SensorKind::UvLight => "UV Light Sensor",
            SensorKind::Unused => "N/A",
            SensorKind::ExternalTemperature => "External Temperature",
            SensorKind::AccelerationY => "Acceleration Y-axis",
            SensorKind::AccelerationX => "Acceleration X-axis",
        }
    }

    /// Apply this sensor's calibration to a voltage
    ///
    /// Offsets and scales come from the flight sensor datasheets and
    /// pre-flight bench calibration.
    pub fn calibrate(&self, voltage: f32) -> Measurement {
        match self {
            SensorKind::InternalTemperature => {
                let celsius = (voltage - 0.489) / 0.0096;
                Measurement::Temperature {
                    celsius,
                    fahrenheit: celsius * 1.8 + 32.0,
                }
            }
            SensorKind::Pressure => Measurement::Pressure {
                psi: (voltage - 0.580) / 0.267,
            },
            SensorKind::UvLight => Measurement::UvIndex {
                index: voltage / 0.1,
            },
            SensorKind::Unused => Measurement::RawVoltage { volts: voltage },
            SensorKind::ExternalTemperature => {
                let celsius = (voltage - 0.495) / 0.0095;
                Measurement::Temperature {
                    celsius,
                    fahrenheit: celsius * 1.8 + 32.0,
                }
            }
            SensorKind::AccelerationY => Measurement::Acceleration {
                g: (voltage - 1.612) / 0.222,
            },
            SensorKind::AccelerationX => Measurement::Acceleration {
                g: (voltage - 1.623) / 0.21,
            },
        }
    }
}

/// Calibrated measurement in the sensor's own unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Measurement {
    Temperature { celsius: f32, fahrenheit: f32 },
    Pressure { psi: f32 },
    UvIndex { index: f32 },
    RawVoltage { volts: f32 },
    Acceleration { g: f32 },
}

impl fmt::Display for Measurement {
    /// Formats exactly as the reference output does
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measurement::Temperature {
                celsius,
                fahrenheit,
            } => write!(f, "{:.2} °C / {:.2} °F", celsius, fahrenheit),
            Measurement::Pressure { psi } => write!(f, "{:.2} PSI", psi),
            Measurement::UvIndex { index } => write!(f, "{:.2} UV Index", index),
            Measurement::RawVoltage { volts } => write!(f, "{:.2} V", volts),
            Measurement::Acceleration { g } => write!(f, "{:.4} G", g),
        }
    }
}

/// One decoded analog channel
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalogChannel {
    /// Port number (0-6)
    pub port: u8,

    /// Sensor wired to this port
    pub sensor: SensorKind,

    /// Raw 16-bit ADC value (msb * 256 + lsb)
    pub raw: u16,

    /// Converted voltage
    pub voltage: f32,

    /// Calibrated measurement
    pub measurement: Measurement,
}

/// Convert a raw ADC reading to volts
pub fn raw_to_voltage(raw: u16) -> f32 {
    raw as f32 * ADC_TO_VOLTAGE
}

/// Convert the battery pair's raw reading to volts
///
/// Doubled relative to the standard channel scale to undo the divider.
pub fn battery_voltage(raw: u16) -> f32 {
    raw_to_voltage(raw) * BATTERY_DIVIDER
}

/// Decode one analog channel from its raw ADC value
pub fn decode_channel(port: usize, raw: u16) -> AnalogChannel {
    let sensor = SensorKind::for_port(port);
    let voltage = raw_to_voltage(raw);

    AnalogChannel {
        port: port as u8,
        sensor,
        raw,
        voltage,
        measurement: sensor.calibrate(voltage),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_assignments() {
        assert_eq!(SensorKind::for_port(0), SensorKind::InternalTemperature);
        assert_eq!(SensorKind::for_port(1), SensorKind::Pressure);
        assert_eq!(SensorKind::for_port(2), SensorKind::UvLight);
        assert_eq!(SensorKind::for_port(3), SensorKind::Unused);
        assert_eq!(SensorKind::for_port(4), SensorKind::ExternalTemperature);
        assert_eq!(SensorKind::for_port(5), SensorKind::AccelerationY);
        assert_eq!(SensorKind::for_port(6), SensorKind::AccelerationX);
    }

    #[test]
    fn test_raw_to_voltage() {
        assert_eq!(raw_to_voltage(0), 0.0);
        assert!((raw_to_voltage(1000) - 4.888).abs() < 1e-4);
    }

    #[test]
    fn test_battery_voltage_doubled() {
        assert_eq!(battery_voltage(0), 0.0);
        assert!((battery_voltage(500) - 2.0 * 500.0 * ADC_TO_VOLTAGE).abs() < 1e-6);
    }

    #[test]
    fn test_internal_temperature_at_zero_volts() {
        let measurement = SensorKind::InternalTemperature.calibrate(0.0);
        match measurement {
            Measurement::Temperature {
                celsius,
                fahrenheit,
            } => {
                assert!((celsius - (-0.489 / 0.0096)).abs() < 1e-3);
                assert!((fahrenheit - (celsius * 1.8 + 32.0)).abs() < 1e-3);
            }
            other => panic!("expected temperature, got {:?}", other),
        }
    }

    #[test]
    fn test_external_temperature_scale() {
        // 1.0 V should read (1.0 - 0.495) / 0.0095 degrees C
        match SensorKind::ExternalTemperature.calibrate(1.0) {
            Measurement::Temperature { celsius, .. } => {
                assert!((celsius - 53.157894).abs() < 1e-3);
            }
            other => panic!("expected temperature, got {:?}", other),
        }
    }

    #[test]
    fn test_pressure_calibration() {
        match SensorKind::Pressure.calibrate(0.580) {
            Measurement::Pressure { psi } => assert!(psi.abs() < 1e-6),
            other => panic!("expected pressure, got {:?}", other),
        }
    }

    #[test]
    fn test_uv_index_is_voltage_over_tenth() {
        match SensorKind::UvLight.calibrate(0.35) {
            Measurement::UvIndex { index } => assert!((index - 3.5).abs() < 1e-5),
            other => panic!("expected UV index, got {:?}", other),
        }
    }

    #[test]
    fn test_accelerometers_zero_g_near_offset_voltage() {
        match SensorKind::AccelerationY.calibrate(1.612) {
            Measurement::Acceleration { g } => assert!(g.abs() < 1e-5),
            other => panic!("expected acceleration, got {:?}", other),
        }
        match SensorKind::AccelerationX.calibrate(1.623) {
            Measurement::Acceleration { g } => assert!(g.abs() < 1e-5),
            other => panic!("expected acceleration, got {:?}", other),
        }
    }

    #[test]
    fn test_unused_port_passes_voltage_through() {
        match SensorKind::Unused.calibrate(1.25) {
            Measurement::RawVoltage { volts } => assert_eq!(volts, 1.25),
            other => panic!("expected raw voltage, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_channel() {
        let channel = decode_channel(2, 100);
        assert_eq!(channel.port, 2);
        assert_eq!(channel.sensor, SensorKind::UvLight);
        assert_eq!(channel.raw, 100);
        assert!((channel.voltage - 0.4888).abs() < 1e-5);
    }

    #[test]
    fn test_measurement_display_formats() {
        let temp = Measurement::Temperature {
            celsius: 21.5,
            fahrenheit: 70.7,
        };
        assert_eq!(temp.to_string(), "21.50 °C / 70.70 °F");

        let accel = Measurement::Acceleration { g: 0.05 };
        assert_eq!(accel.to_string(), "0.0500 G");

        let uv = Measurement::UvIndex { index: 2.0 };
        assert_eq!(uv.to_string(), "2.00 UV Index");
    }
}
