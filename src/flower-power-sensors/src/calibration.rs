//! Calibration curves of the Flower Power sensors.
//!
//! Each conversion takes the raw register value, as read from the matching characteristic of
//! the live service, and returns the physical quantity as an `f64`.
//!
//! The coefficients were fitted by the device manufacturer against these exact expressions:
//! polynomials are evaluated term by term in the order written, with [`libm::pow`] for powers,
//! and are not to be refactored (e.g., into Horner form) as that changes the rounding of the
//! result.
//!
//! Clamping, where any, is applied once the whole expression has been evaluated.

/// Range of the temperature sensors, in °C.
pub const TEMPERATURE_RANGE: (f64, f64) = (-10.0, 55.0);

/// Range of the soil moisture sensor, in %.
pub const SOIL_MOISTURE_RANGE: (f64, f64) = (0.0, 60.0);

/// Decodes the raw register value from a characteristic value.
///
/// The first two bytes are interpreted as an unsigned little-endian 16-bit integer; trailing
/// bytes are ignored.
/// Returns `None` if `bytes` is shorter than two bytes.
#[must_use]
pub fn decode_raw(bytes: &[u8]) -> Option<u16> {
    bytes.first_chunk::<2>().map(|b| u16::from_le_bytes(*b))
}

/// Converts a raw light level into sunlight, in mol/m²/d.
///
/// The result is not clamped: a raw value of `0` yields `+∞`.
#[must_use]
pub fn light_level(raw: u16) -> f64 {
    let raw = f64::from(raw);

    0.0864 * (192_773.17 * libm::pow(raw, -1.060_661_9))
}

/// Converts a raw soil temperature into °C, clamped to [`TEMPERATURE_RANGE`].
#[must_use]
pub fn soil_temperature(raw: u16) -> f64 {
    temperature(raw)
}

/// Converts a raw air temperature into °C, clamped to [`TEMPERATURE_RANGE`].
///
/// Uses the same curve as [`soil_temperature()`].
#[must_use]
pub fn air_temperature(raw: u16) -> f64 {
    temperature(raw)
}

/// Converts a raw soil moisture into a volumetric water content, in %, clamped to
/// [`SOIL_MOISTURE_RANGE`].
#[must_use]
pub fn soil_moisture(raw: u16) -> f64 {
    let raw = f64::from(raw);

    // The second curve is applied to the result of the first one.
    let moisture = 11.4293
        + (1.0698e-9 * libm::pow(raw, 4.0) - 1.525_38e-6 * libm::pow(raw, 3.0)
            + 8.669_76e-4 * libm::pow(raw, 2.0)
            - 0.169_422 * raw);

    let moisture = 100.0
        * (4.5e-6 * libm::pow(moisture, 3.0) - 5.5e-4 * libm::pow(moisture, 2.0)
            + 0.0292 * moisture
            - 0.053);

    clamp(moisture, SOIL_MOISTURE_RANGE)
}

/// Decodes `bytes` with [`decode_raw()`] and converts it with [`light_level()`].
#[must_use]
pub fn light_level_from_bytes(bytes: &[u8]) -> Option<f64> {
    decode_raw(bytes).map(light_level)
}

/// Decodes `bytes` with [`decode_raw()`] and converts it with [`soil_temperature()`].
#[must_use]
pub fn soil_temperature_from_bytes(bytes: &[u8]) -> Option<f64> {
    decode_raw(bytes).map(soil_temperature)
}

/// Decodes `bytes` with [`decode_raw()`] and converts it with [`air_temperature()`].
#[must_use]
pub fn air_temperature_from_bytes(bytes: &[u8]) -> Option<f64> {
    decode_raw(bytes).map(air_temperature)
}

/// Decodes `bytes` with [`decode_raw()`] and converts it with [`soil_moisture()`].
#[must_use]
pub fn soil_moisture_from_bytes(bytes: &[u8]) -> Option<f64> {
    decode_raw(bytes).map(soil_moisture)
}

fn temperature(raw: u16) -> f64 {
    let raw = f64::from(raw);

    let temperature = 3.044e-8 * libm::pow(raw, 3.0) - 8.038e-5 * libm::pow(raw, 2.0)
        + raw * 0.1149
        - 30.45;

    clamp(temperature, TEMPERATURE_RANGE)
}

fn clamp(value: f64, (min, max): (f64, f64)) -> f64 {
    value.clamp(min, max)
}
