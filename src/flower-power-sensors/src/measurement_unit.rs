/// Represents a unit of measurement.
///
/// Only the units reported by the Flower Power live service are listed.
// Built upon https://bthome.io/format/#sensor-data
// and https://www.iana.org/assignments/senml/senml.xhtml
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum MeasurementUnit {
    /// Degrees Celsius (°C).
    Celsius,
    /// Daily light integral (mol/m²/d): photons received per square meter over a day.
    MolePerSquareMeterPerDay,
    /// Percent (%).
    Percent,
}

impl core::fmt::Display for MeasurementUnit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Celsius => write!(f, "°C"), // The Unicode Standard v15 recommends using U+00B0 + U+0043.
            Self::MolePerSquareMeterPerDay => write!(f, "mol/m²/d"),
            Self::Percent => write!(f, "%"),
        }
    }
}
