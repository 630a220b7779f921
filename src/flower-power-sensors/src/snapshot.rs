use crate::{calibration, Label, MeasurementUnit, Reading, ReadingAxis, Value};

/// Live sensor values of a Flower Power, converted into physical units.
///
/// A snapshot is only ever created from a complete set of raw values: there is no partial
/// snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorSnapshot {
    light_level: f64,
    soil_temperature: f64,
    air_temperature: f64,
    soil_moisture: f64,
}

impl SensorSnapshot {
    /// Axes of the values returned by [`Reading::values()`], in the same order.
    pub const READING_AXES: [ReadingAxis; 4] = [
        ReadingAxis::new(Label::LightLevel, MeasurementUnit::MolePerSquareMeterPerDay),
        ReadingAxis::new(Label::SoilTemperature, MeasurementUnit::Celsius),
        ReadingAxis::new(Label::AirTemperature, MeasurementUnit::Celsius),
        ReadingAxis::new(Label::SoilMoisture, MeasurementUnit::Percent),
    ];

    /// Converts the raw register values of the four live characteristics into a snapshot.
    #[must_use]
    pub fn from_raw(
        light_level: u16,
        soil_temperature: u16,
        air_temperature: u16,
        soil_moisture: u16,
    ) -> Self {
        Self {
            light_level: calibration::light_level(light_level),
            soil_temperature: calibration::soil_temperature(soil_temperature),
            air_temperature: calibration::air_temperature(air_temperature),
            soil_moisture: calibration::soil_moisture(soil_moisture),
        }
    }

    /// Returns the axes of the values returned by [`Reading::values()`].
    #[must_use]
    pub fn reading_axes(&self) -> [ReadingAxis; 4] {
        Self::READING_AXES
    }

    /// Returns the sunlight, in mol/m²/d.
    #[must_use]
    pub fn light_level(&self) -> f64 {
        self.light_level
    }

    /// Returns the soil temperature, in °C.
    #[must_use]
    pub fn soil_temperature(&self) -> f64 {
        self.soil_temperature
    }

    /// Returns the air temperature, in °C.
    #[must_use]
    pub fn air_temperature(&self) -> f64 {
        self.air_temperature
    }

    /// Returns the soil moisture, in %.
    #[must_use]
    pub fn soil_moisture(&self) -> f64 {
        self.soil_moisture
    }
}

impl Reading for SensorSnapshot {
    fn value(&self) -> Value {
        Value::new(self.light_level)
    }

    fn values(&self) -> impl ExactSizeIterator<Item = Value> {
        [
            Value::new(self.light_level),
            Value::new(self.soil_temperature),
            Value::new(self.air_temperature),
            Value::new(self.soil_moisture),
        ]
        .into_iter()
    }
}

impl core::fmt::Display for SensorSnapshot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, (axis, value)) in Self::READING_AXES.iter().zip(self.values()).enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {:.2} {}", axis.label(), value, axis.unit())?;
        }
        Ok(())
    }
}
