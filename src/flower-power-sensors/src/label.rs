/// Label of a [`Value`](crate::Value) part of a [`SensorSnapshot`](crate::SensorSnapshot).
///
/// Each label corresponds to one characteristic of the live service.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Label {
    /// Sunlight reaching the sensor.
    LightLevel,
    /// Temperature measured in the soil.
    SoilTemperature,
    /// Temperature of the surrounding air.
    AirTemperature,
    /// Volumetric water content of the soil.
    SoilMoisture,
}

impl core::fmt::Display for Label {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::LightLevel => write!(f, "Light level"),
            Self::SoilTemperature => write!(f, "Soil temperature"),
            Self::AirTemperature => write!(f, "Air temperature"),
            Self::SoilMoisture => write!(f, "Soil moisture"),
        }
    }
}
