/// Represents a calibrated value obtained from the sensor device.
///
/// # Unit of measurement
///
/// The unit of measurement can be obtained using
/// [`ReadingAxis::unit()`](crate::sensor::ReadingAxis::unit), from the axis at the same position
/// as this value.
// NOTE(derive): we do not implement `PartialOrd` on purpose, as comparing values requires the
// `ReadingAxis` associated with each of them.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Value {
    value: f64,
}

impl Value {
    /// Creates a new value.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self { value }
    }

    /// Returns the value.
    #[must_use]
    pub fn get(&self) -> f64 {
        self.value
    }
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Honor the precision requested by the caller, if any.
        if let Some(precision) = f.precision() {
            write!(f, "{:.*}", precision, self.value)
        } else {
            write!(f, "{}", self.value)
        }
    }
}
