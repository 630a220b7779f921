//! Provides the [`Reading`] trait and the [`ReadingAxis`] describing each value of a reading.

use crate::{Label, MeasurementUnit, Value};

/// Represents a reading returned by a sensor device, made of one or more [`Value`]s.
pub trait Reading: core::fmt::Debug {
    /// Returns the first value returned by [`Reading::values()`].
    fn value(&self) -> Value;

    /// Returns an iterator over [`Value`]s of a sensor reading.
    ///
    /// The order of [`Value`]s is not significant, but is fixed, and matches the order of the
    /// [`ReadingAxis`] list of the reading type.
    ///
    /// # For implementors
    ///
    /// The default implementation must be overridden on types containing multiple
    /// [`Value`]s.
    fn values(&self) -> impl ExactSizeIterator<Item = Value> {
        [self.value()].into_iter()
    }
}

/// Describes one [`Value`] of a [`Reading`]: what it measures and in which unit.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReadingAxis {
    label: Label,
    unit: MeasurementUnit,
}

impl ReadingAxis {
    /// Creates a new [`ReadingAxis`].
    #[must_use]
    pub const fn new(label: Label, unit: MeasurementUnit) -> Self {
        Self { label, unit }
    }

    /// Returns the [`Label`] of this axis.
    #[must_use]
    pub fn label(&self) -> Label {
        self.label
    }

    /// Returns the unit of measurement of this axis.
    #[must_use]
    pub fn unit(&self) -> MeasurementUnit {
        self.unit
    }
}
