//! Provides the sensor value model of the Flower Power live data, and the calibration curves
//! converting raw register values into physical quantities.
//!
//! The [`calibration`] functions are pure and total over the raw `u16` domain.
//! [`SensorSnapshot`] is the composite result of one acquisition; its values can be iterated
//! through the [`Reading`] trait, along with the matching [`ReadingAxis`].

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![deny(clippy::pedantic)]

pub mod calibration;
mod label;
mod measurement_unit;
pub mod sensor;
mod snapshot;
mod value;

pub use label::Label;
pub use measurement_unit::MeasurementUnit;
pub use sensor::{Reading, ReadingAxis};
pub use snapshot::SensorSnapshot;
pub use value::Value;
