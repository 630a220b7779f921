//! Retrieves the live sensor values of a Flower Power over GATT.
//!
//! The GATT client itself is not provided: it is accessed through the [`PeripheralAccess`]
//! trait, which the BLE stack in use must implement for a connected peripheral.
//! [`LiveDataAcquisition::execute()`] then discovers the live service and its characteristics,
//! reads them one after the other, and converts the raw values into a [`SensorSnapshot`].
//!
//! # Cargo features
//!
//! - `defmt`: logs through `defmt` and implements `defmt::Format` on the public types.
//! - `log`: logs through the `log` facade.

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![deny(clippy::pedantic)]

mod acquisition;
pub mod error;
pub mod peripheral;
pub mod uuids;

pub use acquisition::{LiveDataAcquisition, VALUE_BUFFER_SIZE};
pub use error::{AcquisitionError, DiscoveryError, ReadError};
pub use peripheral::{Attribute, PeripheralAccess};

pub use flower_power_sensors::SensorSnapshot;
pub use uuid::Uuid;
