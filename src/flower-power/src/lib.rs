//! Retrieves live sensor values from Parrot Flower Power plant monitors.
//!
//! The BLE stack is not part of this crate: implement [`gatt::PeripheralAccess`] for a
//! connected peripheral of the stack in use, then run a [`LiveDataAcquisition`] on it.
//!
//! ```ignore
//! use flower_power::{LiveDataAcquisition, Reading};
//!
//! let snapshot = LiveDataAcquisition::new().execute(&mut peripheral).await?;
//!
//! for (axis, value) in snapshot.reading_axes().iter().zip(snapshot.values()) {
//!     info!("{}: {:.2} {}", axis.label(), value, axis.unit());
//! }
//! ```
//!
//! # Cargo features
#![doc = document_features::document_features!(feature_label = r#"<span class="stab portability"><code>{feature}</code></span>"#)]
#![no_std]
#![deny(missing_docs)]
#![deny(clippy::pedantic)]

#[doc(inline)]
pub use flower_power_gatt as gatt;
#[doc(inline)]
pub use flower_power_log as log;
#[doc(inline)]
pub use flower_power_sensors as sensors;

pub use flower_power_gatt::{AcquisitionError, LiveDataAcquisition};
pub use flower_power_sensors::{calibration, Reading, SensorSnapshot};
