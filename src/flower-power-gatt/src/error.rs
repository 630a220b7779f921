//! Errors of an acquisition.
//!
//! `E` is the error type of the BLE stack, see [`PeripheralAccess::Error`](crate::PeripheralAccess::Error).

use flower_power_sensors::Label;
use uuid::Uuid;

/// A discovery error.
// NOTE(eq): not deriving `Eq` as `E` is not required to implement it.
#[derive(Debug, Clone, PartialEq)]
pub enum DiscoveryError<E> {
    /// The service is not present on the peripheral.
    ServiceNotFound(Uuid),
    /// The characteristic is not present in the service.
    CharacteristicNotFound(Uuid),
    /// The underlying BLE stack reported an error.
    Transport(E),
}

impl<E: core::fmt::Display> core::fmt::Display for DiscoveryError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ServiceNotFound(uuid) => write!(f, "service {uuid} not found"),
            Self::CharacteristicNotFound(uuid) => write!(f, "characteristic {uuid} not found"),
            Self::Transport(err) => write!(f, "discovery failed: {err}"),
        }
    }
}

impl<E: core::fmt::Debug + core::fmt::Display> core::error::Error for DiscoveryError<E> {}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for DiscoveryError<E> {
    fn format(&self, f: defmt::Formatter<'_>) {
        match self {
            Self::ServiceNotFound(uuid) => {
                defmt::write!(f, "service {} not found", defmt::Display2Format(uuid));
            }
            Self::CharacteristicNotFound(uuid) => {
                defmt::write!(f, "characteristic {} not found", defmt::Display2Format(uuid));
            }
            Self::Transport(err) => defmt::write!(f, "discovery failed: {}", err),
        }
    }
}

/// A characteristic read error.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadError<E> {
    /// The peripheral did not answer in time.
    Timeout,
    /// The value is too short to contain a raw register value.
    Truncated {
        /// Length of the value, in bytes.
        len: usize,
    },
    /// The underlying BLE stack reported an error.
    Transport(E),
}

impl<E: core::fmt::Display> core::fmt::Display for ReadError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Timeout => write!(f, "read timed out"),
            Self::Truncated { len } => {
                write!(f, "value too short: {len} byte(s), expected at least 2")
            }
            Self::Transport(err) => write!(f, "read failed: {err}"),
        }
    }
}

impl<E: core::fmt::Debug + core::fmt::Display> core::error::Error for ReadError<E> {}

/// An acquisition error.
///
/// Errors reported by [`PeripheralAccess`](crate::PeripheralAccess) are wrapped as is.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AcquisitionError<E> {
    /// Discovering the live service or its characteristics failed.
    Discovery(DiscoveryError<E>),
    /// Reading a characteristic failed.
    Read {
        /// Which value was being read.
        label: Label,
        /// The read error.
        source: ReadError<E>,
    },
}

impl<E> From<DiscoveryError<E>> for AcquisitionError<E> {
    fn from(err: DiscoveryError<E>) -> Self {
        Self::Discovery(err)
    }
}

impl<E: core::fmt::Display> core::fmt::Display for AcquisitionError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Discovery(err) => write!(f, "{err}"),
            Self::Read { label, source } => write!(f, "{label}: {source}"),
        }
    }
}

impl<E: core::fmt::Debug + core::fmt::Display + 'static> core::error::Error
    for AcquisitionError<E>
{
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Discovery(err) => Some(err),
            Self::Read { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use core::error::Error;

    use super::*;
    use crate::uuids;

    #[derive(Debug, Clone, PartialEq)]
    struct LinkLost;

    impl core::fmt::Display for LinkLost {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            write!(f, "link lost")
        }
    }

    #[test]
    fn display() {
        let err: AcquisitionError<LinkLost> =
            DiscoveryError::ServiceNotFound(uuids::LIVE_SERVICE).into();
        assert_eq!(
            err.to_string(),
            "service 39e1fa00-84a8-11e2-afba-0002a5d5c51b not found"
        );

        let err = AcquisitionError::Read {
            label: Label::AirTemperature,
            source: ReadError::Transport(LinkLost),
        };
        assert_eq!(err.to_string(), "Air temperature: read failed: link lost");

        let err: ReadError<LinkLost> = ReadError::Truncated { len: 1 };
        assert_eq!(
            err.to_string(),
            "value too short: 1 byte(s), expected at least 2"
        );
    }

    #[test]
    fn source_is_the_wrapped_error() {
        let err = AcquisitionError::Read {
            label: Label::SoilMoisture,
            source: ReadError::<LinkLost>::Timeout,
        };
        assert_eq!(err.source().unwrap().to_string(), "read timed out");

        let err: AcquisitionError<LinkLost> = DiscoveryError::Transport(LinkLost).into();
        assert_eq!(
            err.source().unwrap().to_string(),
            "discovery failed: link lost"
        );
    }
}
