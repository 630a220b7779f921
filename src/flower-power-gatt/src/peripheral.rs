//! Provides the traits a GATT client must implement to be used for an acquisition.

use core::future::Future;

use uuid::Uuid;

use crate::error::{DiscoveryError, ReadError};

/// Represents a discovered GATT attribute (a service or a characteristic).
pub trait Attribute {
    /// Returns the identifier of the attribute.
    fn uuid(&self) -> Uuid;
}

/// Represents access to a connected peripheral.
///
/// The connection itself (scanning, connecting, pairing) is managed by the implementor.
/// Implementations are expected to serialize operations on the connection: only one discovery
/// or read is in progress at any time, which is guaranteed by these methods taking
/// `&mut self`.
///
/// Timeouts, if any, are enforced by the implementor and reported as errors; the futures
/// returned may also be dropped to cancel an operation.
pub trait PeripheralAccess {
    /// A discovered service.
    type Service: Attribute;
    /// A discovered characteristic.
    type Characteristic: Attribute;
    /// Services returned by [`PeripheralAccess::discover_services()`].
    type Services: IntoIterator<Item = Self::Service>;
    /// Characteristics returned by [`PeripheralAccess::discover_characteristics()`].
    type Characteristics: IntoIterator<Item = Self::Characteristic>;
    /// Error reported by the underlying BLE stack.
    type Error;

    /// Discovers the services of the peripheral with the given identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::ServiceNotFound`] if none of the services are present, or
    /// [`DiscoveryError::Transport`] if the discovery failed.
    fn discover_services(
        &mut self,
        uuids: &[Uuid],
    ) -> impl Future<Output = Result<Self::Services, DiscoveryError<Self::Error>>>;

    /// Discovers the characteristics of `service` with the given identifiers.
    ///
    /// Characteristics are expected in the order of `uuids`.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::CharacteristicNotFound`] if one of the characteristics is
    /// missing, or [`DiscoveryError::Transport`] if the discovery failed.
    fn discover_characteristics(
        &mut self,
        service: &Self::Service,
        uuids: &[Uuid],
    ) -> impl Future<Output = Result<Self::Characteristics, DiscoveryError<Self::Error>>>;

    /// Reads the current value of `characteristic` into `buf`, and returns the number of bytes
    /// read.
    ///
    /// The returned length must not exceed `buf.len()`; values longer than `buf` are
    /// truncated.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::Timeout`] if the peripheral did not answer in time, or
    /// [`ReadError::Transport`] if the read failed.
    fn read_characteristic(
        &mut self,
        characteristic: &Self::Characteristic,
        buf: &mut [u8],
    ) -> impl Future<Output = Result<usize, ReadError<Self::Error>>>;
}
