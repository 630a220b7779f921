use flower_power_log::{debug, trace, warn};
use flower_power_sensors::{calibration, Label, SensorSnapshot};

use crate::{
    error::{AcquisitionError, DiscoveryError, ReadError},
    peripheral::{Attribute, PeripheralAccess},
    uuids::{
        AIR_TEMPERATURE, LIGHT_LEVEL, LIVE_CHARACTERISTICS, LIVE_SERVICE, SOIL_MOISTURE,
        SOIL_TEMPERATURE,
    },
};

/// Size of the buffer each characteristic value is read into, in bytes.
///
/// Can be set with the `CONFIG_FLOWER_POWER_VALUE_BUFFER_SIZE` environment variable at build
/// time; defaults to the payload size of the default ATT MTU.
pub const VALUE_BUFFER_SIZE: usize =
    flower_power_utils::usize_from_env_or!("CONFIG_FLOWER_POWER_VALUE_BUFFER_SIZE", 20);

const _: () = assert!(
    VALUE_BUFFER_SIZE >= 2,
    "CONFIG_FLOWER_POWER_VALUE_BUFFER_SIZE must be at least 2"
);

/// Retrieves a [`SensorSnapshot`] from a connected Flower Power.
///
/// Holds no state: the same instance can be used for any number of peripherals, including
/// concurrently as long as each acquisition has its own peripheral.
#[derive(Debug, Default, Copy, Clone)]
pub struct LiveDataAcquisition;

impl LiveDataAcquisition {
    /// Creates a new acquisition.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Discovers the live service and its characteristics on `peripheral`, reads the
    /// characteristics and returns the converted values.
    ///
    /// Characteristics are read one at a time, in the order of
    /// [`LIVE_CHARACTERISTICS`](crate::uuids::LIVE_CHARACTERISTICS), each read completing
    /// before the next one is issued.
    /// Nothing is retried.
    ///
    /// # Errors
    ///
    /// Returns [`AcquisitionError::Discovery`] if the live service or one of its
    /// characteristics cannot be discovered, in which case no read is attempted.
    /// Returns [`AcquisitionError::Read`] as soon as one of the reads fails; the values read
    /// before are discarded.
    pub async fn execute<P: PeripheralAccess>(
        &self,
        peripheral: &mut P,
    ) -> Result<SensorSnapshot, AcquisitionError<P::Error>> {
        let service = peripheral
            .discover_services(&[LIVE_SERVICE])
            .await?
            .into_iter()
            .find(|service| service.uuid() == LIVE_SERVICE)
            .ok_or(DiscoveryError::<P::Error>::ServiceNotFound(LIVE_SERVICE))?;
        debug!("discovered live service");

        let discovered = peripheral
            .discover_characteristics(&service, &LIVE_CHARACTERISTICS)
            .await?;
        let characteristics = LiveCharacteristics::bind(discovered)
            .map_err(DiscoveryError::<P::Error>::CharacteristicNotFound)?;
        debug!("discovered live characteristics");

        // The peripheral handles a single request at a time.
        let light_level =
            read_raw(peripheral, &characteristics.light_level, Label::LightLevel).await?;
        let soil_temperature = read_raw(
            peripheral,
            &characteristics.soil_temperature,
            Label::SoilTemperature,
        )
        .await?;
        let air_temperature = read_raw(
            peripheral,
            &characteristics.air_temperature,
            Label::AirTemperature,
        )
        .await?;
        let soil_moisture =
            read_raw(peripheral, &characteristics.soil_moisture, Label::SoilMoisture).await?;

        let snapshot = SensorSnapshot::from_raw(
            light_level,
            soil_temperature,
            air_temperature,
            soil_moisture,
        );
        debug!("live data: {}", snapshot);

        Ok(snapshot)
    }
}

/// The live characteristics, bound by identifier.
struct LiveCharacteristics<C> {
    light_level: C,
    soil_temperature: C,
    air_temperature: C,
    soil_moisture: C,
}

impl<C: Attribute> LiveCharacteristics<C> {
    /// Binds each discovered characteristic to its value.
    ///
    /// Returns the identifier of the first missing characteristic, in the order of
    /// [`LIVE_CHARACTERISTICS`], if any is missing.
    fn bind(discovered: impl IntoIterator<Item = C>) -> Result<Self, uuid::Uuid> {
        let mut light_level = None;
        let mut soil_temperature = None;
        let mut air_temperature = None;
        let mut soil_moisture = None;

        for characteristic in discovered {
            let uuid = characteristic.uuid();
            let slot = if uuid == LIGHT_LEVEL {
                &mut light_level
            } else if uuid == SOIL_TEMPERATURE {
                &mut soil_temperature
            } else if uuid == AIR_TEMPERATURE {
                &mut air_temperature
            } else if uuid == SOIL_MOISTURE {
                &mut soil_moisture
            } else {
                warn!("ignoring unrequested characteristic");
                continue;
            };
            // Keep the first one if a characteristic is reported twice.
            slot.get_or_insert(characteristic);
        }

        Ok(Self {
            light_level: light_level.ok_or(LIGHT_LEVEL)?,
            soil_temperature: soil_temperature.ok_or(SOIL_TEMPERATURE)?,
            air_temperature: air_temperature.ok_or(AIR_TEMPERATURE)?,
            soil_moisture: soil_moisture.ok_or(SOIL_MOISTURE)?,
        })
    }
}

async fn read_raw<P: PeripheralAccess>(
    peripheral: &mut P,
    characteristic: &P::Characteristic,
    label: Label,
) -> Result<u16, AcquisitionError<P::Error>> {
    let mut buf = [0u8; VALUE_BUFFER_SIZE];

    let len = peripheral
        .read_characteristic(characteristic, &mut buf)
        .await
        .map_err(|source| AcquisitionError::Read { label, source })?;
    trace!("read {}: {} byte(s)", label, len);

    let value = buf.get(..len).unwrap_or(buf.as_slice());

    calibration::decode_raw(value).ok_or(AcquisitionError::Read {
        label,
        source: ReadError::Truncated { len },
    })
}
