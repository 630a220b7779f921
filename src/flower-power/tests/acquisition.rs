//! Runs an acquisition through the public API, against a peripheral answering from a GATT
//! table.

use embassy_futures::block_on;
use flower_power::{
    gatt::{
        uuids, Attribute, DiscoveryError, PeripheralAccess, ReadError, Uuid, VALUE_BUFFER_SIZE,
    },
    sensors::{Label, MeasurementUnit},
    AcquisitionError, LiveDataAcquisition, Reading, SensorSnapshot,
};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Disconnected;

impl core::fmt::Display for Disconnected {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "disconnected")
    }
}

struct Handle(Uuid);

impl Attribute for Handle {
    fn uuid(&self) -> Uuid {
        self.0
    }
}

/// A peripheral exposing `table` under the live service, until it gets disconnected after
/// `reads_before_disconnect` reads.
struct GattTable {
    table: Vec<(Uuid, Vec<u8>)>,
    reads_before_disconnect: usize,
}

impl GattTable {
    fn flower_power(raw: [u16; 4]) -> Self {
        Self {
            table: uuids::LIVE_CHARACTERISTICS
                .into_iter()
                .zip(raw)
                .map(|(uuid, raw)| (uuid, raw.to_le_bytes().to_vec()))
                .collect(),
            reads_before_disconnect: usize::MAX,
        }
    }
}

impl PeripheralAccess for GattTable {
    type Service = Handle;
    type Characteristic = Handle;
    type Services = Option<Handle>;
    type Characteristics = Vec<Handle>;
    type Error = Disconnected;

    async fn discover_services(
        &mut self,
        wanted: &[Uuid],
    ) -> Result<Self::Services, DiscoveryError<Self::Error>> {
        match wanted.first() {
            Some(uuid) if *uuid == uuids::LIVE_SERVICE => Ok(Some(Handle(*uuid))),
            Some(uuid) => Err(DiscoveryError::ServiceNotFound(*uuid)),
            None => Ok(None),
        }
    }

    async fn discover_characteristics(
        &mut self,
        _service: &Self::Service,
        wanted: &[Uuid],
    ) -> Result<Self::Characteristics, DiscoveryError<Self::Error>> {
        wanted
            .iter()
            .map(|uuid| {
                if self.table.iter().any(|(u, _)| u == uuid) {
                    Ok(Handle(*uuid))
                } else {
                    Err(DiscoveryError::CharacteristicNotFound(*uuid))
                }
            })
            .collect()
    }

    async fn read_characteristic(
        &mut self,
        characteristic: &Self::Characteristic,
        buf: &mut [u8],
    ) -> Result<usize, ReadError<Self::Error>> {
        if self.reads_before_disconnect == 0 {
            return Err(ReadError::Transport(Disconnected));
        }
        self.reads_before_disconnect -= 1;

        let (_, value) = self
            .table
            .iter()
            .find(|(uuid, _)| *uuid == characteristic.0)
            .ok_or(ReadError::Transport(Disconnected))?;
        let len = value.len().min(buf.len());
        buf.iter_mut().zip(value).for_each(|(dst, src)| *dst = *src);
        Ok(len)
    }
}

#[test]
fn snapshot_of_a_watered_plant_in_the_shade() {
    let mut peripheral = GattTable::flower_power([1000, 500, 400, 500]);

    let snapshot = block_on(LiveDataAcquisition::new().execute(&mut peripheral)).unwrap();

    assert!((snapshot.light_level() - 10.954_047_795_145_305).abs() < 1e-9);
    assert!((snapshot.soil_temperature() - 10.71).abs() < 1e-9);
    assert!((snapshot.air_temperature() - 4.597_36).abs() < 1e-9);
    assert!((snapshot.soil_moisture() - 34.258_494_015_998_47).abs() < 1e-9);

    let units: Vec<_> = snapshot.reading_axes().iter().map(|axis| axis.unit()).collect();
    assert_eq!(
        units,
        [
            MeasurementUnit::MolePerSquareMeterPerDay,
            MeasurementUnit::Celsius,
            MeasurementUnit::Celsius,
            MeasurementUnit::Percent,
        ]
    );
    assert_eq!(snapshot.values().len(), 4);
}

#[test]
fn snapshot_matches_raw_conversion() {
    let mut peripheral = GattTable::flower_power([42, 0, 65_535, 100]);

    let snapshot = block_on(LiveDataAcquisition::new().execute(&mut peripheral)).unwrap();

    assert_eq!(snapshot, SensorSnapshot::from_raw(42, 0, 65_535, 100));
}

#[test]
fn disconnection_during_reads_yields_no_snapshot() {
    let mut peripheral = GattTable::flower_power([1000, 500, 400, 500]);
    peripheral.reads_before_disconnect = 2;

    let err = block_on(LiveDataAcquisition::new().execute(&mut peripheral)).unwrap_err();

    assert_eq!(
        err,
        AcquisitionError::Read {
            label: Label::AirTemperature,
            source: ReadError::Transport(Disconnected),
        }
    );
}

#[test]
fn missing_characteristic_is_reported() {
    let mut peripheral = GattTable::flower_power([1000, 500, 400, 500]);
    peripheral.table.retain(|(uuid, _)| *uuid != uuids::SOIL_TEMPERATURE);

    let err = block_on(LiveDataAcquisition::new().execute(&mut peripheral)).unwrap_err();

    assert_eq!(
        err,
        AcquisitionError::Discovery(DiscoveryError::CharacteristicNotFound(
            uuids::SOIL_TEMPERATURE
        ))
    );
}

#[test]
fn long_values_fit_the_read_buffer() {
    let mut peripheral = GattTable::flower_power([1000, 500, 400, 500]);
    for (_, value) in &mut peripheral.table {
        value.resize(VALUE_BUFFER_SIZE + 8, 0xff);
    }

    let snapshot = block_on(LiveDataAcquisition::new().execute(&mut peripheral)).unwrap();

    assert_eq!(snapshot, SensorSnapshot::from_raw(1000, 500, 400, 500));
}
