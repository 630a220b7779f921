//! Identifiers of the Flower Power live service and of its characteristics.

use uuid::Uuid;

/// Live service, grouping the current sensor values.
pub const LIVE_SERVICE: Uuid = Uuid::from_u128(0x39e1_fa00_84a8_11e2_afba_0002_a5d5_c51b);

/// Sunlight, raw.
pub const LIGHT_LEVEL: Uuid = Uuid::from_u128(0x39e1_fa01_84a8_11e2_afba_0002_a5d5_c51b);
/// Soil temperature, raw.
pub const SOIL_TEMPERATURE: Uuid = Uuid::from_u128(0x39e1_fa03_84a8_11e2_afba_0002_a5d5_c51b);
/// Air temperature, raw.
pub const AIR_TEMPERATURE: Uuid = Uuid::from_u128(0x39e1_fa04_84a8_11e2_afba_0002_a5d5_c51b);
/// Soil volumetric water content, raw.
pub const SOIL_MOISTURE: Uuid = Uuid::from_u128(0x39e1_fa05_84a8_11e2_afba_0002_a5d5_c51b);

/// Characteristics of the [`LIVE_SERVICE`] read during an acquisition, in ascending order.
///
/// This is also the order in which they are read.
pub const LIVE_CHARACTERISTICS: [Uuid; 4] =
    [LIGHT_LEVEL, SOIL_TEMPERATURE, AIR_TEMPERATURE, SOIL_MOISTURE];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_characteristics_are_sorted() {
        assert!(LIVE_CHARACTERISTICS.windows(2).all(|w| matches!(w, [a, b] if a < b)));
    }

    #[test]
    fn live_characteristics_belong_to_live_service() {
        let base = LIVE_SERVICE.as_u128() & !(0xff << 96);
        for uuid in LIVE_CHARACTERISTICS {
            assert_eq!(uuid.as_u128() & !(0xff << 96), base);
        }
    }

    #[test]
    fn textual_representation() {
        assert_eq!(
            LIVE_SERVICE.hyphenated().to_string(),
            "39e1fa00-84a8-11e2-afba-0002a5d5c51b"
        );
        assert_eq!(
            SOIL_MOISTURE.simple().to_string(),
            "39e1fa0584a811e2afba0002a5d5c51b"
        );
    }
}
