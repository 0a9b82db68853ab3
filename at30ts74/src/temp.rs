use core::fmt;

use fixed::types::I12F4;

/* Invariant: the low nibble of the raw byte pair never reaches the stored value;
from_be_bytes shifts it out, so the reading is always a whole number of 1/16
degree steps. */

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Default, Clone, Copy)]
pub struct Temperature(pub(crate) I12F4);

impl Temperature {
    /* The byte pair is the big-endian temperature register: bits 15..4 hold the
    12-bit two's-complement reading, bits 3..0 read as zero at 12-bit resolution.
    An arithmetic shift keeps the sign, so 0x800 comes out as -2048 (-128 C). */
    pub(crate) fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Temperature(I12F4::from_bits(i16::from_be_bytes(bytes) >> 4))
    }
}

impl From<Temperature> for I12F4 {
    fn from(temp: Temperature) -> Self {
        temp.0
    }
}

impl From<Temperature> for f32 {
    fn from(temp: Temperature) -> Self {
        temp.0.into()
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::string::ToString;

    use super::Temperature;
    use fixed::types::I12F4;

    // Conversion table from the AT30TS74 datasheet, 125 C down to -55 C.
    const KNOWN_POINTS: [([u8; 2], f32); 13] = [
        ([0x7d, 0x00], 125.0),
        ([0x64, 0x00], 100.0),
        ([0x4b, 0x00], 75.0),
        ([0x32, 0x00], 50.5),
        ([0x19, 0x40], 25.25),
        ([0x0a, 0x20], 10.125),
        ([0x00, 0x10], 0.0625),
        ([0x00, 0x00], 0.0),
        ([0xff, 0xf0], -0.0625),
        ([0xf5, 0xe0], -10.125),
        ([0xe7, 0xc0], -25.25),
        ([0xce, 0x80], -50.5),
        ([0xc9, 0x00], -55.0),
    ];

    #[test]
    fn decode_known_points() {
        for &(bytes, celsius) in KNOWN_POINTS.iter() {
            assert_eq!(
                f32::from(Temperature::from_be_bytes(bytes)),
                celsius,
                "bytes {:02x?}",
                bytes
            );
        }
    }

    #[test]
    fn round_trip_all_raw_values() {
        for raw in -2048i16..2048 {
            let bytes = (raw << 4).to_be_bytes();

            assert_eq!(I12F4::from(Temperature::from_be_bytes(bytes)), I12F4::from_bits(raw));
        }
    }

    #[test]
    fn low_nibble_is_discarded() {
        assert_eq!(
            Temperature::from_be_bytes([0x19, 0x4f]),
            Temperature::from_be_bytes([0x19, 0x40])
        );
    }

    #[test]
    fn lowest_reading_keeps_sign() {
        assert_eq!(f32::from(Temperature::from_be_bytes([0x80, 0x00])), -128.0);
    }

    #[test]
    fn display_matches_fixed_point() {
        assert_eq!(Temperature::from_be_bytes([0x19, 0x40]).to_string(), "25.25");
        assert_eq!(Temperature::from_be_bytes([0xff, 0xf0]).to_string(), "-0.0625");
    }
}
