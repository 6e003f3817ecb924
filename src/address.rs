//! I2C address derivation from the address pin strapping.
//!
//! The MCP45xx/MCP46xx family answers to `0b0101_xxx0`: the fixed pattern `0b01010`
//! in the high bits, with the A2, A1 and A0 pin levels on bits 3, 2 and 1. Bit 0 is
//! not driven by a pin on this family and is always clear.
use bit_field::BitField;
use embedded_hal::i2c::SevenBitAddress;

/// Address bits common to the whole device family.
const BASE_ADDRESS: SevenBitAddress = 0b0101_0000;

/// Logic levels strapped onto the A0, A1 and A2 address pins.
///
/// `true` means the pin is tied high. The default is all pins tied low, which gives
/// the base address `0x50`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressPins {
    /// Level of the A0 pin.
    pub a0: bool,
    /// Level of the A1 pin.
    pub a1: bool,
    /// Level of the A2 pin.
    pub a2: bool,
}

impl AddressPins {
    /// Describe the pin strapping of a device.
    pub fn new(a0: bool, a1: bool, a2: bool) -> Self {
        Self { a0, a1, a2 }
    }

    /// The 7-bit I2C address the device answers to with this strapping.
    pub fn address(&self) -> SevenBitAddress {
        build_address(self.a0, self.a1, self.a2)
    }
}

/// Compute the 7-bit I2C address for the given address pin levels.
///
/// Distinct pin combinations always give distinct addresses.
pub fn build_address(pin_a0: bool, pin_a1: bool, pin_a2: bool) -> SevenBitAddress {
    let mut address = BASE_ADDRESS;
    address.set_bit(1, pin_a0);
    address.set_bit(2, pin_a1);
    address.set_bit(3, pin_a2);
    address
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::{AddressPins, build_address};

    #[test]
    fn known_addresses() {
        assert_eq!(build_address(false, false, false), 0b0101_0000);
        assert_eq!(build_address(true, false, false), 0b0101_0010);
        assert_eq!(build_address(true, true, false), 0b0101_0110);
        assert_eq!(build_address(true, true, true), 0b0101_1110);
    }

    #[test]
    fn each_pin_sets_its_own_bit() {
        assert_eq!(build_address(false, true, false), 0x54);
        assert_eq!(build_address(false, false, true), 0x58);
    }

    #[test]
    fn every_strapping_has_a_unique_seven_bit_address() {
        let mut seen = HashSet::new();
        for bits in 0..8u8 {
            let address = build_address(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0);
            assert!(address < 0x80, "{address:#04X} is not a 7-bit address");
            assert_eq!(address & 1, 0, "bit 0 is never driven by a pin");
            assert!(seen.insert(address), "{address:#04X} produced twice");
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn pins_struct_matches_free_function() {
        assert_eq!(AddressPins::default().address(), 0x50);
        assert_eq!(AddressPins::new(true, false, true).address(), 0x5A);
    }
}
