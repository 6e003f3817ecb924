//! Device variants of the MCP45xx/MCP46xx family.
//!
//! Part numbers follow the pattern `MCP4` + wipers + memory/resolution + terminals:
//!
//! | Digit | Value | Meaning                                   |
//! |-------|-------|-------------------------------------------|
//! | 2nd   | 5     | One wiper (channel A)                     |
//! |       | 6     | Two wipers (channels A and B)             |
//! | 3rd   | 3     | 7-bit (129 taps), volatile wiper only     |
//! |       | 4     | 7-bit (129 taps), non-volatile wiper      |
//! |       | 5     | 8-bit (257 taps), volatile wiper only     |
//! |       | 6     | 8-bit (257 taps), non-volatile wiper      |
//! | 4th   | 1     | Potentiometer (terminals A, W and B)      |
//! |       | 2     | Rheostat (terminals W and B)              |

use crate::Channel;

const SINGLE: &[Channel] = &[Channel::A];
const DUAL: &[Channel] = &[Channel::A, Channel::B];

/// A concrete MCP45xx/MCP46xx part.
///
/// The model fixes the wiper range and the device's capabilities; none of them can
/// be changed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Model {
    /// Single 7-bit volatile potentiometer.
    Mcp4531,
    /// Single 7-bit volatile rheostat.
    Mcp4532,
    /// Single 7-bit non-volatile potentiometer.
    Mcp4541,
    /// Single 7-bit non-volatile rheostat.
    Mcp4542,
    /// Single 8-bit volatile potentiometer.
    Mcp4551,
    /// Single 8-bit volatile rheostat.
    Mcp4552,
    /// Single 8-bit non-volatile potentiometer.
    Mcp4561,
    /// Single 8-bit non-volatile rheostat.
    Mcp4562,
    /// Dual 7-bit volatile potentiometer.
    Mcp4631,
    /// Dual 7-bit volatile rheostat.
    Mcp4632,
    /// Dual 7-bit non-volatile potentiometer.
    Mcp4641,
    /// Dual 7-bit non-volatile rheostat.
    Mcp4642,
    /// Dual 8-bit volatile potentiometer.
    Mcp4651,
    /// Dual 8-bit volatile rheostat.
    Mcp4652,
    /// Dual 8-bit non-volatile potentiometer.
    Mcp4661,
    /// Dual 8-bit non-volatile rheostat.
    Mcp4662,
}

impl Model {
    /// Every model in the family.
    pub const ALL: [Model; 16] = [
        Model::Mcp4531,
        Model::Mcp4532,
        Model::Mcp4541,
        Model::Mcp4542,
        Model::Mcp4551,
        Model::Mcp4552,
        Model::Mcp4561,
        Model::Mcp4562,
        Model::Mcp4631,
        Model::Mcp4632,
        Model::Mcp4641,
        Model::Mcp4642,
        Model::Mcp4651,
        Model::Mcp4652,
        Model::Mcp4661,
        Model::Mcp4662,
    ];

    /// Part number digits after "MCP", eg 4651.
    pub fn part_number(&self) -> u16 {
        match self {
            Model::Mcp4531 => 4531,
            Model::Mcp4532 => 4532,
            Model::Mcp4541 => 4541,
            Model::Mcp4542 => 4542,
            Model::Mcp4551 => 4551,
            Model::Mcp4552 => 4552,
            Model::Mcp4561 => 4561,
            Model::Mcp4562 => 4562,
            Model::Mcp4631 => 4631,
            Model::Mcp4632 => 4632,
            Model::Mcp4641 => 4641,
            Model::Mcp4642 => 4642,
            Model::Mcp4651 => 4651,
            Model::Mcp4652 => 4652,
            Model::Mcp4661 => 4661,
            Model::Mcp4662 => 4662,
        }
    }

    /// Memory and resolution digit of the part number.
    fn memory_digit(&self) -> u16 {
        self.part_number() / 10 % 10
    }

    /// Highest wiper value.
    ///
    /// The wiper runs from 0 (terminal B) to this value (terminal A) inclusive, so
    /// 7-bit devices have 129 taps and 8-bit devices 257.
    pub fn max_value(&self) -> u16 {
        match self.memory_digit() {
            3 | 4 => 128,
            _ => 256,
        }
    }

    /// True for rheostats, which lack the A terminal.
    pub fn is_rheostat(&self) -> bool {
        self.part_number() % 10 == 2
    }

    /// True if the device stores a non-volatile wiper value in EEPROM.
    ///
    /// Such devices load the stored value into the volatile wiper at power-up.
    pub fn is_capable_of_non_volatile_wiper(&self) -> bool {
        matches!(self.memory_digit(), 4 | 6)
    }

    /// Wipers present on the device.
    pub fn channels(&self) -> &'static [Channel] {
        match self.part_number() / 100 {
            45 => SINGLE,
            _ => DUAL,
        }
    }

    /// Whether the device has the given wiper.
    pub fn supports_channel(&self, channel: Channel) -> bool {
        self.channels().contains(&channel)
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MCP{}", self.part_number())
    }
}

#[cfg(test)]
mod test {
    use super::Model;
    use crate::Channel;

    #[test]
    fn resolution_by_part_number() {
        assert_eq!(Model::Mcp4531.max_value(), 128);
        assert_eq!(Model::Mcp4642.max_value(), 128);
        assert_eq!(Model::Mcp4551.max_value(), 256);
        assert_eq!(Model::Mcp4662.max_value(), 256);
    }

    #[test]
    fn non_volatile_parts() {
        let non_volatile: Vec<Model> = Model::ALL
            .into_iter()
            .filter(Model::is_capable_of_non_volatile_wiper)
            .collect();
        assert_eq!(
            non_volatile,
            [
                Model::Mcp4541,
                Model::Mcp4542,
                Model::Mcp4561,
                Model::Mcp4562,
                Model::Mcp4641,
                Model::Mcp4642,
                Model::Mcp4661,
                Model::Mcp4662,
            ]
        );
    }

    #[test]
    fn rheostats_end_in_two() {
        for model in Model::ALL {
            assert_eq!(model.is_rheostat(), model.part_number() % 2 == 0, "{model}");
        }
    }

    #[test]
    fn single_and_dual_wipers() {
        assert_eq!(Model::Mcp4561.channels(), [Channel::A]);
        assert!(!Model::Mcp4561.supports_channel(Channel::B));
        assert_eq!(Model::Mcp4661.channels(), [Channel::A, Channel::B]);
        assert!(Model::Mcp4632.supports_channel(Channel::B));
    }

    #[test]
    fn display_is_the_part_number() {
        assert_eq!(Model::Mcp4651.to_string(), "MCP4651");
    }
}
