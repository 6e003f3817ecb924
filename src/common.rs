//! Wiper channel and non-volatile mode selection.

/// One of the wipers of a device.
///
/// Single potentiometer devices (MCP45xx) only have wiper A, dual devices (MCP46xx)
/// have wipers A and B. Check [`Model::channels`] for what a device supports.
///
/// [`Model::channels`]: crate::Model::channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Wiper 0.
    A,
    /// Wiper 1.
    B,
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Channel::A => "A",
            Channel::B => "B",
        };
        f.write_str(name)
    }
}

/// Which wiper registers value changes are written to.
///
/// Devices with non-volatile memory (EEPROM) load the non-volatile wiper value into
/// the volatile wiper at power-up. Writing only to the volatile register changes the
/// resistance until the next power cycle; writing only to the non-volatile register
/// changes the power-up value without moving the wiper.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NonVolatileMode {
    /// Write only the volatile wiper register.
    #[default]
    VolatileOnly,
    /// Write only the non-volatile wiper register.
    NonVolatileOnly,
    /// Write the volatile wiper register, then the non-volatile one.
    VolatileAndNonVolatile,
}

impl NonVolatileMode {
    /// Whether this mode needs a device with non-volatile wiper memory.
    pub fn requires_non_volatile_wiper(&self) -> bool {
        !matches!(self, NonVolatileMode::VolatileOnly)
    }

    /// Whether writes in this mode go to the volatile wiper register.
    pub(crate) fn writes_volatile(&self) -> bool {
        matches!(
            self,
            NonVolatileMode::VolatileOnly | NonVolatileMode::VolatileAndNonVolatile
        )
    }

    /// Whether writes in this mode go to the non-volatile wiper register.
    pub(crate) fn writes_non_volatile(&self) -> bool {
        matches!(
            self,
            NonVolatileMode::NonVolatileOnly | NonVolatileMode::VolatileAndNonVolatile
        )
    }
}

impl std::fmt::Display for NonVolatileMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NonVolatileMode::VolatileOnly => "VOLATILE_ONLY",
            NonVolatileMode::NonVolatileOnly => "NONVOLATILE_ONLY",
            NonVolatileMode::VolatileAndNonVolatile => "VOLATILE_AND_NONVOLATILE",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod test {
    use super::NonVolatileMode;

    #[test]
    fn register_selection_by_mode() {
        use NonVolatileMode::*;
        assert!(VolatileOnly.writes_volatile());
        assert!(!VolatileOnly.writes_non_volatile());
        assert!(!NonVolatileOnly.writes_volatile());
        assert!(NonVolatileOnly.writes_non_volatile());
        assert!(VolatileAndNonVolatile.writes_volatile());
        assert!(VolatileAndNonVolatile.writes_non_volatile());
    }

    #[test]
    fn only_volatile_mode_works_without_eeprom() {
        assert!(!NonVolatileMode::VolatileOnly.requires_non_volatile_wiper());
        assert!(NonVolatileMode::NonVolatileOnly.requires_non_volatile_wiper());
        assert!(NonVolatileMode::VolatileAndNonVolatile.requires_non_volatile_wiper());
    }
}
