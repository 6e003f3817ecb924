//! One wiper of an MCP45xx/MCP46xx device.
use embedded_hal::i2c::SevenBitAddress;

use crate::{Channel, Model, NonVolatileMode};

mod builder;
mod wiper;

pub use builder::PotentiometerBuilder;

/// A single wiper of a digital potentiometer.
///
/// # Quick start
///
/// Create a potentiometer with [`PotentiometerBuilder`], giving it the bus, the
/// address pin strapping, the wiper channel, the [`NonVolatileMode`] and a factory
/// for the [`DeviceController`] that encodes the device commands. Use
/// [`PotentiometerBuilder::build_and_initialize`] to get a potentiometer that is
/// in sync with the device, or [`PotentiometerBuilder::build`] followed by
/// [`Potentiometer::initialize`] to do it in two steps.
///
/// [`DeviceController`]: crate::DeviceController
///
/// # Cached value
///
/// The wiper value is cached, so [`Potentiometer::current_value`] does no I/O. It is
/// the last value the caller set or read back from the volatile wiper. It is only
/// changed after the device accepted every write, and it always lies within
/// `0..=max_value()`.
///
/// In [`NonVolatileMode::NonVolatileOnly`] a write leaves the volatile wiper where it
/// is, so the cached value is then the stored power-up value rather than the wiper
/// position. Use [`Potentiometer::update_cache_from_device`] to read the position.
///
/// # Equality
///
/// Two potentiometers are equal when they have the same channel, non-volatile mode
/// and current value. The device model, address and controller are not compared.
#[derive(Debug)]
pub struct Potentiometer<C> {
    model: Model,
    address: SevenBitAddress,
    channel: Channel,
    non_volatile_mode: NonVolatileMode,
    controller: C,
    /// Last value the caller set or read back.
    current_value: u16,
}

impl<C> Potentiometer<C> {
    /// Device model this wiper belongs to.
    pub fn model(&self) -> Model {
        self.model
    }

    /// 7-bit I2C address of the device.
    pub fn address(&self) -> SevenBitAddress {
        self.address
    }

    /// Wiper controlled by this instance.
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Registers written by [`Potentiometer::set_value`].
    pub fn non_volatile_mode(&self) -> NonVolatileMode {
        self.non_volatile_mode
    }

    /// The last value the caller set or read back. No I/O.
    pub fn current_value(&self) -> u16 {
        self.current_value
    }

    /// Highest wiper value of the device.
    pub fn max_value(&self) -> u16 {
        self.model.max_value()
    }

    /// True if the device is a rheostat (no A terminal).
    pub fn is_rheostat(&self) -> bool {
        self.model.is_rheostat()
    }

    /// True if the device has a non-volatile (EEPROM) wiper register.
    pub fn is_capable_of_non_volatile_wiper(&self) -> bool {
        self.model.is_capable_of_non_volatile_wiper()
    }

    /// The device controller.
    pub fn controller(&self) -> &C {
        &self.controller
    }

    /// The device controller, for commands this type does not cover.
    ///
    /// Writing the wiper registers through the controller directly will leave the
    /// cached value stale. Call [`Potentiometer::update_cache_from_device`]
    /// afterwards.
    pub fn controller_mut(&mut self) -> &mut C {
        &mut self.controller
    }

    /// Destroy the potentiometer and return the controller.
    pub fn release(self) -> C {
        self.controller
    }
}

impl<C, D> PartialEq<Potentiometer<D>> for Potentiometer<C> {
    fn eq(&self, other: &Potentiometer<D>) -> bool {
        self.channel == other.channel
            && self.non_volatile_mode == other.non_volatile_mode
            && self.current_value == other.current_value
    }
}

impl<C> Eq for Potentiometer<C> {}

impl<C> std::hash::Hash for Potentiometer<C> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.channel.hash(state);
        self.non_volatile_mode.hash(state);
        self.current_value.hash(state);
    }
}

/// Multi-line diagnostic rendering.
///
/// The format is stable:
///
/// ```text
/// MCP4651{
///   channel='A',
///   controller='<controller Debug output>',
///   non_volatile_mode='VOLATILE_ONLY',
///   current_value='0'
/// }
/// ```
impl<C: std::fmt::Debug> std::fmt::Display for Potentiometer<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}{{", self.model)?;
        writeln!(f, "  channel='{}',", self.channel)?;
        writeln!(f, "  controller='{:?}',", self.controller)?;
        writeln!(f, "  non_volatile_mode='{}',", self.non_volatile_mode)?;
        writeln!(f, "  current_value='{}'", self.current_value)?;
        write!(f, "}}")
    }
}
