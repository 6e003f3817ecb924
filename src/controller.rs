//! Interface to the command layer that talks to the device.
//!
//! Encoding the MCP45xx/MCP46xx command bytes is left to a [`DeviceController`]
//! implementation. The [`Potentiometer`] decides which registers are read and
//! written, and when.
//!
//! [`Potentiometer`]: crate::Potentiometer
use crate::Channel;

/// Reads and writes the wiper registers of one device.
///
/// The `Debug` output of a controller is used as its diagnostic representation when
/// a [`Potentiometer`] is displayed.
///
/// [`Potentiometer`]: crate::Potentiometer
pub trait DeviceController: std::fmt::Debug {
    /// Error raised when communication with the device fails.
    type Error;

    /// Read the wiper register of `channel`.
    ///
    /// Reads the non-volatile (EEPROM) register if `non_volatile` is true, otherwise
    /// the volatile register that sets the current wiper position.
    fn get_value(&mut self, channel: Channel, non_volatile: bool) -> Result<u16, Self::Error>;

    /// Write `value` to the wiper register of `channel`.
    ///
    /// Writes the non-volatile (EEPROM) register if `non_volatile` is true,
    /// otherwise the volatile register.
    fn set_value(
        &mut self,
        channel: Channel,
        value: u16,
        non_volatile: bool,
    ) -> Result<(), Self::Error>;
}

/// Creates the [`DeviceController`] for a device handle.
///
/// `H` is the handle type provided by the bus, normally an [`I2cDevice`]. Any
/// `FnOnce(H) -> C` closure is a factory, so this trait rarely needs implementing
/// by hand:
///
/// ```ignore
/// let builder = PotentiometerBuilder::new(Model::Mcp4651)
///     .controller_factory(|device| MyController::new(device));
/// ```
///
/// [`I2cDevice`]: crate::bus::I2cDevice
pub trait ControllerFactory<H> {
    /// Controller produced by this factory.
    type Controller: DeviceController;

    /// Create the controller that will own `handle`.
    fn create(self, handle: H) -> Self::Controller;
}

impl<H, C, F> ControllerFactory<H> for F
where
    F: FnOnce(H) -> C,
    C: DeviceController,
{
    type Controller = C;

    fn create(self, handle: H) -> C {
        self(handle)
    }
}
