use log::debug;

use super::Potentiometer;
use crate::bus::{Bus, I2cDevice};
use crate::{
    AddressPins, Channel, ControllerFactory, DeviceController, Error, Model, NonVolatileMode,
};

/// Error type of the controller a factory produces.
type ControllerError<F, H> =
    <<F as ControllerFactory<H>>::Controller as DeviceController>::Error;

/// Builder for a [`Potentiometer`].
///
/// The bus, channel, non-volatile mode and controller factory are required. The
/// address pins default to all low (address `0x50`).
///
/// The builder does not check for a missing setting until [`build`] is called, at
/// which point the bus and factory have not yet been used, so a failed build does
/// not communicate with the device.
///
/// [`build`]: PotentiometerBuilder::build
#[derive(Debug)]
pub struct PotentiometerBuilder<B, F> {
    model: Model,
    bus: Option<B>,
    pins: AddressPins,
    channel: Option<Channel>,
    non_volatile_mode: Option<NonVolatileMode>,
    controller_factory: Option<F>,
}

impl<B, F> PotentiometerBuilder<B, F> {
    /// Start building a potentiometer for the given device model.
    pub fn new(model: Model) -> Self {
        Self {
            model,
            bus: None,
            pins: AddressPins::default(),
            channel: None,
            non_volatile_mode: None,
            controller_factory: None,
        }
    }

    /// The bus the device is attached to.
    pub fn bus(mut self, bus: B) -> Self {
        self.bus = Some(bus);
        self
    }

    /// Levels strapped onto the device's address pins.
    pub fn address_pins(mut self, pins: AddressPins) -> Self {
        self.pins = pins;
        self
    }

    /// The wiper to control.
    pub fn channel(mut self, channel: Channel) -> Self {
        self.channel = Some(channel);
        self
    }

    /// Which wiper registers new values are written to.
    pub fn non_volatile_mode(mut self, mode: NonVolatileMode) -> Self {
        self.non_volatile_mode = Some(mode);
        self
    }

    /// Factory for the controller that will talk to the device.
    pub fn controller_factory(mut self, factory: F) -> Self {
        self.controller_factory = Some(factory);
        self
    }
}

impl<B, F> PotentiometerBuilder<B, F>
where
    B: Bus,
    F: ControllerFactory<I2cDevice<B::I2c>>,
    ControllerError<F, I2cDevice<B::I2c>>: From<B::Error>,
{
    /// Create the potentiometer without initializing it.
    ///
    /// The cached value is 0 and does not reflect the device until
    /// [`Potentiometer::initialize`] is called.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingBus`], [`Error::MissingChannel`],
    ///   [`Error::MissingNonVolatileMode`] or [`Error::MissingControllerFactory`]
    ///   if a required setting was not given (checked in that order).
    /// - [`Error::UnsupportedChannel`] if the model does not have the channel.
    /// - [`Error::NonVolatileWiperUnsupported`] if the mode needs a non-volatile
    ///   wiper and the model has none.
    /// - [`Error::Transport`] if the bus could not provide the device.
    pub fn build(
        self,
    ) -> Result<Potentiometer<F::Controller>, Error<ControllerError<F, I2cDevice<B::I2c>>>> {
        let bus = self.bus.ok_or(Error::MissingBus)?;
        let channel = self.channel.ok_or(Error::MissingChannel)?;
        let non_volatile_mode = self
            .non_volatile_mode
            .ok_or(Error::MissingNonVolatileMode)?;
        let factory = self
            .controller_factory
            .ok_or(Error::MissingControllerFactory)?;

        let model = self.model;
        if !model.supports_channel(channel) {
            return Err(Error::UnsupportedChannel { model, channel });
        }
        if non_volatile_mode.requires_non_volatile_wiper()
            && !model.is_capable_of_non_volatile_wiper()
        {
            return Err(Error::NonVolatileWiperUnsupported {
                model,
                mode: Some(non_volatile_mode),
            });
        }

        let address = self.pins.address();
        let device = bus
            .device(address)
            .map_err(|e| Error::Transport(e.into()))?;
        let controller = factory.create(device);
        debug!("{model} wiper {channel} at {address:#04X}, {non_volatile_mode}");

        Ok(Potentiometer {
            model,
            address,
            channel,
            non_volatile_mode,
            controller,
            current_value: 0,
        })
    }

    /// Create the potentiometer and bring it in sync with the device.
    ///
    /// `initial_value_for_volatile_wipers` is only used by devices without a
    /// non-volatile wiper. See [`Potentiometer::initialize`].
    ///
    /// # Errors
    ///
    /// Any error from [`build`](Self::build) or [`Potentiometer::initialize`].
    pub fn build_and_initialize(
        self,
        initial_value_for_volatile_wipers: u16,
    ) -> Result<Potentiometer<F::Controller>, Error<ControllerError<F, I2cDevice<B::I2c>>>> {
        let mut potentiometer = self.build()?;
        potentiometer.initialize(initial_value_for_volatile_wipers)?;
        Ok(potentiometer)
    }
}
