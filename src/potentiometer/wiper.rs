//! Reading and writing the wiper through the controller.
use log::{debug, trace, warn};

use super::Potentiometer;
use crate::{DeviceController, Error, NonVolatileMode};

/// Wiper operations.
impl<C: DeviceController> Potentiometer<C> {
    /// Bring the cached value in sync with the device.
    ///
    /// Call this once after [`PotentiometerBuilder::build`]. It is done for you by
    /// [`PotentiometerBuilder::build_and_initialize`].
    ///
    /// Devices with a non-volatile wiper load the stored value into the volatile
    /// wiper at power-up, so the volatile wiper is read back and
    /// `initial_value_for_volatile_wipers` is ignored. Devices without one start at
    /// mid-scale, so `initial_value_for_volatile_wipers` is written to the volatile
    /// wiper instead.
    ///
    /// [`PotentiometerBuilder::build`]: crate::PotentiometerBuilder::build
    /// [`PotentiometerBuilder::build_and_initialize`]: crate::PotentiometerBuilder::build_and_initialize
    ///
    /// # Errors
    ///
    /// - [`Error::ValueOutOfRange`] if the initial value (for volatile devices) or
    ///   the value read back (for non-volatile devices) is above the maximum.
    /// - [`Error::Transport`] if the controller fails.
    ///
    /// The cached value is unchanged on error.
    pub fn initialize(
        &mut self,
        initial_value_for_volatile_wipers: u16,
    ) -> Result<(), Error<C::Error>> {
        if self.is_capable_of_non_volatile_wiper() {
            let value = self
                .controller
                .get_value(self.channel, false)
                .map_err(Error::Transport)?;
            self.ensure_in_range(value)?;
            debug!("{} wiper {}: read back {value}", self.model, self.channel);
            self.current_value = value;
        } else {
            let value = initial_value_for_volatile_wipers;
            self.ensure_in_range(value)?;
            self.controller
                .set_value(self.channel, value, false)
                .map_err(Error::Transport)?;
            debug!("{} wiper {}: initialized to {value}", self.model, self.channel);
            self.current_value = value;
        }
        Ok(())
    }

    /// Move the wiper to `value`.
    ///
    /// The registers written depend on the [`NonVolatileMode`]. With
    /// [`NonVolatileMode::VolatileAndNonVolatile`] the volatile wiper is written
    /// first.
    ///
    /// # Errors
    ///
    /// - [`Error::ValueOutOfRange`] if `value` is above [`Self::max_value`]. Nothing
    ///   is sent to the device.
    /// - [`Error::Transport`] if the controller fails. The cached value is left
    ///   unchanged. In [`NonVolatileMode::VolatileAndNonVolatile`] the volatile
    ///   wiper may already have moved; use [`Self::update_cache_from_device`] to
    ///   find out.
    pub fn set_value(&mut self, value: u16) -> Result<(), Error<C::Error>> {
        self.ensure_in_range(value)?;
        if self.non_volatile_mode.writes_volatile() {
            self.controller
                .set_value(self.channel, value, false)
                .map_err(Error::Transport)?;
        }
        if self.non_volatile_mode.writes_non_volatile() {
            self.controller
                .set_value(self.channel, value, true)
                .map_err(Error::Transport)?;
        }
        debug!(
            "{} wiper {}: set to {value} ({})",
            self.model, self.channel, self.non_volatile_mode
        );
        self.current_value = value;
        Ok(())
    }

    /// Move the wiper `steps` towards terminal A.
    ///
    /// The wiper stops at [`Self::max_value`]. Nothing is sent to the device if it
    /// is already there or `steps` is 0.
    pub fn increase(&mut self, steps: u16) -> Result<(), Error<C::Error>> {
        let target = self
            .current_value
            .saturating_add(steps)
            .min(self.max_value());
        self.step_to(target)
    }

    /// Move the wiper `steps` towards terminal B.
    ///
    /// The wiper stops at 0. Nothing is sent to the device if it is already there
    /// or `steps` is 0.
    pub fn decrease(&mut self, steps: u16) -> Result<(), Error<C::Error>> {
        let target = self.current_value.saturating_sub(steps);
        self.step_to(target)
    }

    fn step_to(&mut self, target: u16) -> Result<(), Error<C::Error>> {
        if target == self.current_value {
            return Ok(());
        }
        self.set_value(target)
    }

    /// Read the value stored in the non-volatile wiper register.
    ///
    /// This is the value the device loads at power-up. The cached value is not
    /// changed.
    ///
    /// # Errors
    ///
    /// - [`Error::NonVolatileWiperUnsupported`] if the device has no non-volatile
    ///   wiper.
    /// - [`Error::Transport`] if the controller fails.
    pub fn non_volatile_value(&mut self) -> Result<u16, Error<C::Error>> {
        if !self.is_capable_of_non_volatile_wiper() {
            return Err(Error::NonVolatileWiperUnsupported {
                model: self.model,
                mode: None,
            });
        }
        let value = self
            .controller
            .get_value(self.channel, true)
            .map_err(Error::Transport)?;
        trace!(
            "{} wiper {}: non-volatile value {value}",
            self.model, self.channel
        );
        Ok(value)
    }

    /// Change which registers [`Self::set_value`] writes to.
    ///
    /// Nothing is sent to the device.
    ///
    /// # Errors
    ///
    /// [`Error::NonVolatileWiperUnsupported`] if `mode` needs a non-volatile wiper
    /// and the device has none. The mode is left unchanged.
    pub fn set_non_volatile_mode(
        &mut self,
        mode: NonVolatileMode,
    ) -> Result<(), Error<C::Error>> {
        if mode.requires_non_volatile_wiper() && !self.is_capable_of_non_volatile_wiper() {
            return Err(Error::NonVolatileWiperUnsupported {
                model: self.model,
                mode: Some(mode),
            });
        }
        self.non_volatile_mode = mode;
        Ok(())
    }

    /// Re-read the volatile wiper and replace the cached value.
    ///
    /// # Errors
    ///
    /// - [`Error::ValueOutOfRange`] if the device reports a value above the maximum.
    /// - [`Error::Transport`] if the controller fails.
    ///
    /// The cached value is unchanged on error.
    pub fn update_cache_from_device(&mut self) -> Result<u16, Error<C::Error>> {
        let value = self
            .controller
            .get_value(self.channel, false)
            .map_err(Error::Transport)?;
        self.ensure_in_range(value)?;
        trace!("{} wiper {}: cache updated to {value}", self.model, self.channel);
        self.current_value = value;
        Ok(value)
    }

    fn ensure_in_range(&self, value: u16) -> Result<(), Error<C::Error>> {
        let max = self.max_value();
        if value > max {
            warn!("{} wiper {}: rejected value {value}", self.model, self.channel);
            return Err(Error::ValueOutOfRange { value, max });
        }
        Ok(())
    }
}
