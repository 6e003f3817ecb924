use crate::{Channel, Model, NonVolatileMode};

/// Wrapper for problems when setting up or talking to a potentiometer.
///
/// `E` is the error type of the [`DeviceController`] in use. Errors raised by the
/// controller (and by the bus, when acquiring the device) are passed through
/// unchanged in [`Error::Transport`].
///
/// [`DeviceController`]: crate::DeviceController
#[derive(Debug)]
pub enum Error<E> {
    /// No bus was given to the [`PotentiometerBuilder`].
    ///
    /// [`PotentiometerBuilder`]: crate::PotentiometerBuilder
    MissingBus,
    /// No channel was given to the [`PotentiometerBuilder`].
    ///
    /// [`PotentiometerBuilder`]: crate::PotentiometerBuilder
    MissingChannel,
    /// No non-volatile mode was given to the [`PotentiometerBuilder`].
    ///
    /// [`PotentiometerBuilder`]: crate::PotentiometerBuilder
    MissingNonVolatileMode,
    /// No controller factory was given to the [`PotentiometerBuilder`].
    ///
    /// [`PotentiometerBuilder`]: crate::PotentiometerBuilder
    MissingControllerFactory,
    /// The model does not have the requested wiper.
    ///
    /// Only dual devices (MCP46xx) have wiper B.
    UnsupportedChannel {
        /// Device the channel was requested from.
        model: Model,
        /// Channel that was requested.
        channel: Channel,
    },
    /// The model has no non-volatile wiper memory.
    ///
    /// This occurs when requesting a [`NonVolatileMode`] other than
    /// [`NonVolatileMode::VolatileOnly`], or reading the non-volatile wiper, on a
    /// volatile-only device.
    NonVolatileWiperUnsupported {
        /// Device the non-volatile wiper was requested from.
        model: Model,
        /// Mode that was requested, if the error came from selecting a mode.
        mode: Option<NonVolatileMode>,
    },
    /// Attempt to use a wiper value above the device's maximum.
    ValueOutOfRange {
        /// Value that was rejected.
        value: u16,
        /// Highest value the device accepts.
        max: u16,
    },
    /// The controller or bus failed to complete an operation.
    Transport(E),
}

impl<E: std::fmt::Display> std::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MissingBus => f.write_str("no I2C bus given"),
            Error::MissingChannel => f.write_str("no channel given"),
            Error::MissingNonVolatileMode => f.write_str("no non-volatile mode given"),
            Error::MissingControllerFactory => f.write_str("no controller factory given"),
            Error::UnsupportedChannel { model, channel } => {
                write!(f, "{model} has no wiper {channel}")
            }
            Error::NonVolatileWiperUnsupported { model, mode: Some(mode) } => {
                write!(f, "{model} has no non-volatile wiper, {mode} is not possible")
            }
            Error::NonVolatileWiperUnsupported { model, mode: None } => {
                write!(f, "{model} has no non-volatile wiper")
            }
            Error::ValueOutOfRange { value, max } => {
                write!(f, "wiper value {value} is not in the range 0..={max}")
            }
            Error::Transport(e) => write!(f, "transport error: {e}"),
        }
    }
}

impl<E> std::error::Error for Error<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Transport(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use std::error::Error as _;

    use embedded_hal::i2c::ErrorKind;

    use super::*;

    #[test]
    fn messages_name_the_device() {
        let err: Error<ErrorKind> = Error::UnsupportedChannel {
            model: Model::Mcp4561,
            channel: Channel::B,
        };
        assert_eq!(err.to_string(), "MCP4561 has no wiper B");

        let err: Error<ErrorKind> = Error::NonVolatileWiperUnsupported {
            model: Model::Mcp4531,
            mode: Some(NonVolatileMode::NonVolatileOnly),
        };
        assert_eq!(
            err.to_string(),
            "MCP4531 has no non-volatile wiper, NONVOLATILE_ONLY is not possible"
        );
    }

    #[test]
    fn out_of_range_shows_limit() {
        let err: Error<ErrorKind> = Error::ValueOutOfRange { value: 300, max: 256 };
        assert_eq!(err.to_string(), "wiper value 300 is not in the range 0..=256");
    }

    #[test]
    fn only_transport_has_source() {
        let err: Error<std::fmt::Error> = Error::Transport(std::fmt::Error);
        assert!(err.source().is_some());
        let err: Error<std::fmt::Error> = Error::MissingBus;
        assert!(err.source().is_none());
    }
}
