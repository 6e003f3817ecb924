//! Access to the I2C bus the potentiometers are attached to.
//!
//! Several potentiometers (at different addresses, or different wipers of the same
//! device) usually share one bus. A [`Bus`] hands out an [`I2cDevice`] per device,
//! which is the only thing a [`DeviceController`] gets to talk to.
//!
//! [`DeviceController`]: crate::DeviceController
//!
//! [`Bus`] is implemented for shared references to a [`RefCell`] or [`Mutex`]
//! holding any [`embedded_hal::i2c::I2c`] implementation, using the shared-bus
//! devices from [`embedded_hal_bus`]. Use the `RefCell` for single-threaded
//! programs and the `Mutex` if potentiometers are used from several threads.
use std::cell::RefCell;
use std::sync::Mutex;

use embedded_hal::i2c::{ErrorType, I2c, SevenBitAddress};
use embedded_hal_bus::i2c::{MutexDevice, RefCellDevice};

/// A bus that can provide a handle to the device at a given address.
pub trait Bus {
    /// I2C implementation behind the handles.
    type I2c: I2c;
    /// Error raised when the bus cannot provide a handle.
    type Error;

    /// Get a handle for the device at the given 7-bit address.
    ///
    /// This does not communicate with the device, so success does not mean a device
    /// is present at `address`.
    fn device(&self, address: SevenBitAddress) -> Result<I2cDevice<Self::I2c>, Self::Error>;
}

impl<'a, T: I2c> Bus for &'a RefCell<T> {
    type I2c = RefCellDevice<'a, T>;
    type Error = T::Error;

    fn device(&self, address: SevenBitAddress) -> Result<I2cDevice<Self::I2c>, Self::Error> {
        Ok(I2cDevice::new(RefCellDevice::new(*self), address))
    }
}

impl<'a, T: I2c> Bus for &'a Mutex<T> {
    type I2c = MutexDevice<'a, T>;
    type Error = T::Error;

    fn device(&self, address: SevenBitAddress) -> Result<I2cDevice<Self::I2c>, Self::Error> {
        Ok(I2cDevice::new(MutexDevice::new(*self), address))
    }
}

/// An I2C bus bound to the address of a single device.
///
/// The address must be the 7-bit address, not an 8-bit read or write address.
#[derive(Debug)]
pub struct I2cDevice<I2C> {
    i2c: I2C,
    address: SevenBitAddress,
}

impl<I2C: I2c> I2cDevice<I2C> {
    /// Bind the bus to the device at `address`.
    pub fn new(i2c: I2C, address: SevenBitAddress) -> Self {
        Self { i2c, address }
    }

    /// The 7-bit address of the device.
    pub fn address(&self) -> SevenBitAddress {
        self.address
    }

    /// Write `bytes` to the device.
    pub fn write(&mut self, bytes: &[u8]) -> Result<(), <I2C as ErrorType>::Error> {
        self.i2c.write(self.address, bytes)
    }

    /// Read from the device until `buffer` is full.
    pub fn read(&mut self, buffer: &mut [u8]) -> Result<(), <I2C as ErrorType>::Error> {
        self.i2c.read(self.address, buffer)
    }

    /// Write `bytes` to the device, then read into `buffer` after a repeated START.
    ///
    /// This is how register reads are done: the command selecting the register is
    /// written, and the register contents are read back without releasing the bus.
    pub fn write_read(
        &mut self,
        bytes: &[u8],
        buffer: &mut [u8],
    ) -> Result<(), <I2C as ErrorType>::Error> {
        self.i2c.write_read(self.address, bytes, buffer)
    }

    /// Give back the underlying bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

#[cfg(test)]
mod test {
    use std::cell::RefCell;
    use std::sync::Mutex;

    use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation, SevenBitAddress};

    use super::Bus;

    /// Bus that records the address and direction of every operation.
    #[derive(Debug, Default)]
    struct RecordingI2c {
        log: Vec<(SevenBitAddress, &'static str)>,
    }

    impl ErrorType for RecordingI2c {
        type Error = ErrorKind;
    }

    impl I2c for RecordingI2c {
        fn transaction(
            &mut self,
            address: SevenBitAddress,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            for op in operations {
                match op {
                    Operation::Read(buf) => {
                        buf.fill(0xAB);
                        self.log.push((address, "read"));
                    }
                    Operation::Write(_) => self.log.push((address, "write")),
                }
            }
            Ok(())
        }
    }

    #[test]
    fn refcell_handles_are_bound_to_their_address() -> Result<(), ErrorKind> {
        let i2c = RefCell::new(RecordingI2c::default());
        let bus = &i2c;
        let mut first = bus.device(0x50)?;
        let mut second = bus.device(0x5E)?;
        assert_eq!(first.address(), 0x50);
        assert_eq!(second.address(), 0x5E);

        first.write(&[0x00, 0x80])?;
        let mut buf = [0u8; 2];
        second.write_read(&[0x0C], &mut buf)?;
        assert_eq!(buf, [0xAB, 0xAB]);

        assert_eq!(
            i2c.borrow().log,
            [(0x50, "write"), (0x5E, "write"), (0x5E, "read")]
        );
        Ok(())
    }

    #[test]
    fn mutex_handles_share_one_bus() -> Result<(), ErrorKind> {
        let i2c = Mutex::new(RecordingI2c::default());
        let bus = &i2c;
        let mut device = bus.device(0x52)?;
        let mut buf = [0u8; 1];
        device.read(&mut buf)?;
        drop(device);
        let recorded = i2c.lock().expect("not poisoned");
        assert_eq!(recorded.log, [(0x52, "read")]);
        Ok(())
    }
}
