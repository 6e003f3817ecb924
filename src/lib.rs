#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod address;
pub mod bus;
mod common;
mod controller;
mod error;
mod model;
mod potentiometer;

pub use address::{AddressPins, build_address};
pub use common::{Channel, NonVolatileMode};
pub use controller::{ControllerFactory, DeviceController};
pub use error::Error;
pub use model::Model;
pub use potentiometer::{Potentiometer, PotentiometerBuilder};
