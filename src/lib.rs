//! Sensor hardware abstraction for small battery powered boards.
//!
//! * [`lis2dh12`]: register-level LIS2DH12 accelerometer driver implementing the generic
//!   [`Sensor`] interface and the [`accelerometer`] traits.
//! * [`bme280`]: I²C read and write callbacks for the Bosch BME280 vendor driver.
//! * [`power`]: regulator setup, reset and bootloader entry.
//! * [`Status`] and [`ErrorLog`]: bit set error codes and the sticky error log.
//!
//! Logging goes through `defmt` when the `defmt-03` feature is enabled. The `async`
//! feature adds transports for `embedded-hal-async` buses.

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![deny(warnings)]

mod log;

pub mod atomic;
pub mod bme280;
pub mod error;
pub mod lis2dh12;
pub mod power;
pub mod sensor;
pub mod timestamp;

pub use accelerometer;
pub use atomic::AtomicFlag;
pub use error::{ERRORS, ErrorCallback, ErrorLog, Severity, Status};
pub use sensor::{
    DataFields, DspFunction, Mode, NotInitialized, Sensor, SensorConfig, SensorData, Setting,
};
pub use timestamp::{Clock, SystemClock, timestamp_function_set, timestamp_get};
