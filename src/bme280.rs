//! I²C glue for a Bosch BME280 environmental sensor.
//!
//! The vendor driver expects a pair of byte-level read and write callbacks that answer
//! `0` on success and `-1` on failure. [`Bme280Bus`] provides both on top of an
//! `embedded-hal` I²C bus; [`bosch_code`] converts the result.

use embedded_hal::i2c::{Error as _, I2c};

use crate::Status;
use crate::log::error;

/// BME280 address with SDO tied to ground.
pub const BME280_ADDRESS_PRIMARY: u8 = 0x76;
/// BME280 address with SDO tied to VDDIO.
pub const BME280_ADDRESS_SECONDARY: u8 = 0x77;

/// Register access for one BME280 on an I²C bus.
pub struct Bme280Bus<I2C> {
    /// Underlying I²C bus
    pub i2c: I2C,
    /// I²C slave address
    pub address: u8,
}

impl<I2C> Bme280Bus<I2C>
where
    I2C: I2c,
{
    /// Wraps `i2c` for the sensor at `address`.
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Returns the I²C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Writes one register as `[reg, data[0]]` in a single transaction.
    ///
    /// The vendor driver passes one or two bytes; only the first is written.
    ///
    /// # Errors
    ///
    /// `INVALID_LENGTH` for empty or longer buffers, `INTERNAL` on bus failure.
    pub fn write(&mut self, reg: u8, data: &[u8]) -> Result<(), Status> {
        if !(1..=2).contains(&data.len()) {
            return Err(Status::INVALID_LENGTH);
        }
        self.i2c.write(self.address, &[reg, data[0]]).map_err(|e| {
            error!("BME280 write to {=u8:#x} failed: {}", reg, e.kind());
            Status::INTERNAL
        })
    }

    /// Reads `buf.len()` bytes starting at `reg`.
    ///
    /// The register pointer is written and the bus stopped before the read starts.
    ///
    /// # Errors
    ///
    /// `INTERNAL` on bus failure.
    pub fn read(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Status> {
        let mut status = Status::SUCCESS;
        status.merge(self.i2c.write(self.address, &[reg]).map_err(|e| {
            error!("BME280 pointer write {=u8:#x} failed: {}", reg, e.kind());
            Status::INTERNAL
        }));
        status.merge(self.i2c.read(self.address, buf).map_err(|e| {
            error!("BME280 read from {=u8:#x} failed: {}", reg, e.kind());
            Status::INTERNAL
        }));
        status.into_result()
    }
}

/// Vendor driver return code: `0` on success, `-1` otherwise.
#[must_use]
pub fn bosch_code(result: Result<(), Status>) -> i8 {
    match result {
        Ok(()) => 0,
        Err(_) => -1,
    }
}
