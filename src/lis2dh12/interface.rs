//! SPI and I²C register transports for the LIS2DH12.
//!
//! Both transports report bus failures as [`Status::INTERNAL`] so that the driver can
//! accumulate them together with its own errors.

#[cfg(feature = "async")]
use device_driver::AsyncRegisterInterface;
use device_driver::RegisterInterface;
use embedded_hal::i2c::{Error as _, I2c};
use embedded_hal::spi::{Error as _, Operation, SpiDevice};
#[cfg(feature = "async")]
use embedded_hal_async::i2c::I2c as AsyncI2c;
#[cfg(feature = "async")]
use embedded_hal_async::spi::SpiDevice as AsyncSpiDevice;

use crate::Status;
use crate::log::error;

/// SPI read bit of the command byte.
const SPI_READ: u8 = 0x80;
/// SPI address auto-increment bit of the command byte.
const SPI_MULTI: u8 = 0x40;
/// I²C sub-address auto-increment bit.
const I2C_MULTI: u8 = 0x80;
/// Longest burst written in one transaction.
const MAX_WRITE: usize = 8;

fn spi_read_command(address: u8, len: usize) -> u8 {
    if len > 1 {
        address | SPI_READ | SPI_MULTI
    } else {
        address | SPI_READ
    }
}

fn spi_write_command(address: u8, len: usize) -> u8 {
    if len > 1 { address | SPI_MULTI } else { address }
}

fn i2c_sub_address(address: u8, len: usize) -> u8 {
    if len > 1 { address | I2C_MULTI } else { address }
}

/// Assembles `[command, data...]`.
fn frame(command: u8, data: &[u8]) -> Result<([u8; 1 + MAX_WRITE], usize), Status> {
    if data.len() > MAX_WRITE {
        return Err(Status::INVALID_LENGTH);
    }
    let mut buf = [0u8; 1 + MAX_WRITE];
    buf[0] = command;
    buf[1..=data.len()].copy_from_slice(data);
    Ok((buf, 1 + data.len()))
}

/// Possible I²C slave addresses for the LIS2DH12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum SlaveAddr {
    /// SA0 = 0 -> `0x18`
    #[default]
    Default,
    /// SA0 = 1 -> `0x19`
    Alternative,
}

impl SlaveAddr {
    /// 7-bit bus address.
    #[must_use]
    pub fn addr(self) -> u8 {
        match self {
            SlaveAddr::Default => 0x18,
            SlaveAddr::Alternative => 0x19,
        }
    }
}

/// SPI bus interface for the LIS2DH12.
pub struct SpiInterface<SPI> {
    /// Underlying SPI device, chip select included.
    pub spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Wraps an SPI device.
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Returns the SPI device.
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI> RegisterInterface for SpiInterface<SPI>
where
    SPI: SpiDevice,
{
    type Error = Status;
    type AddressType = u8;

    fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        data: &[u8],
    ) -> Result<(), Self::Error> {
        let (buf, len) = frame(spi_write_command(address, data.len()), data)?;
        self.spi.write(&buf[..len]).map_err(|e| {
            error!("SPI write to {=u8:#x} failed: {}", address, e.kind());
            Status::INTERNAL
        })
    }

    fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let command = [spi_read_command(address, data.len())];
        self.spi
            .transaction(&mut [Operation::Write(&command), Operation::Read(data)])
            .map_err(|e| {
                error!("SPI read from {=u8:#x} failed: {}", address, e.kind());
                Status::INTERNAL
            })
    }
}

/// I²C bus interface for the LIS2DH12.
pub struct I2cInterface<I2C> {
    /// Underlying I²C bus
    pub i2c: I2C,
    /// I²C slave address
    pub address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Wraps an I²C bus with the selected slave address.
    pub fn new(i2c: I2C, address: SlaveAddr) -> Self {
        Self {
            i2c,
            address: address.addr(),
        }
    }

    /// Returns the I²C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> RegisterInterface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = Status;
    type AddressType = u8;

    fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        data: &[u8],
    ) -> Result<(), Self::Error> {
        let (buf, len) = frame(i2c_sub_address(address, data.len()), data)?;
        self.i2c.write(self.address, &buf[..len]).map_err(|e| {
            error!("I2C write to {=u8:#x} failed: {}", address, e.kind());
            Status::INTERNAL
        })
    }

    fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let sub_address = [i2c_sub_address(address, data.len())];
        self.i2c
            .write_read(self.address, &sub_address, data)
            .map_err(|e| {
                error!("I2C read from {=u8:#x} failed: {}", address, e.kind());
                Status::INTERNAL
            })
    }
}

/// Asynchronous SPI bus interface for the LIS2DH12.
#[cfg(feature = "async")]
pub struct SpiInterfaceAsync<SPI> {
    /// Underlying asynchronous SPI device
    pub spi: SPI,
}

#[cfg(feature = "async")]
impl<SPI> AsyncRegisterInterface for SpiInterfaceAsync<SPI>
where
    SPI: AsyncSpiDevice,
{
    type Error = Status;
    type AddressType = u8;

    async fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        data: &[u8],
    ) -> Result<(), Self::Error> {
        let (buf, len) = frame(spi_write_command(address, data.len()), data)?;
        self.spi.write(&buf[..len]).await.map_err(|e| {
            error!("SPI write to {=u8:#x} failed: {}", address, e.kind());
            Status::INTERNAL
        })
    }

    async fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let command = [spi_read_command(address, data.len())];
        self.spi
            .transaction(&mut [Operation::Write(&command), Operation::Read(data)])
            .await
            .map_err(|e| {
                error!("SPI read from {=u8:#x} failed: {}", address, e.kind());
                Status::INTERNAL
            })
    }
}

/// Asynchronous I²C bus interface for the LIS2DH12.
#[cfg(feature = "async")]
pub struct I2cInterfaceAsync<I2C> {
    /// Underlying asynchronous I²C bus
    pub i2c: I2C,
    /// I²C slave address
    pub address: u8,
}

#[cfg(feature = "async")]
impl<I2C> AsyncRegisterInterface for I2cInterfaceAsync<I2C>
where
    I2C: AsyncI2c,
{
    type Error = Status;
    type AddressType = u8;

    async fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        data: &[u8],
    ) -> Result<(), Self::Error> {
        let (buf, len) = frame(i2c_sub_address(address, data.len()), data)?;
        self.i2c.write(self.address, &buf[..len]).await.map_err(|e| {
            error!("I2C write to {=u8:#x} failed: {}", address, e.kind());
            Status::INTERNAL
        })
    }

    async fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let sub_address = [i2c_sub_address(address, data.len())];
        self.i2c
            .write_read(self.address, &sub_address, data)
            .await
            .map_err(|e| {
                error!("I2C read from {=u8:#x} failed: {}", address, e.kind());
                Status::INTERNAL
            })
    }
}
