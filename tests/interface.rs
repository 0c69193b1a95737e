//! Byte framing of the LIS2DH12 SPI and I²C transports.

use device_driver::RegisterInterface;
use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use sensor_hal::Status;
use sensor_hal::lis2dh12::{I2cInterface, Lis2dh12, SlaveAddr, SpiInterface};

type SpiMock = embedded_hal_mock::eh1::spi::Mock<u8>;
type SpiTransaction = embedded_hal_mock::eh1::spi::Transaction<u8>;

#[test]
fn slave_addresses() {
    assert_eq!(SlaveAddr::default().addr(), 0x18);
    assert_eq!(SlaveAddr::Alternative.addr(), 0x19);
}

#[test]
fn spi_single_register_read() {
    let expectations = [
        SpiTransaction::transaction_start(),
        SpiTransaction::write_vec(vec![0x8F]),
        SpiTransaction::read_vec(vec![0x33]),
        SpiTransaction::transaction_end(),
    ];
    let mut driver = Lis2dh12::new(SpiInterface::new(SpiMock::new(&expectations)), NoopDelay::new());

    assert_eq!(driver.device().who_am_i().read().map(|r| r.id()), Ok(0x33));

    let (interface, _delay) = driver.destroy();
    interface.release().done();
}

#[test]
fn spi_burst_read_sets_increment_bit() {
    let expectations = [
        SpiTransaction::transaction_start(),
        SpiTransaction::write_vec(vec![0x28 | 0xC0]),
        SpiTransaction::read_vec(vec![1, 2, 3, 4, 5, 6]),
        SpiTransaction::transaction_end(),
    ];
    let mut interface = SpiInterface::new(SpiMock::new(&expectations));

    let mut buf = [0u8; 6];
    interface.read_register(0x28, 48, &mut buf).unwrap();
    assert_eq!(buf, [1, 2, 3, 4, 5, 6]);
    interface.release().done();
}

#[test]
fn spi_writes() {
    let expectations = [
        SpiTransaction::transaction_start(),
        SpiTransaction::write_vec(vec![0x20, 0x27]),
        SpiTransaction::transaction_end(),
        SpiTransaction::transaction_start(),
        SpiTransaction::write_vec(vec![0x20 | 0x40, 0x27, 0x00]),
        SpiTransaction::transaction_end(),
    ];
    let mut interface = SpiInterface::new(SpiMock::new(&expectations));

    interface.write_register(0x20, 8, &[0x27]).unwrap();
    interface.write_register(0x20, 16, &[0x27, 0x00]).unwrap();
    interface.release().done();
}

#[test]
fn oversized_write_is_rejected_before_the_bus() {
    let mut interface = SpiInterface::new(SpiMock::new(&[]));
    assert_eq!(
        interface.write_register(0x20, 72, &[0; 9]),
        Err(Status::INVALID_LENGTH)
    );
    interface.release().done();
}

#[test]
fn i2c_single_and_burst_reads() {
    let expectations = [
        I2cTransaction::write_read(0x19, vec![0x0F], vec![0x33]),
        I2cTransaction::write_read(0x19, vec![0x28 | 0x80], vec![0, 0, 0, 0, 0, 0x40]),
    ];
    let mut interface = I2cInterface::new(I2cMock::new(&expectations), SlaveAddr::Alternative);

    let mut id = [0u8];
    interface.read_register(0x0F, 8, &mut id).unwrap();
    assert_eq!(id, [0x33]);

    let mut out = [0u8; 6];
    interface.read_register(0x28, 48, &mut out).unwrap();
    assert_eq!(i16::from_le_bytes([out[4], out[5]]), 0x4000);

    interface.release().done();
}

#[test]
fn i2c_write_through_generated_api() {
    let expectations = [
        I2cTransaction::write_read(0x18, vec![0x20], vec![0x07]),
        I2cTransaction::write(0x18, vec![0x20, 0x77]),
    ];
    let interface = I2cInterface::new(I2cMock::new(&expectations), SlaveAddr::Default);
    let mut driver = Lis2dh12::new(interface, NoopDelay::new());

    driver.device().ctrl_reg_1().modify(|r| r.set_odr(7)).unwrap();

    let (interface, _delay) = driver.destroy();
    interface.release().done();
}

#[test]
fn i2c_bus_error_is_internal() {
    let expectations =
        [I2cTransaction::write_read(0x18, vec![0x0F], vec![0]).with_error(ErrorKind::Other)];
    let mut interface = I2cInterface::new(I2cMock::new(&expectations), SlaveAddr::Default);

    let mut id = [0u8];
    assert_eq!(
        interface.read_register(0x0F, 8, &mut id),
        Err(Status::INTERNAL)
    );
    interface.release().done();
}

#[cfg(feature = "async")]
mod asynchronous {
    use super::*;
    use sensor_hal::lis2dh12::{I2cInterfaceAsync, SpiInterfaceAsync, probe_async};

    #[tokio::test]
    async fn probe_over_async_i2c() {
        let expectations = [I2cTransaction::write_read(0x18, vec![0x0F], vec![0x33])];
        let interface = I2cInterfaceAsync {
            i2c: I2cMock::new(&expectations),
            address: SlaveAddr::Default.addr(),
        };

        let mut interface = probe_async(interface).await.unwrap();
        interface.i2c.done();
    }

    #[tokio::test]
    async fn probe_rejects_other_chips() {
        let expectations = [
            SpiTransaction::transaction_start(),
            SpiTransaction::write_vec(vec![0x8F]),
            SpiTransaction::read_vec(vec![0x44]),
            SpiTransaction::transaction_end(),
        ];
        let mut spi = SpiMock::new(&expectations);
        let interface = SpiInterfaceAsync { spi: spi.clone() };

        assert_eq!(probe_async(interface).await.err(), Some(Status::NOT_FOUND));
        spi.done();
    }
}
